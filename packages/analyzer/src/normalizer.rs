//! Completes a parsed record into a [`ContractAnalysisResult`].

use strum::IntoEnumIterator;

use crate::parser::ParsedRecord;
use crate::types::{ClauseType, ContractAnalysisResult, ExtractedClause};

/// Append a `"Not found"` entry for every clause type with no entry.
///
/// Real entries keep their order and are never deduplicated; synthetic
/// entries follow them in [`ClauseType`] order.
pub fn ensure_all_clause_types(mut clauses: Vec<ExtractedClause>) -> Vec<ExtractedClause> {
    for clause_type in ClauseType::iter() {
        if !clauses.iter().any(|c| c.clause_type == clause_type) {
            clauses.push(ExtractedClause::not_found(clause_type));
        }
    }
    clauses
}

/// Build the final result from a parsed record.
///
/// Never fails: a missing summary becomes `""` and missing lists stay empty.
pub fn normalize(parsed: ParsedRecord) -> ContractAnalysisResult {
    ContractAnalysisResult {
        summary: parsed.summary.unwrap_or_default(),
        clauses: ensure_all_clause_types(parsed.clauses),
        risky_clauses: parsed.risky_clauses,
    }
}

impl From<ContractAnalysisResult> for ParsedRecord {
    fn from(result: ContractAnalysisResult) -> Self {
        ParsedRecord {
            summary: Some(result.summary),
            clauses: result.clauses,
            risky_clauses: result.risky_clauses,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{RiskFlag, NOT_FOUND};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_record_gets_every_type() {
        let result = normalize(ParsedRecord::default());
        assert_eq!(result.summary, "");
        assert!(result.risky_clauses.is_empty());
        assert_eq!(
            result.clauses,
            ClauseType::iter()
                .map(ExtractedClause::not_found)
                .collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_missing_types_appended_after_real_entries() {
        let real = vec![
            ExtractedClause::new(ClauseType::Termination, "30 days' notice."),
            ExtractedClause::new(ClauseType::PaymentTerms, "Two installments."),
        ];
        let result = normalize(ParsedRecord {
            summary: Some("s".into()),
            clauses: real.clone(),
            risky_clauses: vec![],
        });

        assert_eq!(&result.clauses[..2], &real[..]);
        assert_eq!(
            &result.clauses[2..],
            &[
                ExtractedClause::not_found(ClauseType::Confidentiality),
                ExtractedClause::not_found(ClauseType::DisputeResolution),
            ]
        );
    }

    #[test]
    fn test_repeated_entries_not_deduplicated() {
        let clauses = vec![
            ExtractedClause::new(ClauseType::PaymentTerms, "Deposit of $50,000."),
            ExtractedClause::new(ClauseType::PaymentTerms, "Late fee of 1.5% per month."),
        ];
        let result = normalize(ParsedRecord {
            clauses,
            ..Default::default()
        });
        assert_eq!(result.clauses_of(ClauseType::PaymentTerms).count(), 2);
        assert_eq!(result.clauses.len(), 5);
    }

    #[test]
    fn test_absent_confidentiality_yields_single_not_found() {
        let result = normalize(ParsedRecord {
            clauses: vec![
                ExtractedClause::new(ClauseType::PaymentTerms, "p"),
                ExtractedClause::new(ClauseType::DisputeResolution, "d"),
                ExtractedClause::new(ClauseType::Termination, "t"),
            ],
            ..Default::default()
        });
        let confidentiality: Vec<_> = result.clauses_of(ClauseType::Confidentiality).collect();
        assert_eq!(confidentiality.len(), 1);
        assert_eq!(confidentiality[0].text, NOT_FOUND);
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let once = normalize(ParsedRecord {
            summary: Some("Summary.".into()),
            clauses: vec![ExtractedClause::new(ClauseType::Confidentiality, "5 years.")],
            risky_clauses: vec![RiskFlag {
                clause: "promptly".into(),
                reason: "undefined".into(),
            }],
        });
        let twice = normalize(ParsedRecord::from(once.clone()));
        assert_eq!(once, twice);
    }
}
