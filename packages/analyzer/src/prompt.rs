use std::fmt::Write;

use strum::IntoEnumIterator;

use crate::types::{ClauseType, NOT_FOUND};
use crate::validator::ContractText;

const SYSTEM_ANALYST: &str = include_str!("../prompts/system_analyst.txt");

/// Hard ceiling on summary length, in words.
pub const SUMMARY_WORD_LIMIT: usize = 200;

/// A named group of risk indicators shown to the model as examples.
pub struct IndicatorGroup {
    pub name: &'static str,
    pub terms: &'static [&'static str],
}

/// Illustrative risk language. The model is told the list is not exhaustive.
pub const RISK_INDICATORS: &[IndicatorGroup] = &[
    IndicatorGroup {
        name: "Vague language",
        terms: &[
            "reasonable efforts",
            "best efforts",
            "commercially reasonable efforts",
            "good faith",
            "substantially similar",
            "to the extent possible",
            "including but not limited to",
            "and/or",
        ],
    },
    IndicatorGroup {
        name: "Undefined triggers and timing",
        terms: &[
            "reasonable time",
            "timely manner",
            "as soon as practicable",
            "promptly",
            "without undue delay",
            "material breach",
            "materially adverse",
            "upon completion",
        ],
    },
    IndicatorGroup {
        name: "One-sided power",
        terms: &[
            "at the discretion of",
            "in its sole discretion",
            "as deemed appropriate",
            "at its option",
            "may elect to",
            "reserves the right to modify",
            "subject to change",
            "sole remedy",
            "exclusive remedy",
            "waives all claims",
            "indemnify and hold harmless",
        ],
    },
    IndicatorGroup {
        name: "Missing specifics",
        terms: &[
            "undefined deadlines or durations",
            "unclear completion milestones or acceptance criteria",
            "obligations with no remedy or penalty for breach",
            "open-ended duration or scope",
            "important protections that are absent altogether",
        ],
    },
    IndicatorGroup {
        name: "Financial ambiguity",
        terms: &[
            "a reasonable fee",
            "to be determined",
            "fees based on complexity",
            "payment terms without amounts or due dates",
            "uncapped costs or expenses",
        ],
    },
];

/// The system prompt shared by every analysis call.
pub fn build_system_prompt() -> &'static str {
    SYSTEM_ANALYST
}

fn push_contract(prompt: &mut String, contract: &ContractText) {
    prompt.push_str("# Contract\n\n");
    prompt.push_str(contract.as_str());
    prompt.push_str("\n\n");
}

fn summary_guidance() -> String {
    format!(
        "- Keep the summary under {SUMMARY_WORD_LIMIT} words.\n\
         - Prioritize payment terms, confidentiality, termination and dispute resolution, \
         then any other critical terms.\n\
         - State only what the contract says. Do not infer terms it leaves unstated.\n"
    )
}

fn clause_guidance() -> String {
    let mut guidance = String::new();
    for clause_type in ClauseType::iter() {
        let _ = writeln!(
            guidance,
            "- {} (`{}`): {}",
            clause_type.label(),
            clause_type,
            clause_description(clause_type)
        );
    }
    let _ = write!(
        guidance,
        "\nRules:\n\
         - Classify each provision by its legal function, not by keywords or headings.\n\
         - Copy the clause text exactly as it appears in the contract.\n\
         - If the contract has no provision of a type, include that type once with \
         \"clause\": \"{NOT_FOUND}\".\n\
         - If the contract has several separate provisions of the same type, include \
         one entry for each. Do not merge them.\n\
         - Never invent a clause that does not exist in the contract.\n"
    );
    guidance
}

fn clause_description(clause_type: ClauseType) -> &'static str {
    match clause_type {
        ClauseType::PaymentTerms => {
            "amounts, installments, due dates, invoicing, late payment penalties"
        }
        ClauseType::Confidentiality => {
            "what information is protected, for how long, and the disclosure restrictions"
        }
        ClauseType::DisputeResolution => {
            "how disputes are settled: negotiation, mediation, arbitration or litigation, \
             venue and governing rules"
        }
        ClauseType::Termination => {
            "when and how either party may end the agreement, notice periods, \
             and consequences of ending it"
        }
    }
}

fn risk_guidance() -> String {
    let mut guidance = String::from(
        "Examples of risky language, grouped by category. These lists are illustrative, \
         not exhaustive:\n\n",
    );
    for group in RISK_INDICATORS {
        let terms = group
            .terms
            .iter()
            .map(|t| format!("\"{t}\""))
            .collect::<Vec<_>>()
            .join(", ");
        let _ = writeln!(guidance, "- {}: {terms}", group.name);
    }
    guidance.push_str(
        "\nRules:\n\
         - Also flag risky or ambiguous language that is not on these lists: one-sided terms, \
         subjective standards, missing remedies, open-ended obligations.\n\
         - Every flagged excerpt must be exact contract text and must come with a specific \
         explanation of the legal risk and how it could lead to a dispute.\n\
         - If nothing is risky, return an empty array.\n",
    );
    guidance
}

fn clause_schema_entries() -> String {
    ClauseType::iter()
        .map(|t| {
            format!("    {{\"type\": \"{t}\", \"clause\": \"exact text from the contract or '{NOT_FOUND}'\"}}")
        })
        .collect::<Vec<_>>()
        .join(",\n")
}

const RISK_SCHEMA_ENTRY: &str = "    {\n      \"clause\": \"exact risky text from the contract\",\n      \"reason\": \"why this language is risky\"\n    }";

/// Build the prompt for the summary task.
pub fn build_summary_prompt(contract: &ContractText) -> String {
    let mut prompt = String::from("Summarize the contract below.\n\n");
    push_contract(&mut prompt, contract);
    prompt.push_str("# Instructions\n\n");
    prompt.push_str(&summary_guidance());
    prompt.push_str(
        "\n# Output\n\nReturn a JSON object with exactly this structure:\n\
         {\"summary\": \"concise factual summary\"}\n",
    );
    prompt
}

/// Build the prompt for the clause extraction task.
pub fn build_clause_prompt(contract: &ContractText) -> String {
    let mut prompt = String::from("Extract and classify the clauses of the contract below.\n\n");
    push_contract(&mut prompt, contract);
    prompt.push_str("# Clause types\n\n");
    prompt.push_str(&clause_guidance());
    let _ = write!(
        prompt,
        "\n# Output\n\nReturn a JSON object with exactly this structure:\n\
         {{\n  \"clauses\": [\n{}\n  ]\n}}\n",
        clause_schema_entries()
    );
    prompt
}

/// Build the prompt for the risk identification task.
pub fn build_risk_prompt(contract: &ContractText) -> String {
    let mut prompt =
        String::from("Identify risky or ambiguous clauses in the contract below.\n\n");
    push_contract(&mut prompt, contract);
    prompt.push_str("# Risk indicators\n\n");
    prompt.push_str(&risk_guidance());
    let _ = write!(
        prompt,
        "\n# Output\n\nReturn a JSON object with exactly this structure:\n\
         {{\n  \"risky_clauses\": [\n{RISK_SCHEMA_ENTRY}\n  ]\n}}\n"
    );
    prompt
}

/// Build the single prompt that covers summary, clauses and risks.
pub fn build_combined_prompt(contract: &ContractText) -> String {
    let mut prompt = String::from(
        "Perform a complete analysis of the contract below: a summary, the classified \
         clauses, and the risky clauses.\n\n",
    );
    push_contract(&mut prompt, contract);
    prompt.push_str("# 1. Summary\n\n");
    prompt.push_str(&summary_guidance());
    prompt.push_str("\n# 2. Clauses\n\n");
    prompt.push_str(&clause_guidance());
    prompt.push_str("\n# 3. Risks\n\n");
    prompt.push_str(&risk_guidance());
    let _ = write!(
        prompt,
        "\n# Output\n\nReturn ONE JSON object containing all three parts, with exactly \
         this structure:\n\
         {{\n  \"summary\": \"concise factual summary\",\n  \"clauses\": [\n{}\n  ],\n  \
         \"risky_clauses\": [\n{RISK_SCHEMA_ENTRY}\n  ]\n}}\n\n\
         Return only valid JSON, no additional text.\n",
        clause_schema_entries()
    );
    prompt
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validator::InputValidator;

    fn contract() -> ContractText {
        InputValidator::new(5000)
            .validate("Party B shall pay $10,000 within 30 days of invoice.")
            .expect("valid")
    }

    #[test]
    fn test_system_prompt_not_empty() {
        assert!(!build_system_prompt().is_empty());
    }

    #[test]
    fn test_every_prompt_embeds_contract_verbatim() {
        let contract = contract();
        for prompt in [
            build_summary_prompt(&contract),
            build_clause_prompt(&contract),
            build_risk_prompt(&contract),
            build_combined_prompt(&contract),
        ] {
            assert!(prompt.contains("Party B shall pay $10,000 within 30 days of invoice."));
        }
    }

    #[test]
    fn test_summary_prompt_enforces_limit() {
        let prompt = build_summary_prompt(&contract());
        assert!(prompt.contains("under 200 words"));
        assert!(prompt.contains("\"summary\""));
        assert!(prompt.contains("Do not infer"));
    }

    #[test]
    fn test_clause_prompt_lists_types_and_rules() {
        let prompt = build_clause_prompt(&contract());
        for clause_type in ClauseType::iter() {
            assert!(prompt.contains(&format!("\"type\": \"{clause_type}\"")));
        }
        assert!(prompt.contains("\"Not found\""));
        assert!(prompt.contains("legal function, not by keywords"));
        assert!(prompt.contains("include one entry for each"));
    }

    #[test]
    fn test_risk_prompt_embeds_indicators() {
        let prompt = build_risk_prompt(&contract());
        for group in RISK_INDICATORS {
            assert!(prompt.contains(group.name));
        }
        assert!(prompt.contains("\"best efforts\""));
        assert!(prompt.contains("not exhaustive"));
        assert!(prompt.contains("\"reason\""));
    }

    #[test]
    fn test_combined_prompt_has_all_sections() {
        let prompt = build_combined_prompt(&contract());
        assert!(prompt.contains("\"summary\""));
        assert!(prompt.contains("\"clauses\""));
        assert!(prompt.contains("\"risky_clauses\""));
        assert!(prompt.contains("ONE JSON object"));
    }
}
