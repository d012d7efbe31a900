//! Recovery of structured data from free-form model output.
//!
//! Model responses arrive as untyped text: sometimes bare JSON, sometimes a
//! fenced code block, sometimes JSON wrapped in commentary. [`parse_response`]
//! tries a fixed sequence of [`ParseTier`]s and the first one that yields a
//! JSON object wins. Typed data only leaves this module as a [`ParsedRecord`].

use std::sync::LazyLock;

use regex::Regex;
use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::error::{AnalyzerError, Result};
use crate::types::{ClauseType, ExtractedClause, RiskFlag};

/// Fenced code block, optionally tagged `json`.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static FENCED_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)```(?:json)?[ \t]*\r?\n?([\s\S]*?)```").expect("valid regex")
});

/// Which keys a response is expected to carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseShape {
    Summary,
    Clauses,
    RiskyClauses,
    /// All three sections in one object.
    Combined,
}

impl ResponseShape {
    fn wants_summary(self) -> bool {
        matches!(self, Self::Summary | Self::Combined)
    }

    fn wants_clauses(self) -> bool {
        matches!(self, Self::Clauses | Self::Combined)
    }

    fn wants_risks(self) -> bool {
        matches!(self, Self::RiskyClauses | Self::Combined)
    }
}

/// Typed content recovered from one model response.
///
/// Keys missing from the response default to `None`/empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedRecord {
    pub summary: Option<String>,
    pub clauses: Vec<ExtractedClause>,
    pub risky_clauses: Vec<RiskFlag>,
}

/// Extraction strategies, tried in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseTier {
    /// The whole response is a JSON object.
    Direct,
    /// A fenced code block holds a JSON object.
    Fenced,
    /// The first balanced top-level `{...}` span that parses.
    BraceScan,
}

impl ParseTier {
    pub const ORDER: [ParseTier; 3] = [Self::Direct, Self::Fenced, Self::BraceScan];

    fn attempt(self, raw: &str) -> Option<Map<String, Value>> {
        match self {
            Self::Direct => parse_object(raw),
            Self::Fenced => FENCED_BLOCK
                .captures_iter(raw)
                .filter_map(|caps| caps.get(1))
                .find_map(|m| parse_object(m.as_str())),
            Self::BraceScan => brace_candidates(raw).into_iter().find_map(parse_object),
        }
    }
}

fn parse_object(text: &str) -> Option<Map<String, Value>> {
    match serde_json::from_str::<Value>(text.trim()) {
        Ok(Value::Object(map)) => Some(map),
        _ => None,
    }
}

/// Balanced top-level `{...}` spans, in order.
///
/// Only a `{` outside every earlier span opens a candidate, so an object
/// nested in a truncated or malformed outer object is never returned on its
/// own. Braces inside JSON string literals are ignored; an unclosed opener
/// swallows the rest of the text.
fn brace_candidates(raw: &str) -> Vec<&str> {
    let mut spans = Vec::new();
    let mut depth = 0usize;
    let mut start = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (offset, c) in raw.char_indices() {
        if in_string {
            match c {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }
        match c {
            '"' if depth > 0 => in_string = true,
            '{' => {
                if depth == 0 {
                    start = offset;
                }
                depth += 1;
            }
            '}' if depth > 0 => {
                depth -= 1;
                if depth == 0 {
                    spans.push(&raw[start..=offset]);
                }
            }
            _ => {}
        }
    }
    spans
}

/// Recover a JSON object from raw model output.
///
/// # Errors
/// [`AnalyzerError::ResponseParse`] carrying the raw text when no tier succeeds.
pub fn extract_json_object(raw: &str) -> Result<(ParseTier, Map<String, Value>)> {
    for tier in ParseTier::ORDER {
        if let Some(map) = tier.attempt(raw) {
            debug!(?tier, "parsed model response");
            return Ok((tier, map));
        }
    }
    Err(AnalyzerError::ResponseParse {
        raw: raw.to_string(),
    })
}

/// Parse a model response into the typed record for `shape`.
pub fn parse_response(raw: &str, shape: ResponseShape) -> Result<ParsedRecord> {
    let (_, map) = extract_json_object(raw)?;
    Ok(record_from_map(&map, shape))
}

fn record_from_map(map: &Map<String, Value>, shape: ResponseShape) -> ParsedRecord {
    let mut record = ParsedRecord::default();

    if shape.wants_summary() {
        record.summary = map
            .get("summary")
            .and_then(Value::as_str)
            .map(|s| s.trim().to_string());
    }
    if shape.wants_clauses() {
        record.clauses = entries(map, "clauses").filter_map(clause_from_value).collect();
    }
    if shape.wants_risks() {
        record.risky_clauses = entries(map, "risky_clauses")
            .filter_map(risk_from_value)
            .collect();
    }

    record
}

fn entries<'a>(map: &'a Map<String, Value>, key: &str) -> impl Iterator<Item = &'a Value> {
    map.get(key)
        .and_then(Value::as_array)
        .into_iter()
        .flatten()
}

fn string_field<'a>(value: &'a Value, keys: &[&str]) -> Option<&'a str> {
    keys.iter()
        .find_map(|k| value.get(*k).and_then(Value::as_str))
        .map(str::trim)
}

fn clause_from_value(value: &Value) -> Option<ExtractedClause> {
    let raw_type = string_field(value, &["type"])?;
    let Some(clause_type) = ClauseType::parse_label(raw_type) else {
        warn!(clause_type = raw_type, "discarding clause with unrecognized type");
        return None;
    };
    let text = string_field(value, &["clause", "text"])?;
    if text.is_empty() {
        return None;
    }
    Some(ExtractedClause::new(clause_type, text))
}

fn risk_from_value(value: &Value) -> Option<RiskFlag> {
    let clause = string_field(value, &["clause", "text"]).filter(|c| !c.is_empty())?;
    let reason = string_field(value, &["reason"]).unwrap_or_default();
    Some(RiskFlag {
        clause: clause.to_string(),
        reason: reason.to_string(),
    })
}
