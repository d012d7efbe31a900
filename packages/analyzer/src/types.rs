use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString, IntoEnumIterator};

/// Sentinel clause text for a clause type absent from the contract.
pub const NOT_FOUND: &str = "Not found";

/// The fixed set of provisions every analysis reports on.
///
/// Declaration order is the canonical order used when filling gaps.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
    AsRefStr,
)]
#[strum(ascii_case_insensitive)]
pub enum ClauseType {
    PaymentTerms,
    Confidentiality,
    DisputeResolution,
    Termination,
}

impl ClauseType {
    /// Human-facing label, e.g. "Payment Terms".
    pub fn label(&self) -> &'static str {
        match self {
            Self::PaymentTerms => "Payment Terms",
            Self::Confidentiality => "Confidentiality",
            Self::DisputeResolution => "Dispute Resolution",
            Self::Termination => "Termination",
        }
    }

    /// Parse a clause type the way models tend to write it.
    ///
    /// Accepts `PaymentTerms`, `Payment Terms`, `payment_terms` and so on.
    /// Returns `None` for anything outside the closed set.
    pub fn parse_label(raw: &str) -> Option<Self> {
        let compact: String = raw.chars().filter(|c| c.is_alphanumeric()).collect();
        compact.parse().ok()
    }

    pub fn all() -> impl Iterator<Item = ClauseType> {
        Self::iter()
    }
}

/// A clause classified into one of the fixed types.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedClause {
    #[serde(rename = "type")]
    pub clause_type: ClauseType,
    /// Contract excerpt, or [`NOT_FOUND`].
    #[serde(rename = "clause")]
    pub text: String,
}

impl ExtractedClause {
    pub fn new(clause_type: ClauseType, text: impl Into<String>) -> Self {
        Self {
            clause_type,
            text: text.into(),
        }
    }

    pub fn not_found(clause_type: ClauseType) -> Self {
        Self::new(clause_type, NOT_FOUND)
    }

    pub fn is_not_found(&self) -> bool {
        self.text == NOT_FOUND
    }
}

/// A flagged excerpt and why it is risky.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskFlag {
    pub clause: String,
    pub reason: String,
}

/// The structured outcome of one analysis.
///
/// Only built by the normalizer, so `clauses` always holds at least one
/// entry per [`ClauseType`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractAnalysisResult {
    pub summary: String,
    pub clauses: Vec<ExtractedClause>,
    pub risky_clauses: Vec<RiskFlag>,
}

impl ContractAnalysisResult {
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn summary_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&serde_json::json!({ "summary": self.summary }))
    }

    pub fn clauses_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&serde_json::json!({ "clauses": self.clauses }))
    }

    pub fn risks_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&serde_json::json!({ "risky_clauses": self.risky_clauses }))
    }

    /// Clauses of one type, in extraction order.
    pub fn clauses_of(&self, clause_type: ClauseType) -> impl Iterator<Item = &ExtractedClause> {
        self.clauses
            .iter()
            .filter(move |c| c.clause_type == clause_type)
    }
}

/// Backend capability tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, AsRefStr)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ModelTier {
    /// Short-context, low-latency model.
    Fast,
    /// Long-context model for large contracts.
    Capable,
}

/// The model configuration every call of one request uses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModelConfig {
    pub tier: ModelTier,
    pub model: String,
}

/// One section of a multi-call analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Section {
    Summary,
    Clauses,
    RiskyClauses,
}

/// A non-fatal failure of one section while the others succeeded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PartialResultWarning {
    pub section: Section,
    pub message: String,
}

/// Pre-flight facts about a contract, computed without calling the model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContractInfo {
    pub word_count: usize,
    pub max_words: usize,
    pub is_valid: bool,
    pub model_to_use: String,
    pub is_long_context: bool,
}

/// Token usage tracking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TokenUsage {
    pub input_tokens: u64,
    pub output_tokens: u64,
}

impl TokenUsage {
    pub fn add(&mut self, other: &TokenUsage) {
        self.input_tokens += other.input_tokens;
        self.output_tokens += other.output_tokens;
    }
}

/// Everything an analysis call returns on success.
#[derive(Debug, Clone, Serialize)]
pub struct Analysis {
    pub result: ContractAnalysisResult,
    /// Sections that failed in three-call mode. Always empty in efficient mode.
    pub warnings: Vec<PartialResultWarning>,
    pub info: ContractInfo,
    pub token_usage: TokenUsage,
}
