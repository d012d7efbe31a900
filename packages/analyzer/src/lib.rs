//! ContractLens analyzer - LLM-backed contract analysis.
//!
//! Sends contract text to a text-generation model and turns its free-form
//! answer into a [`ContractAnalysisResult`]: a summary, the payment,
//! confidentiality, dispute-resolution and termination clauses, and a list
//! of risk flags.
//!
//! # Example
//!
//! ```
//! use contractlens_analyzer::{normalize, parse_response, ClauseType, ResponseShape};
//!
//! let raw = "Here you go:\n```json\n{\"summary\": \"Short.\", \"clauses\": []}\n```";
//! let parsed = parse_response(raw, ResponseShape::Combined).unwrap();
//! let result = normalize(parsed);
//! assert_eq!(result.summary, "Short.");
//! assert_eq!(result.clauses.len(), 4);
//! assert!(result.clauses_of(ClauseType::Termination).all(|c| c.is_not_found()));
//! ```
//!
//! # Architecture
//!
//! - [`validator`]: input checks (empty text, word ceiling)
//! - [`router`]: fast/capable model tier selection by word count
//! - [`prompt`]: task prompts and risk indicator lists
//! - [`client`]: the `LlmClient` trait and the Gemini HTTP client
//! - [`parser`]: tiered JSON recovery from model output
//! - [`normalizer`]: clause completeness and result assembly
//! - [`analyzer`]: the orchestrator tying the pipeline together
//! - [`cli`]: command-line interface

pub mod analyzer;
pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod normalizer;
pub mod parser;
pub mod prompt;
pub mod router;
pub mod samples;
pub mod types;
pub mod validator;

pub use analyzer::ContractAnalyzer;
#[cfg(any(test, feature = "test-utils"))]
pub use client::test_support::MockLlmClient;
pub use client::{GeminiClient, LlmClient, LlmRequest, LlmResponse};
pub use config::AnalyzerConfig;
pub use error::{AnalyzerError, ErrorBody, ErrorKind, Result};
pub use normalizer::normalize;
pub use parser::{parse_response, ParseTier, ParsedRecord, ResponseShape};
pub use router::ModelRouter;
pub use types::{
    Analysis, ClauseType, ContractAnalysisResult, ContractInfo, ExtractedClause, ModelConfig,
    ModelTier, PartialResultWarning, RiskFlag, Section, TokenUsage, NOT_FOUND,
};
pub use validator::{ContractText, InputValidator};
