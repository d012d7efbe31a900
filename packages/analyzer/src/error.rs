//! Error types for the analyzer.
//!
//! `AnalyzerError` is the single error type returned by every fallible
//! operation. Each variant maps onto an [`ErrorKind`] so callers (the CLI,
//! the HTTP API) can branch on the category without matching on messages.

use serde::Serialize;
use strum::{Display, IntoStaticStr};
use thiserror::Error;

/// Main error type for the analyzer library.
#[derive(Debug, Error)]
pub enum AnalyzerError {
    /// Contract text was empty or whitespace only.
    #[error("Contract text cannot be empty")]
    EmptyInput,

    /// Contract text exceeds the configured word ceiling.
    #[error("Contract exceeds maximum word limit of {limit} words (current word count: {count})")]
    WordLimitExceeded { count: usize, limit: usize },

    /// No JSON object could be recovered from the model output.
    #[error("Could not parse JSON from model response ({} bytes)", .raw.len())]
    ResponseParse { raw: String },

    /// HTTP request to the model provider failed.
    #[error("Model request failed: {0}")]
    ModelRequest(#[from] reqwest::Error),

    /// Model provider answered with a non-success status.
    #[error("Model API error (status {status}): {message}")]
    ModelApi { status: u16, message: String },

    /// Model provider rate limited every attempt.
    #[error("Model rate limited, retry after {retry_after_secs}s")]
    ModelRateLimited { retry_after_secs: u64 },

    /// Model provider returned no text.
    #[error("Model returned an empty response")]
    ModelEmptyResponse,

    /// Model call did not finish within the configured timeout.
    #[error("Model call timed out after {secs}s")]
    ModelTimeout { secs: u64 },

    /// Invalid or missing configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Output serialization failed.
    #[error("Serialization failed: {0}")]
    Serialization(String),
}

/// Machine-readable category of an [`AnalyzerError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display, IntoStaticStr)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ErrorKind {
    EmptyInput,
    WordLimitExceeded,
    ResponseParse,
    ModelUnavailable,
    Config,
    Io,
    Serialization,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        (*self).into()
    }
}

impl AnalyzerError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::EmptyInput => ErrorKind::EmptyInput,
            Self::WordLimitExceeded { .. } => ErrorKind::WordLimitExceeded,
            Self::ResponseParse { .. } => ErrorKind::ResponseParse,
            Self::ModelRequest(_)
            | Self::ModelApi { .. }
            | Self::ModelRateLimited { .. }
            | Self::ModelEmptyResponse
            | Self::ModelTimeout { .. } => ErrorKind::ModelUnavailable,
            Self::Config(_) => ErrorKind::Config,
            Self::Serialization(_) => ErrorKind::Serialization,
            Self::Io(_) => ErrorKind::Io,
        }
    }

    /// True for rejections raised before any model call is made.
    pub fn is_validation(&self) -> bool {
        matches!(
            self.kind(),
            ErrorKind::EmptyInput | ErrorKind::WordLimitExceeded
        )
    }

    /// Structured form for reporting across process boundaries.
    pub fn to_body(&self) -> ErrorBody {
        ErrorBody {
            kind: self.kind(),
            message: self.to_string(),
        }
    }
}

/// Serializable error shape: a stable kind plus a human-readable message.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorBody {
    pub kind: ErrorKind,
    pub message: String,
}

/// Result type alias for analyzer operations.
pub type Result<T> = std::result::Result<T, AnalyzerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_limit_display_carries_both_numbers() {
        let err = AnalyzerError::WordLimitExceeded {
            count: 5001,
            limit: 5000,
        };
        let msg = err.to_string();
        assert!(msg.contains("5001"));
        assert!(msg.contains("5000"));
    }

    #[test]
    fn test_transport_errors_are_model_unavailable() {
        let errors = [
            AnalyzerError::ModelApi {
                status: 404,
                message: "model not found".into(),
            },
            AnalyzerError::ModelRateLimited {
                retry_after_secs: 60,
            },
            AnalyzerError::ModelEmptyResponse,
            AnalyzerError::ModelTimeout { secs: 5 },
        ];
        for err in errors {
            assert_eq!(err.kind(), ErrorKind::ModelUnavailable);
            assert!(!err.is_validation());
        }
    }

    #[test]
    fn test_response_parse_message_omits_raw_text() {
        let err = AnalyzerError::ResponseParse {
            raw: "secret model chatter".into(),
        };
        assert!(!err.to_string().contains("secret"));
        assert_eq!(err.kind().as_str(), "response_parse");
    }

    #[test]
    fn test_serialization_failure_has_its_own_kind() {
        let err = AnalyzerError::Serialization("bad yaml".into());
        assert_eq!(err.kind(), ErrorKind::Serialization);
        assert_ne!(err.kind(), ErrorKind::Config);
    }

    #[test]
    fn test_kind_names_match_serde_names() {
        let kinds = [
            ErrorKind::EmptyInput,
            ErrorKind::WordLimitExceeded,
            ErrorKind::ResponseParse,
            ErrorKind::ModelUnavailable,
            ErrorKind::Config,
            ErrorKind::Io,
            ErrorKind::Serialization,
        ];
        for kind in kinds {
            let json = serde_json::to_value(kind).expect("serialize");
            assert_eq!(json, kind.as_str());
            assert_eq!(kind.to_string(), kind.as_str());
        }
        assert_eq!(ErrorKind::WordLimitExceeded.as_str(), "word_limit_exceeded");
    }

    #[test]
    fn test_error_body_serializes_snake_case_kind() {
        let body = AnalyzerError::EmptyInput.to_body();
        let json = serde_json::to_value(&body).expect("serialize");
        assert_eq!(json["kind"], "empty_input");
        assert_eq!(json["message"], "Contract text cannot be empty");
    }
}
