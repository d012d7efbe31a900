use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use contractlens_analyzer::samples::SampleContract;
use contractlens_analyzer::{
    Analysis, AnalyzerError, ErrorKind, ExtractedClause, PartialResultWarning, RiskFlag,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisMode {
    /// One combined model call.
    #[default]
    Efficient,
    /// One model call per section.
    Full,
}

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub contract_text: String,
    #[serde(default)]
    pub mode: AnalysisMode,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeMetadata {
    pub word_count: usize,
    pub model_used: String,
    pub is_long_context: bool,
    pub mode: AnalysisMode,
    pub input_tokens: u64,
    pub output_tokens: u64,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub summary: String,
    pub clauses: Vec<ExtractedClause>,
    pub risky_clauses: Vec<RiskFlag>,
    pub metadata: AnalyzeMetadata,
    pub warnings: Vec<PartialResultWarning>,
}

impl AnalyzeResponse {
    pub fn new(analysis: Analysis, mode: AnalysisMode) -> Self {
        Self {
            summary: analysis.result.summary,
            clauses: analysis.result.clauses,
            risky_clauses: analysis.result.risky_clauses,
            metadata: AnalyzeMetadata {
                word_count: analysis.info.word_count,
                model_used: analysis.info.model_to_use,
                is_long_context: analysis.info.is_long_context,
                mode,
                input_tokens: analysis.token_usage.input_tokens,
                output_tokens: analysis.token_usage.output_tokens,
            },
            warnings: analysis.warnings,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub api_key_configured: bool,
}

#[derive(Debug, Serialize)]
pub struct SampleResponse {
    pub name: &'static str,
    pub description: &'static str,
    pub text: &'static str,
}

impl From<&'static SampleContract> for SampleResponse {
    fn from(sample: &'static SampleContract) -> Self {
        Self {
            name: sample.name,
            description: sample.description,
            text: sample.text,
        }
    }
}

/// Analyzer error rendered as a JSON `ErrorBody` with a matching status.
#[derive(Debug)]
pub struct ApiError(pub AnalyzerError);

impl From<AnalyzerError> for ApiError {
    fn from(err: AnalyzerError) -> Self {
        Self(err)
    }
}

pub fn status_for(kind: ErrorKind) -> StatusCode {
    match kind {
        ErrorKind::EmptyInput | ErrorKind::WordLimitExceeded => StatusCode::BAD_REQUEST,
        ErrorKind::ResponseParse => StatusCode::BAD_GATEWAY,
        ErrorKind::ModelUnavailable => StatusCode::SERVICE_UNAVAILABLE,
        ErrorKind::Config | ErrorKind::Io | ErrorKind::Serialization => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = status_for(self.0.kind());
        if status.is_server_error() {
            tracing::error!(error = %self.0, "analysis failed");
        } else {
            tracing::debug!(error = %self.0, "analysis rejected");
        }
        (status, Json(self.0.to_body())).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_defaults_to_efficient() {
        let req: AnalyzeRequest =
            serde_json::from_str(r#"{"contract_text": "x"}"#).expect("deserialize");
        assert_eq!(req.mode, AnalysisMode::Efficient);
        let req: AnalyzeRequest =
            serde_json::from_str(r#"{"contract_text": "x", "mode": "full"}"#).expect("deserialize");
        assert_eq!(req.mode, AnalysisMode::Full);
    }

    #[test]
    fn test_unknown_mode_is_rejected() {
        let req = serde_json::from_str::<AnalyzeRequest>(r#"{"contract_text": "x", "mode": "fast"}"#);
        assert!(req.is_err());
    }

    #[test]
    fn test_status_mapping() {
        assert_eq!(status_for(ErrorKind::EmptyInput), StatusCode::BAD_REQUEST);
        assert_eq!(status_for(ErrorKind::WordLimitExceeded), StatusCode::BAD_REQUEST);
        assert_eq!(status_for(ErrorKind::ResponseParse), StatusCode::BAD_GATEWAY);
        assert_eq!(
            status_for(ErrorKind::ModelUnavailable),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            status_for(ErrorKind::Config),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            status_for(ErrorKind::Serialization),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
