use axum::extract::State;
use axum::response::Html;
use axum::Json;
use contractlens_analyzer::samples::SAMPLES;
use contractlens_analyzer::AnalyzerError;

use crate::models::{
    AnalysisMode, AnalyzeRequest, AnalyzeResponse, ApiError, HealthResponse, SampleResponse,
};
use crate::state::AppState;

const INDEX_HTML: &str = include_str!("../static/index.html");

/// Browser front end.
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

pub async fn samples() -> Json<Vec<SampleResponse>> {
    Json(SAMPLES.iter().map(SampleResponse::from).collect())
}

pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        api_key_configured: state.api_key_configured,
    })
}

pub async fn analyze(
    State(state): State<AppState>,
    Json(req): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, ApiError> {
    if !state.api_key_configured {
        return Err(AnalyzerError::Config("GOOGLE_API_KEY not set".into()).into());
    }

    let analysis = match req.mode {
        AnalysisMode::Efficient => state.analyzer.analyze_efficient(&req.contract_text).await?,
        AnalysisMode::Full => state.analyzer.analyze(&req.contract_text).await?,
    };

    tracing::info!(
        mode = ?req.mode,
        word_count = analysis.info.word_count,
        warnings = analysis.warnings.len(),
        "analysis complete"
    );

    Ok(Json(AnalyzeResponse::new(analysis, req.mode)))
}
