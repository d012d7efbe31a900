//! ContractLens HTTP API.
//!
//! Serves a browser front end at `GET /` and exposes the analyzer over JSON:
//!
//! - `GET /api/health`
//! - `GET /api/samples`
//! - `POST /api/analyze` with `{"contract_text": "...", "mode": "efficient" | "full"}`

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub mod handlers;
pub mod models;
pub mod state;

pub use state::{AppState, SharedClient};

pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/health", get(handlers::health))
        .route("/api/samples", get(handlers::samples))
        .route("/api/analyze", post(handlers::analyze))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
