//! Health check endpoints.

use axum::{Json, Router, extract::State, routing::get};
use bunchi_core::accounts::THAI_STANDARD_VERSION;
use serde::Serialize;

use crate::AppState;

/// Health check response.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: &'static str,
    /// Service version.
    pub version: &'static str,
    /// Chart of accounts version in use.
    pub chart_version: &'static str,
    /// Whether a ledger writer is configured.
    pub ledger: bool,
}

/// Health check handler.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        chart_version: THAI_STANDARD_VERSION,
        ledger: state.ledger.is_some(),
    })
}

/// Creates health check routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
