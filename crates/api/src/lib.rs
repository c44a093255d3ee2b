//! HTTP API layer with Axum routes and middleware.
//!
//! This crate provides:
//! - REST routes for posting validation, tax checks and duplicate checks
//! - The posting route that commits validated batches to the ledger
//! - Error responses derived from `AppError`

pub mod error;
pub mod routes;

#[cfg(test)]
pub(crate) mod test_support;

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use bunchi_core::accounts::ChartOfAccounts;
use bunchi_core::duplicate::DuplicateDetector;
use bunchi_core::ledger::GlValidationEngine;
use bunchi_db::GlEntryRepository;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Chart of accounts the engine validates against.
    pub chart: Arc<ChartOfAccounts>,
    /// GL posting validation engine.
    pub engine: Arc<GlValidationEngine>,
    /// Duplicate invoice detector.
    pub detector: Arc<DuplicateDetector>,
    /// Ledger writer (optional; posting returns 503 without it).
    pub ledger: Option<Arc<GlEntryRepository>>,
    /// Request-level timeout.
    pub request_timeout: Duration,
}

/// Creates the main application router.
pub fn create_router(state: AppState) -> Router {
    let timeout = state.request_timeout;

    Router::new()
        .nest("/api/v1", routes::api_routes())
        .layer(TimeoutLayer::new(timeout))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
