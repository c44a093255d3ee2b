//! API route definitions.

use axum::Router;

use crate::AppState;

pub mod accounts;
pub mod duplicates;
pub mod health;
pub mod postings;
pub mod validation;

/// Creates the API router with all routes.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .merge(accounts::routes())
        .merge(validation::routes())
        .merge(duplicates::routes())
        .merge(postings::routes())
}
