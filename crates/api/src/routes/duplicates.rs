//! Duplicate invoice routes.

use axum::{
    Json, Router,
    extract::{Path, State},
    routing::post,
};
use bunchi_core::duplicate::{DuplicateCheckResult, InvoiceCandidate};
use bunchi_shared::types::ClientId;

use crate::AppState;
use crate::error::ApiError;

/// Creates the duplicate-check routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/clients/{client_id}/documents/duplicate-check", post(check_duplicate))
}

/// POST `/clients/{client_id}/documents/duplicate-check`
async fn check_duplicate(
    State(state): State<AppState>,
    Path(client_id): Path<ClientId>,
    Json(candidate): Json<InvoiceCandidate>,
) -> Result<Json<DuplicateCheckResult>, ApiError> {
    let result = state.detector.check_duplicate_invoice(&client_id, &candidate).await?;
    Ok(Json(result))
}
