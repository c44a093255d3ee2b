//! GL posting route: validate, then append atomically.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
};
use bunchi_core::ledger::{RawPostingRequest, parse_posting_request};
use bunchi_core::validation::ValidationResult;
use bunchi_shared::AppError;
use serde::Serialize;
use serde_json::json;
use tracing::{info, warn};
use uuid::Uuid;

use crate::AppState;
use crate::error::ApiError;

/// Creates the posting routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/gl/postings", post(create_posting))
}

/// Response for a committed posting.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostingResponse {
    /// Number of ledger rows written.
    pub posted: usize,
    /// IDs of the written rows.
    pub entry_ids: Vec<Uuid>,
    /// Validation outcome, carrying any warnings.
    pub validation: ValidationResult,
}

/// POST `/gl/postings` - Validate and commit a batch.
async fn create_posting(
    State(state): State<AppState>,
    Json(raw): Json<RawPostingRequest>,
) -> Result<Response, ApiError> {
    let request = parse_posting_request(&raw)?;

    let validation = state.engine.validate_gl_posting(&request).await;
    if !validation.is_valid() {
        info!(
            client_id = %request.client_id,
            errors = validation.errors().len(),
            "Posting rejected by validation"
        );
        return Ok((StatusCode::UNPROCESSABLE_ENTITY, Json(validation)).into_response());
    }

    let Some(ledger) = state.ledger.as_ref() else {
        warn!("Posting attempted without a ledger writer");
        return Ok((
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({
                "error": "ledger_unavailable",
                "message": "Ledger storage is not configured"
            })),
        )
            .into_response());
    };

    let inserted = ledger.append_batch(&request).await?;
    if inserted.is_empty() {
        return Err(AppError::Internal("ledger append wrote no rows".to_string()).into());
    }

    Ok((
        StatusCode::CREATED,
        Json(PostingResponse {
            posted: inserted.len(),
            entry_ids: inserted.into_iter().map(|m| m.id).collect(),
            validation,
        }),
    )
        .into_response())
}
