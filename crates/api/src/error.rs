//! Error responses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use bunchi_core::ledger::ParseError;
use bunchi_core::lookup::LookupError;
use bunchi_db::PostingError;
use bunchi_shared::AppError;
use serde_json::json;
use tracing::error;

/// Wrapper that renders an `AppError` as a JSON response.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.0.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        if status.is_server_error() {
            error!(error = %self.0, "Request failed");
        }

        (
            status,
            Json(json!({
                "error": self.0.error_code(),
                "message": self.0.to_string(),
            })),
        )
            .into_response()
    }
}

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl From<ParseError> for ApiError {
    fn from(err: ParseError) -> Self {
        Self(AppError::Validation(format!("{}: {err}", err.error_code())))
    }
}

impl From<LookupError> for ApiError {
    fn from(err: LookupError) -> Self {
        Self(AppError::ExternalService(err.to_string()))
    }
}

impl From<PostingError> for ApiError {
    fn from(err: PostingError) -> Self {
        let app = match err {
            PostingError::ClientNotFound(_) => AppError::NotFound(err.to_string()),
            PostingError::PeriodLocked { .. } => AppError::Conflict(err.to_string()),
            PostingError::InvalidDate(_) => AppError::Validation(err.to_string()),
            PostingError::Database(_) => AppError::Database(err.to_string()),
        };
        Self(app)
    }
}
