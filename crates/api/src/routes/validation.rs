//! Stateless validation routes.
//!
//! Every route answers 200 with a `ValidationResult`; rule violations are
//! data, not HTTP errors. Only malformed payloads produce a 400.

use axum::{Json, Router, extract::State, routing::post};
use bunchi_core::ledger::{
    RawJournalLine, RawPostingRequest, parse_journal_lines, parse_posting_request,
    validate_journal_lines,
};
use bunchi_core::tax::{
    expected_total, expected_vat, expected_wht, validate_tax_id, validate_vat_calculation,
    validate_wht_calculation,
};
use bunchi_core::validation::ValidationResult;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::AppState;
use crate::error::ApiError;

/// Creates the validation routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/validate/gl-posting", post(validate_gl_posting))
        .route("/validate/journal-lines", post(validate_lines))
        .route("/validate/tax-id", post(validate_tax_id_route))
        .route("/validate/wht", post(validate_wht))
        .route("/validate/vat", post(validate_vat))
}

/// Request body for journal-line validation.
#[derive(Debug, Deserialize)]
pub struct JournalLinesRequest {
    /// Lines as extracted.
    #[serde(default)]
    pub lines: Vec<RawJournalLine>,
}

/// Request body for tax ID validation.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxIdRequest {
    /// Tax ID in any formatting.
    pub tax_id: String,
}

/// Request body for withholding tax validation.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WhtRequest {
    /// Gross amount before withholding.
    pub gross_amount: Decimal,
    /// Rate in percent.
    pub wht_rate: Decimal,
    /// Stated withholding.
    pub wht_amount: Decimal,
}

/// Response for withholding tax validation.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WhtResponse {
    /// Computed withholding; null when the inputs overflow.
    pub expected_wht: Option<Decimal>,
    /// Check outcome.
    #[serde(flatten)]
    pub result: ValidationResult,
}

/// Request body for VAT validation.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VatRequest {
    /// Amount before VAT.
    pub subtotal: Decimal,
    /// Rate in percent.
    pub vat_rate: Decimal,
    /// Stated VAT.
    pub vat_amount: Decimal,
    /// Stated grand total.
    pub grand_total: Decimal,
}

/// Response for VAT validation.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VatResponse {
    /// Computed VAT; null when the inputs overflow.
    pub expected_vat: Option<Decimal>,
    /// Computed grand total; null when the inputs overflow.
    pub expected_total: Option<Decimal>,
    /// Check outcome.
    #[serde(flatten)]
    pub result: ValidationResult,
}

/// POST `/validate/gl-posting` - Dry-run the posting rules.
async fn validate_gl_posting(
    State(state): State<AppState>,
    Json(raw): Json<RawPostingRequest>,
) -> Result<Json<ValidationResult>, ApiError> {
    let request = parse_posting_request(&raw)?;
    Ok(Json(state.engine.validate_gl_posting(&request).await))
}

/// POST `/validate/journal-lines` - Structural check of extracted lines.
async fn validate_lines(
    Json(body): Json<JournalLinesRequest>,
) -> Result<Json<ValidationResult>, ApiError> {
    let lines = parse_journal_lines(&body.lines)?;
    Ok(Json(validate_journal_lines(&lines)))
}

/// POST `/validate/tax-id`
async fn validate_tax_id_route(Json(body): Json<TaxIdRequest>) -> Json<ValidationResult> {
    Json(validate_tax_id(&body.tax_id))
}

/// POST `/validate/wht`
async fn validate_wht(Json(body): Json<WhtRequest>) -> Json<WhtResponse> {
    Json(WhtResponse {
        expected_wht: expected_wht(body.gross_amount, body.wht_rate),
        result: validate_wht_calculation(body.gross_amount, body.wht_rate, body.wht_amount),
    })
}

/// POST `/validate/vat`
async fn validate_vat(Json(body): Json<VatRequest>) -> Json<VatResponse> {
    Json(VatResponse {
        expected_vat: expected_vat(body.subtotal, body.vat_rate),
        expected_total: expected_total(body.subtotal, body.vat_rate),
        result: validate_vat_calculation(
            body.subtotal,
            body.vat_rate,
            body.vat_amount,
            body.grand_total,
        ),
    })
}
