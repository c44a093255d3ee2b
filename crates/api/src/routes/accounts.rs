//! Chart of accounts routes.

use axum::{
    Json, Router,
    extract::{Query, State},
    routing::get,
};
use bunchi_core::accounts::{AccountType, ChartAccount, THAI_STANDARD_VERSION};
use serde::{Deserialize, Serialize};

use crate::AppState;

/// Creates the account routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/accounts", get(list_accounts))
}

/// Query parameters for listing accounts.
#[derive(Debug, Deserialize)]
pub struct ListAccountsQuery {
    /// Filter by account type.
    #[serde(rename = "type")]
    pub account_type: Option<AccountType>,
    /// Filter by active status.
    pub active: Option<bool>,
}

/// Response for the account listing.
#[derive(Debug, Serialize)]
pub struct AccountsResponse {
    /// Chart version.
    pub version: &'static str,
    /// Accounts ordered by code.
    pub accounts: Vec<ChartAccount>,
}

/// GET `/accounts` - List the chart of accounts.
async fn list_accounts(
    State(state): State<AppState>,
    Query(query): Query<ListAccountsQuery>,
) -> Json<AccountsResponse> {
    let accounts = state
        .chart
        .iter()
        .filter(|a| query.account_type.is_none_or(|t| a.account_type == t))
        .filter(|a| query.active.is_none_or(|active| a.is_active == active))
        .cloned()
        .collect();

    Json(AccountsResponse {
        version: THAI_STANDARD_VERSION,
        accounts,
    })
}
