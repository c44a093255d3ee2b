//! In-memory collaborators and request helpers for route tests.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Request, Response, header::CONTENT_TYPE},
};
use bunchi_core::accounts::thai_standard;
use bunchi_core::duplicate::{
    AiData, Counterparty, DocumentRecord, DuplicateDetector, Financials, HeaderData, Parties,
};
use bunchi_core::ledger::{GlValidationEngine, PostedGlEntry};
use bunchi_core::lookup::{
    ClientDirectory, ClientRecord, DocumentReader, LedgerReader, LookupError, WorkflowState,
};
use bunchi_shared::types::{ClientId, DocumentId};
use http_body_util::BodyExt;
use rust_decimal_macros::dec;
use tower::ServiceExt;

use crate::{AppState, create_router};

/// Client whose June period is closed.
pub const LOCKED_CLIENT: &str = "locked";

struct FakeStore;

#[async_trait]
impl ClientDirectory for FakeStore {
    async fn get_client_by_id(
        &self,
        client_id: &ClientId,
    ) -> Result<Option<ClientRecord>, LookupError> {
        Ok(Some(ClientRecord {
            id: client_id.clone(),
            name: Some("Siam Trading".to_string()),
            current_workflow: Some(WorkflowState {
                is_locked: client_id.as_str() == LOCKED_CLIENT,
                month: "2024-06".to_string(),
            }),
        }))
    }
}

#[async_trait]
impl LedgerReader for FakeStore {
    async fn get_gl_entries_by_client(
        &self,
        _: &ClientId,
    ) -> Result<Vec<PostedGlEntry>, LookupError> {
        Ok(Vec::new())
    }
}

#[async_trait]
impl DocumentReader for FakeStore {
    async fn get_documents_by_client(
        &self,
        client_id: &ClientId,
    ) -> Result<Vec<DocumentRecord>, LookupError> {
        if client_id.as_str() == "offline" {
            return Err(LookupError::Unavailable("document store offline".to_string()));
        }
        Ok(vec![DocumentRecord {
            id: DocumentId::new("doc-1"),
            ai_data: Some(AiData {
                header_data: Some(HeaderData {
                    inv_number: Some("IV-001".to_string()),
                    inv_date: Some("2024-06-10".to_string()),
                }),
                parties: Some(Parties {
                    counterparty: Some(Counterparty {
                        tax_id: Some("0105562027123".to_string()),
                        name: None,
                    }),
                }),
                financials: Some(Financials {
                    grand_total: Some(dec!(1070)),
                }),
            }),
        }])
    }
}

/// State wired to in-memory fakes, without a ledger writer.
pub fn test_state() -> AppState {
    let chart = Arc::new(thai_standard());
    let store = Arc::new(FakeStore);

    AppState {
        engine: Arc::new(GlValidationEngine::new(chart.clone(), store.clone(), store.clone())),
        detector: Arc::new(DuplicateDetector::new(store)),
        chart,
        ledger: None,
        request_timeout: Duration::from_secs(5),
    }
}

/// Sends a GET through the full router.
pub async fn get(state: AppState, uri: &str) -> Response<Body> {
    create_router(state)
        .oneshot(Request::builder().method("GET").uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

/// Sends a JSON POST through the full router.
pub async fn post_json(state: AppState, uri: &str, body: serde_json::Value) -> Response<Body> {
    create_router(state)
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap()
}

/// Reads a response body as JSON.
pub async fn read_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
