//! Read-only collaborators consumed by the validators.
//!
//! Storage lives outside this crate. The validators only need three
//! lookups, expressed here as async traits so the database layer (or a
//! test fake) can be injected.

use async_trait::async_trait;
use bunchi_shared::types::ClientId;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::duplicate::DocumentRecord;
use crate::ledger::PostedGlEntry;

/// Failure of a collaborator lookup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    /// The backing store could not be reached.
    #[error("lookup backend unavailable: {0}")]
    Unavailable(String),

    /// The backing store answered with an error.
    #[error("lookup failed: {0}")]
    Backend(String),
}

/// Monthly workflow state of a client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkflowState {
    /// True once the month has been closed.
    pub is_locked: bool,
    /// Month the workflow refers to, `YYYY-MM`.
    pub month: String,
}

/// The slice of a client record the validators read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientRecord {
    /// Client key.
    pub id: ClientId,
    /// Display name, used in period-lock messages.
    #[serde(default)]
    pub name: Option<String>,
    /// Current workflow state, absent for newly onboarded clients.
    #[serde(default)]
    pub current_workflow: Option<WorkflowState>,
}

impl ClientRecord {
    /// True if the client's current period is locked.
    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.current_workflow.as_ref().is_some_and(|w| w.is_locked)
    }

    /// Name for messages, falling back to the key.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(self.id.as_str())
    }
}

/// Client master-data lookup.
#[async_trait]
pub trait ClientDirectory: Send + Sync {
    /// Fetches a client, `None` if it does not exist.
    async fn get_client_by_id(
        &self,
        client_id: &ClientId,
    ) -> Result<Option<ClientRecord>, LookupError>;
}

/// Posted ledger lookup.
#[async_trait]
pub trait LedgerReader: Send + Sync {
    /// All posted entries for a client.
    async fn get_gl_entries_by_client(
        &self,
        client_id: &ClientId,
    ) -> Result<Vec<PostedGlEntry>, LookupError>;
}

/// Source-document lookup.
#[async_trait]
pub trait DocumentReader: Send + Sync {
    /// All stored documents for a client.
    async fn get_documents_by_client(
        &self,
        client_id: &ClientId,
    ) -> Result<Vec<DocumentRecord>, LookupError>;
}
