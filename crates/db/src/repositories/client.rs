//! Client repository for database operations.

use async_trait::async_trait;
use bunchi_core::lookup::{ClientDirectory, ClientRecord, LookupError, WorkflowState};
use bunchi_shared::types::ClientId;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, Set};

use super::lookup_error;
use crate::entities::clients;

/// Client repository for the client master and its period lock.
#[derive(Debug, Clone)]
pub struct ClientRepository {
    db: DatabaseConnection,
}

impl ClientRepository {
    /// Creates a new client repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds a client by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find_by_id(&self, id: &ClientId) -> Result<Option<clients::Model>, DbErr> {
        clients::Entity::find_by_id(id.as_str()).one(&self.db).await
    }

    /// Creates a client with an open workflow month.
    ///
    /// # Errors
    ///
    /// Returns an error if the database insert fails.
    pub async fn create(
        &self,
        id: &ClientId,
        name: &str,
        workflow_month: Option<&str>,
    ) -> Result<clients::Model, DbErr> {
        let now = chrono::Utc::now().into();

        clients::ActiveModel {
            id: Set(id.as_str().to_string()),
            name: Set(name.to_string()),
            workflow_month: Set(workflow_month.map(str::to_string)),
            is_locked: Set(false),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(&self.db)
        .await
    }

    /// Locks or unlocks the client's current workflow month.
    ///
    /// # Errors
    ///
    /// Returns an error if the client does not exist or the update fails.
    pub async fn set_locked(
        &self,
        id: &ClientId,
        is_locked: bool,
    ) -> Result<clients::Model, DbErr> {
        let client = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("client {id}")))?;

        let mut active: clients::ActiveModel = client.into();
        active.is_locked = Set(is_locked);
        active.update(&self.db).await
    }
}

/// Converts a client row into the record the validators read.
///
/// A locked row always yields a locked workflow, even without a month,
/// so the validator agrees with the lock `append_batch` enforces.
#[must_use]
pub fn to_client_record(model: clients::Model) -> ClientRecord {
    let current_workflow = match model.workflow_month {
        Some(month) => Some(WorkflowState {
            is_locked: model.is_locked,
            month,
        }),
        None if model.is_locked => Some(WorkflowState {
            is_locked: true,
            month: String::new(),
        }),
        None => None,
    };

    ClientRecord {
        id: ClientId::new(model.id),
        name: Some(model.name),
        current_workflow,
    }
}

#[async_trait]
impl ClientDirectory for ClientRepository {
    async fn get_client_by_id(
        &self,
        client_id: &ClientId,
    ) -> Result<Option<ClientRecord>, LookupError> {
        let model = self.find_by_id(client_id).await.map_err(lookup_error)?;
        Ok(model.map(to_client_record))
    }
}
