//! Document repository for stored source documents.

use async_trait::async_trait;
use bunchi_core::duplicate::{AiData, DocumentRecord};
use bunchi_core::lookup::{DocumentReader, LookupError};
use bunchi_shared::types::{ClientId, DocumentId};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
    Set,
};
use tracing::warn;

use super::lookup_error;
use crate::entities::documents;

/// Document repository.
#[derive(Debug, Clone)]
pub struct DocumentRepository {
    db: DatabaseConnection,
}

impl DocumentRepository {
    /// Creates a new document repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists a client's documents, oldest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find_by_client(
        &self,
        client_id: &ClientId,
    ) -> Result<Vec<documents::Model>, DbErr> {
        documents::Entity::find()
            .filter(documents::Column::ClientId.eq(client_id.as_str()))
            .order_by_asc(documents::Column::CreatedAt)
            .all(&self.db)
            .await
    }

    /// Stores a document with its extraction result.
    ///
    /// # Errors
    ///
    /// Returns an error if the database insert fails.
    pub async fn insert(
        &self,
        id: &DocumentId,
        client_id: &ClientId,
        ai_data: Option<serde_json::Value>,
    ) -> Result<documents::Model, DbErr> {
        documents::ActiveModel {
            id: Set(id.as_str().to_string()),
            client_id: Set(client_id.as_str().to_string()),
            ai_data: Set(ai_data),
            created_at: Set(chrono::Utc::now().into()),
        }
        .insert(&self.db)
        .await
    }
}

/// Converts a document row, dropping an `ai_data` payload that does not
/// have the expected shape.
#[must_use]
pub fn to_document_record(model: documents::Model) -> DocumentRecord {
    let ai_data = model.ai_data.and_then(|raw| match serde_json::from_value::<AiData>(raw) {
        Ok(data) => Some(data),
        Err(e) => {
            warn!(document_id = %model.id, error = %e, "Ignoring malformed ai_data");
            None
        }
    });

    DocumentRecord {
        id: DocumentId::new(model.id),
        ai_data,
    }
}

#[async_trait]
impl DocumentReader for DocumentRepository {
    async fn get_documents_by_client(
        &self,
        client_id: &ClientId,
    ) -> Result<Vec<DocumentRecord>, LookupError> {
        let models = self.find_by_client(client_id).await.map_err(lookup_error)?;
        Ok(models.into_iter().map(to_document_record).collect())
    }
}
