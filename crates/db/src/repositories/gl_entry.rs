//! GL entry repository: posted ledger reads and the atomic batch append.

use async_trait::async_trait;
use bunchi_core::ledger::{GlPostingRequest, PostedGlEntry};
use bunchi_core::lookup::{LedgerReader, LookupError};
use bunchi_shared::types::ClientId;
use chrono::NaiveDate;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect,
    Set, TransactionTrait,
};
use tracing::info;
use uuid::Uuid;

use super::lookup_error;
use crate::entities::{clients, gl_entries};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Error types for ledger append operations.
#[derive(Debug, thiserror::Error)]
pub enum PostingError {
    /// Client not found.
    #[error("Client not found: {0}")]
    ClientNotFound(ClientId),

    /// The client's period was locked before the batch committed.
    #[error("Period {month} is locked for client {client_id}")]
    PeriodLocked {
        /// Client whose period is locked.
        client_id: ClientId,
        /// Locked workflow month.
        month: String,
    },

    /// An entry date is not a calendar date.
    #[error("Invalid entry date: {0}")]
    InvalidDate(String),

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

/// GL entry repository.
#[derive(Debug, Clone)]
pub struct GlEntryRepository {
    db: DatabaseConnection,
}

impl GlEntryRepository {
    /// Creates a new GL entry repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists a client's posted entries in posting order.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find_by_client(
        &self,
        client_id: &ClientId,
    ) -> Result<Vec<gl_entries::Model>, DbErr> {
        gl_entries::Entity::find()
            .filter(gl_entries::Column::ClientId.eq(client_id.as_str()))
            .order_by_asc(gl_entries::Column::CreatedAt)
            .order_by_asc(gl_entries::Column::Id)
            .all(&self.db)
            .await
    }

    /// Appends a validated batch in one database transaction.
    ///
    /// The client row is locked `FOR UPDATE` and its lock flag re-read
    /// inside the transaction, so a period closed after validation (or a
    /// concurrent close) rejects the whole batch.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The client does not exist
    /// - The client's period is locked
    /// - An entry date is not a calendar date
    /// - Database operation fails
    pub async fn append_batch(
        &self,
        request: &GlPostingRequest,
    ) -> Result<Vec<gl_entries::Model>, PostingError> {
        let dates = request
            .entries
            .iter()
            .map(|e| {
                NaiveDate::parse_from_str(&e.date, DATE_FORMAT)
                    .map_err(|_| PostingError::InvalidDate(e.date.clone()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let txn = self.db.begin().await?;

        let client = clients::Entity::find_by_id(request.client_id.as_str())
            .lock_exclusive()
            .one(&txn)
            .await?
            .ok_or_else(|| PostingError::ClientNotFound(request.client_id.clone()))?;

        if client.is_locked {
            txn.rollback().await?;
            return Err(PostingError::PeriodLocked {
                client_id: request.client_id.clone(),
                month: client.workflow_month.unwrap_or_else(|| request.period_month.clone()),
            });
        }

        let now = chrono::Utc::now().into();
        let mut inserted = Vec::with_capacity(request.entries.len());

        for (entry, date) in request.entries.iter().zip(dates) {
            let model = gl_entries::ActiveModel {
                id: Set(Uuid::now_v7()),
                client_id: Set(request.client_id.as_str().to_string()),
                date: Set(date),
                doc_no: Set(entry.doc_no.clone()),
                description: Set(entry.description.clone()),
                account_code: Set(entry.account_code.clone()),
                account_name: Set(entry.account_name.clone()),
                debit: Set(entry.debit),
                credit: Set(entry.credit),
                period: Set(entry.period.clone().or_else(|| Some(request.period_month.clone()))),
                department_code: Set(entry.department_code.clone()),
                source_doc_id: Set(request
                    .source_doc_id
                    .as_ref()
                    .map(|id| id.as_str().to_string())),
                created_by: Set(request.user_id.as_str().to_string()),
                created_at: Set(now),
            }
            .insert(&txn)
            .await?;

            inserted.push(model);
        }

        txn.commit().await?;

        info!(
            client_id = %request.client_id,
            period = %request.period_month,
            entries = inserted.len(),
            "Posted GL batch"
        );

        Ok(inserted)
    }
}

/// Converts a ledger row back into the entry shape the validators read.
#[must_use]
pub fn to_posted_entry(model: gl_entries::Model) -> PostedGlEntry {
    PostedGlEntry {
        date: model.date.format(DATE_FORMAT).to_string(),
        doc_no: model.doc_no,
        description: model.description,
        account_code: model.account_code,
        account_name: model.account_name,
        debit: model.debit,
        credit: model.credit,
        client_id: ClientId::new(model.client_id),
        period: model.period,
        department_code: model.department_code,
    }
}

#[async_trait]
impl LedgerReader for GlEntryRepository {
    async fn get_gl_entries_by_client(
        &self,
        client_id: &ClientId,
    ) -> Result<Vec<PostedGlEntry>, LookupError> {
        let models = self.find_by_client(client_id).await.map_err(lookup_error)?;
        Ok(models.into_iter().map(to_posted_entry).collect())
    }
}
