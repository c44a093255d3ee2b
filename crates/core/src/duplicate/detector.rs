//! Two-phase duplicate invoice matching.

use std::sync::Arc;

use bunchi_shared::types::{ClientId, DocumentId};
use rust_decimal::Decimal;
use tracing::debug;

use super::types::{DocumentRecord, DuplicateCheckResult, InvoiceCandidate};
use crate::lookup::{DocumentReader, LookupError};

/// Default window for fuzzy date matching.
pub const DEFAULT_WINDOW_DAYS: i64 = 7;

/// Amounts closer than this are treated as equal.
const AMOUNT_TOLERANCE: Decimal = Decimal::from_parts(1, 0, 0, false, 2);

fn is_excluded(doc: &DocumentRecord, candidate: &InvoiceCandidate) -> bool {
    candidate.exclude_document_id.as_ref() == Some(&doc.id)
}

/// Phase one: first document with the same invoice number and counterparty.
///
/// Both fields must be present on both sides; tax IDs are compared with
/// formatting stripped and invoice numbers after trimming.
#[must_use]
pub fn find_exact_match<'a>(
    documents: &'a [DocumentRecord],
    candidate: &InvoiceCandidate,
) -> Option<&'a DocumentId> {
    let inv_number = candidate.normalized_inv_number()?;
    let tax_id = candidate.normalized_tax_id()?;

    documents
        .iter()
        .filter(|doc| !is_excluded(doc, candidate))
        .find(|doc| {
            doc.inv_number() == Some(inv_number)
                && doc.counterparty_tax_id().as_deref() == Some(tax_id.as_str())
        })
        .map(|doc| &doc.id)
}

/// Phase two: every document with the same counterparty, an amount less
/// than 0.01 away and an invoice date within `window_days`.
///
/// A missing date on either side does not rule a document out. Amounts
/// too far apart to subtract never match.
#[must_use]
pub fn find_fuzzy_matches(
    documents: &[DocumentRecord],
    candidate: &InvoiceCandidate,
    window_days: i64,
) -> Vec<DocumentId> {
    let Some(tax_id) = candidate.normalized_tax_id() else {
        return Vec::new();
    };

    documents
        .iter()
        .filter(|doc| !is_excluded(doc, candidate))
        .filter(|doc| doc.counterparty_tax_id().as_deref() == Some(tax_id.as_str()))
        .filter(|doc| {
            doc.grand_total()
                .and_then(|total| total.checked_sub(candidate.amount))
                .is_some_and(|diff| diff.abs() < AMOUNT_TOLERANCE)
        })
        .filter(|doc| match (candidate.date, doc.inv_date()) {
            (Some(new), Some(existing)) => (new - existing).num_days().abs() <= window_days,
            _ => true,
        })
        .map(|doc| doc.id.clone())
        .collect()
}

/// Runs both phases over an in-memory document set.
///
/// An exact match is reported alone; fuzzy matches are only collected
/// when the exact scan found nothing.
#[must_use]
pub fn check_duplicate(
    documents: &[DocumentRecord],
    candidate: &InvoiceCandidate,
    window_days: i64,
) -> DuplicateCheckResult {
    if let Some(id) = find_exact_match(documents, candidate) {
        return DuplicateCheckResult::exact(id.clone());
    }
    DuplicateCheckResult::fuzzy(find_fuzzy_matches(documents, candidate, window_days))
}

/// Checks new invoices against a client's stored documents.
#[derive(Clone)]
pub struct DuplicateDetector {
    documents: Arc<dyn DocumentReader>,
    window_days: i64,
}

impl DuplicateDetector {
    /// Creates a detector with the default 7-day window.
    pub fn new(documents: Arc<dyn DocumentReader>) -> Self {
        Self {
            documents,
            window_days: DEFAULT_WINDOW_DAYS,
        }
    }

    /// Overrides the fuzzy date window.
    #[must_use]
    pub fn with_window_days(mut self, window_days: i64) -> Self {
        self.window_days = window_days;
        self
    }

    /// Fuzzy date window in days.
    #[must_use]
    pub fn window_days(&self) -> i64 {
        self.window_days
    }

    /// Fetches the client's documents and runs [`check_duplicate`].
    ///
    /// # Errors
    ///
    /// Returns the lookup error if the document set cannot be read.
    pub async fn check_duplicate_invoice(
        &self,
        client_id: &ClientId,
        candidate: &InvoiceCandidate,
    ) -> Result<DuplicateCheckResult, LookupError> {
        let documents = self.documents.get_documents_by_client(client_id).await?;
        let result = check_duplicate(&documents, candidate, self.window_days);

        debug!(
            client_id = %client_id,
            scanned = documents.len(),
            is_duplicate = result.is_duplicate,
            match_type = ?result.match_type,
            "Duplicate check complete"
        );

        Ok(result)
    }
}
