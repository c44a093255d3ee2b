//! Ledger domain types for journal lines and posting requests.
//!
//! These are the strongly typed shapes that reach the validators. Untrusted
//! input (AI extraction, form posts) is converted into them by
//! [`super::parse`].

use bunchi_shared::types::money::{BALANCE_TOLERANCE, exceeds_tolerance};
use bunchi_shared::types::{ClientId, DocumentId, UserId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Side of a journal line.
///
/// In double-entry bookkeeping:
/// - Debits increase asset/expense accounts, decrease liability/equity/revenue accounts
/// - Credits decrease asset/expense accounts, increase liability/equity/revenue accounts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum EntrySide {
    /// Debit line.
    Debit,
    /// Credit line.
    Credit,
}

/// A pre-posting journal line, as proposed by AI extraction or typed by a
/// bookkeeper.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalLine {
    /// Five-digit account code.
    pub account_code: String,
    /// Debit or credit.
    pub account_side: EntrySide,
    /// Line amount; must be positive.
    pub amount: Decimal,
}

impl JournalLine {
    /// Creates a journal line.
    #[must_use]
    pub fn new(account_code: impl Into<String>, account_side: EntrySide, amount: Decimal) -> Self {
        Self {
            account_code: account_code.into(),
            account_side,
            amount,
        }
    }
}

/// One leg of a balanced entry, ready for storage.
///
/// Exactly one of `debit` / `credit` is expected to be non-zero; the
/// validator reports entries that break this rather than the type
/// forbidding it, so every offending line can be listed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostedGlEntry {
    /// Posting date, `YYYY-MM-DD`.
    pub date: String,
    /// Source document number.
    pub doc_no: String,
    /// Narrative.
    #[serde(default)]
    pub description: String,
    /// Five-digit account code.
    pub account_code: String,
    /// Account name as shown on the source document.
    #[serde(default)]
    pub account_name: String,
    /// Debit amount (zero if credit).
    #[serde(default)]
    pub debit: Decimal,
    /// Credit amount (zero if debit).
    #[serde(default)]
    pub credit: Decimal,
    /// Owning client.
    #[serde(rename = "clientId")]
    pub client_id: ClientId,
    /// Accounting period, `YYYY-MM`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub period: Option<String>,
    /// Optional department/cost-centre code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department_code: Option<String>,
}

impl PostedGlEntry {
    /// The side carrying the amount, `None` if neither or both are set.
    #[must_use]
    pub fn side(&self) -> Option<EntrySide> {
        match (self.debit > Decimal::ZERO, self.credit > Decimal::ZERO) {
            (true, false) => Some(EntrySide::Debit),
            (false, true) => Some(EntrySide::Credit),
            _ => None,
        }
    }
}

/// A batch of entries to commit for one client and period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GlPostingRequest {
    /// Entries to post.
    pub entries: Vec<PostedGlEntry>,
    /// Client the batch belongs to.
    pub client_id: ClientId,
    /// Accounting period, `YYYY-MM`.
    pub period_month: String,
    /// Source document the batch was derived from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_doc_id: Option<DocumentId>,
    /// Submitting user.
    pub user_id: UserId,
}

/// Debit and credit sums of a batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PostingTotals {
    /// Sum of debits.
    pub total_debit: Decimal,
    /// Sum of credits.
    pub total_credit: Decimal,
}

impl PostingTotals {
    /// Creates totals from debit and credit sums.
    #[must_use]
    pub fn new(total_debit: Decimal, total_credit: Decimal) -> Self {
        Self {
            total_debit,
            total_credit,
        }
    }

    /// Sums posted entries.
    ///
    /// Sums saturate at the `Decimal` bounds; callers reject out-of-range
    /// amounts per entry.
    #[must_use]
    pub fn of_entries(entries: &[PostedGlEntry]) -> Self {
        entries.iter().fold(Self::new(Decimal::ZERO, Decimal::ZERO), |totals, e| {
            Self::new(
                totals.total_debit.saturating_add(e.debit),
                totals.total_credit.saturating_add(e.credit),
            )
        })
    }

    /// Sums journal lines by side, saturating like [`Self::of_entries`].
    #[must_use]
    pub fn of_lines(lines: &[JournalLine]) -> Self {
        let mut totals = Self::new(Decimal::ZERO, Decimal::ZERO);
        for line in lines {
            match line.account_side {
                EntrySide::Debit => {
                    totals.total_debit = totals.total_debit.saturating_add(line.amount);
                }
                EntrySide::Credit => {
                    totals.total_credit = totals.total_credit.saturating_add(line.amount);
                }
            }
        }
        totals
    }

    /// Absolute gap between debits and credits.
    #[must_use]
    pub fn difference(&self) -> Decimal {
        self.total_debit.saturating_sub(self.total_credit).abs()
    }

    /// True when the gap is within the 0.01 balance tolerance.
    #[must_use]
    pub fn is_balanced(&self) -> bool {
        !exceeds_tolerance(self.total_debit, self.total_credit, BALANCE_TOLERANCE)
    }
}
