//! GL posting validation engine.
//!
//! The engine is the gatekeeper before any ledger mutation. It is stateless
//! between calls: the chart of accounts and the two read-only collaborators
//! are injected once and shared.

use std::sync::Arc;

use bunchi_shared::types::money::format_satang;
use bunchi_shared::types::{ClientId, DocumentId};
use rust_decimal::Decimal;
use tracing::{debug, warn};

use super::types::{GlPostingRequest, PostedGlEntry, PostingTotals};
use crate::accounts::ChartOfAccounts;
use crate::lookup::{ClientDirectory, LedgerReader};
use crate::validation::{
    IssueCode, ValidationError, ValidationResult, ValidationWarning, check_amount,
};

/// Validates posting requests against balance, account and period-lock rules.
pub struct GlValidationEngine {
    chart: Arc<ChartOfAccounts>,
    clients: Arc<dyn ClientDirectory>,
    ledger: Arc<dyn LedgerReader>,
    strict_period_lock: bool,
}

impl GlValidationEngine {
    /// Creates an engine over the given chart and collaborators.
    #[must_use]
    pub fn new(
        chart: Arc<ChartOfAccounts>,
        clients: Arc<dyn ClientDirectory>,
        ledger: Arc<dyn LedgerReader>,
    ) -> Self {
        Self {
            chart,
            clients,
            ledger,
            strict_period_lock: false,
        }
    }

    /// When `strict` is set, a failed period-lock lookup blocks posting.
    #[must_use]
    pub fn with_strict_period_lock(mut self, strict: bool) -> Self {
        self.strict_period_lock = strict;
        self
    }

    /// The chart this engine validates against.
    #[must_use]
    pub fn chart(&self) -> &ChartOfAccounts {
        &self.chart
    }

    /// Validate a posting request before it is committed.
    ///
    /// Steps, accumulating every finding:
    /// 1. Empty batch → `GL_EMPTY` (critical) and stop
    /// 2. Balance within 0.01 → else `GL_OUT_OF_BALANCE` (critical)
    /// 3. Per-entry account, amount (sign, range, precision), date and
    ///    client checks
    /// 4. Period lock via the client directory
    /// 5. Existing entries for `source_doc_id` → `POSSIBLE_DUPLICATE` warning
    ///
    /// Steps 4 and 5 are independent reads and run concurrently.
    pub async fn validate_gl_posting(&self, request: &GlPostingRequest) -> ValidationResult {
        if request.entries.is_empty() {
            return ValidationResult::from_error(ValidationError::critical(
                IssueCode::GlEmpty,
                "Posting request has no entries",
                "ไม่มีรายการบัญชีที่จะบันทึก",
            ));
        }

        let mut result = self.validate_entries(request);

        let (lock, duplicate) = tokio::join!(
            self.check_period_lock(&request.client_id, &request.period_month),
            async {
                match &request.source_doc_id {
                    Some(doc_id) => self.check_source_document(&request.client_id, doc_id).await,
                    None => ValidationResult::new(),
                }
            }
        );
        result.merge(lock);
        result.merge(duplicate);

        debug!(
            client_id = %request.client_id,
            period = %request.period_month,
            entries = request.entries.len(),
            errors = result.errors().len(),
            warnings = result.warnings().len(),
            "validated GL posting"
        );
        result
    }

    /// Balance and per-entry checks (steps 2 and 3). Performs no I/O.
    #[must_use]
    pub fn validate_entries(&self, request: &GlPostingRequest) -> ValidationResult {
        let mut result = ValidationResult::new();

        let totals = PostingTotals::of_entries(&request.entries);
        if !totals.is_balanced() {
            let debit = format_satang(totals.total_debit);
            let credit = format_satang(totals.total_credit);
            let diff = format_satang(totals.difference());
            result.push_error(ValidationError::critical(
                IssueCode::GlOutOfBalance,
                format!("Debits ({debit}) do not equal credits ({credit}); difference {diff}"),
                format!("ยอดเดบิต ({debit}) ไม่เท่ากับยอดเครดิต ({credit}) ผลต่าง {diff}"),
            ));
        }

        for (i, entry) in request.entries.iter().enumerate() {
            self.check_entry(i, entry, &request.client_id, &mut result);
        }

        result
    }

    fn check_entry(
        &self,
        i: usize,
        entry: &PostedGlEntry,
        client_id: &ClientId,
        result: &mut ValidationResult,
    ) {
        let path = |field: &str| format!("entries[{i}].{field}");
        let n = i + 1;

        match self.chart.get(&entry.account_code) {
            None => result.push_error(
                ValidationError::error(
                    IssueCode::GlInvalidAccount,
                    format!(
                        "Entry {n}: account {} is not in the chart of accounts",
                        entry.account_code
                    ),
                    format!("รายการที่ {n}: ไม่พบรหัสบัญชี {} ในผังบัญชี", entry.account_code),
                )
                .with_field(path("account_code")),
            ),
            Some(account) if !account.is_active => result.push_warning(
                ValidationWarning::new(
                    IssueCode::GlInactiveAccount,
                    format!("Entry {n}: account {} ({}) is inactive", account.code, account.name),
                    format!("รายการที่ {n}: บัญชี {} ({}) ถูกปิดการใช้งาน", account.code, account.name_th),
                )
                .with_field(path("account_code")),
            ),
            Some(_) => {}
        }

        if entry.debit < Decimal::ZERO || entry.credit < Decimal::ZERO {
            result.push_error(
                ValidationError::error(
                    IssueCode::GlNegativeAmount,
                    format!("Entry {n}: debit and credit cannot be negative"),
                    format!("รายการที่ {n}: จำนวนเงินติดลบไม่ได้"),
                )
                .with_field(path(if entry.debit < Decimal::ZERO { "debit" } else { "credit" })),
            );
        }

        for (field, amount) in [("debit", entry.debit), ("credit", entry.credit)] {
            if let Some(err) = check_amount(amount, &path(field)) {
                result.push_error(err);
            }
        }

        if entry.debit > Decimal::ZERO && entry.credit > Decimal::ZERO {
            result.push_error(
                ValidationError::error(
                    IssueCode::GlBothSides,
                    format!("Entry {n}: cannot have both a debit and a credit"),
                    format!("รายการที่ {n}: ต้องมีเดบิตหรือเครดิตอย่างใดอย่างหนึ่งเท่านั้น"),
                )
                .with_field(path("debit")),
            );
        }

        if entry.debit.is_zero() && entry.credit.is_zero() {
            result.push_error(
                ValidationError::error(
                    IssueCode::GlZeroAmount,
                    format!("Entry {n}: needs a debit or credit amount"),
                    format!("รายการที่ {n}: ต้องระบุจำนวนเงินเดบิตหรือเครดิต"),
                )
                .with_field(path("debit")),
            );
        }

        if !is_iso_date_shape(&entry.date) {
            result.push_error(
                ValidationError::error(
                    IssueCode::GlInvalidDate,
                    format!("Entry {n}: date '{}' must be YYYY-MM-DD", entry.date),
                    format!("รายการที่ {n}: รูปแบบวันที่ '{}' ไม่ถูกต้อง (ต้องเป็น YYYY-MM-DD)", entry.date),
                )
                .with_field(path("date")),
            );
        }

        if &entry.client_id != client_id {
            result.push_error(
                ValidationError::error(
                    IssueCode::GlClientMismatch,
                    format!(
                        "Entry {n}: belongs to client {} but request is for {client_id}",
                        entry.client_id
                    ),
                    format!("รายการที่ {n}: ลูกค้าไม่ตรงกับคำขอบันทึกบัญชี"),
                )
                .with_field(path("clientId")),
            );
        }
    }

    async fn check_period_lock(
        &self,
        client_id: &ClientId,
        period_month: &str,
    ) -> ValidationResult {
        let mut result = ValidationResult::new();

        match self.clients.get_client_by_id(client_id).await {
            Ok(Some(client)) if client.is_locked() => {
                let name = client.display_name();
                let month = client
                    .current_workflow
                    .as_ref()
                    .map(|w| w.month.as_str())
                    .filter(|m| !m.is_empty())
                    .unwrap_or(period_month);
                result.push_error(ValidationError::critical(
                    IssueCode::PeriodLocked,
                    format!("Accounting period {month} for client {name} is locked"),
                    format!("งวดบัญชี {month} ของลูกค้า {name} ถูกล็อกแล้ว"),
                ));
            }
            Ok(_) => {}
            Err(err) => {
                warn!(client_id = %client_id, error = %err, "period-lock lookup failed");
                let message = "Could not verify the client's period-lock status";
                let message_th = "ไม่สามารถตรวจสอบสถานะการล็อกงวดบัญชีของลูกค้าได้";
                if self.strict_period_lock {
                    result.push_error(ValidationError::critical(
                        IssueCode::ClientCheckFailed,
                        message,
                        message_th,
                    ));
                } else {
                    result.push_warning(ValidationWarning::new(
                        IssueCode::ClientCheckFailed,
                        message,
                        message_th,
                    ));
                }
            }
        }

        result
    }

    async fn check_source_document(
        &self,
        client_id: &ClientId,
        doc_id: &DocumentId,
    ) -> ValidationResult {
        let mut result = ValidationResult::new();

        match self.ledger.get_gl_entries_by_client(client_id).await {
            Ok(existing) => {
                if existing.iter().any(|e| e.doc_no == doc_id.as_str()) {
                    result.push_warning(ValidationWarning::new(
                        IssueCode::PossibleDuplicate,
                        format!("GL entries already exist for document {doc_id}"),
                        format!("อาจเป็นรายการซ้ำ เอกสาร {doc_id} ถูกบันทึกบัญชีแล้ว"),
                    ));
                }
            }
            Err(err) => {
                warn!(
                    client_id = %client_id,
                    error = %err,
                    "existing-entries lookup failed, skipping duplicate check"
                );
            }
        }

        result
    }
}

/// True if `s` has the shape `DDDD-DD-DD` (ASCII digits).
fn is_iso_date_shape(s: &str) -> bool {
    let bytes = s.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}
