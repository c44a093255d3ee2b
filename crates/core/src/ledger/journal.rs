//! Structural validation of journal lines before they become a posting
//! request.

use bunchi_shared::types::money::format_satang;
use rust_decimal::Decimal;
use tracing::debug;

use super::types::{JournalLine, PostingTotals};
use crate::validation::{IssueCode, ValidationError, ValidationResult, check_amount};

/// Required length of an account code.
pub const ACCOUNT_CODE_LEN: usize = 5;

/// Validates raw journal lines.
///
/// Rules:
/// 1. At least 2 lines, otherwise `JL_MINIMUM_LINES` (critical) and stop
/// 2. Debit total equals credit total within 0.01, else `JL_OUT_OF_BALANCE` (critical)
/// 3. Each code is exactly 5 characters, else `JL_INVALID_CODE`
/// 4. Each amount is strictly positive, else `JL_INVALID_AMOUNT`
/// 5. Each amount fits a ledger column, else `AMOUNT_OUT_OF_RANGE` or
///    `AMOUNT_TOO_PRECISE`
#[must_use]
pub fn validate_journal_lines(lines: &[JournalLine]) -> ValidationResult {
    if lines.len() < 2 {
        return ValidationResult::from_error(ValidationError::critical(
            IssueCode::JlMinimumLines,
            format!("A journal entry needs at least 2 lines, got {}", lines.len()),
            "รายการบัญชีต้องมีอย่างน้อย 2 บรรทัด",
        ));
    }

    let mut result = ValidationResult::new();

    let totals = PostingTotals::of_lines(lines);
    if !totals.is_balanced() {
        let debit = format_satang(totals.total_debit);
        let credit = format_satang(totals.total_credit);
        let diff = format_satang(totals.difference());
        result.push_error(ValidationError::critical(
            IssueCode::JlOutOfBalance,
            format!("Debits ({debit}) do not equal credits ({credit}); difference {diff}"),
            format!("ยอดเดบิต ({debit}) ไม่เท่ากับยอดเครดิต ({credit}) ผลต่าง {diff}"),
        ));
    }

    for (i, line) in lines.iter().enumerate() {
        if line.account_code.chars().count() != ACCOUNT_CODE_LEN {
            result.push_error(
                ValidationError::error(
                    IssueCode::JlInvalidCode,
                    format!(
                        "Line {}: account code '{}' must be 5 digits",
                        i + 1,
                        line.account_code
                    ),
                    format!("บรรทัด {}: รหัสบัญชี '{}' ต้องมี 5 หลัก", i + 1, line.account_code),
                )
                .with_field(format!("lines[{i}].account_code")),
            );
        }

        if line.amount <= Decimal::ZERO {
            result.push_error(
                ValidationError::error(
                    IssueCode::JlInvalidAmount,
                    format!(
                        "Line {}: amount must be greater than zero, got {}",
                        i + 1,
                        line.amount
                    ),
                    format!("บรรทัด {}: จำนวนเงินต้องมากกว่า 0", i + 1),
                )
                .with_field(format!("lines[{i}].amount")),
            );
        }

        if let Some(err) = check_amount(line.amount, &format!("lines[{i}].amount")) {
            result.push_error(err);
        }
    }

    debug!(
        lines = lines.len(),
        errors = result.errors().len(),
        "validated journal lines"
    );
    result
}
