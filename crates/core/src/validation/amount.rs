//! Range and precision checks for amounts that did not come through the
//! parse boundary.

use bunchi_shared::types::money::{has_satang_precision, is_within_amount_range};
use rust_decimal::Decimal;

use super::codes::IssueCode;
use super::result::ValidationError;

/// Checks that `value` fits a ledger column.
///
/// Out of range is critical since no arithmetic on it can be trusted;
/// sub-satang precision is a plain error.
#[must_use]
pub fn check_amount(value: Decimal, field: &str) -> Option<ValidationError> {
    if !is_within_amount_range(value) {
        return Some(
            ValidationError::critical(
                IssueCode::AmountOutOfRange,
                format!("{field}: amount {value} is out of range"),
                format!("{field}: จำนวนเงิน {value} เกินขอบเขตที่รองรับ"),
            )
            .with_field(field),
        );
    }
    if !has_satang_precision(value) {
        return Some(
            ValidationError::error(
                IssueCode::AmountTooPrecise,
                format!("{field}: amount {value} has more than 2 decimal places"),
                format!("{field}: จำนวนเงิน {value} มีทศนิยมเกิน 2 ตำแหน่ง"),
            )
            .with_field(field),
        );
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::Severity;
    use rust_decimal_macros::dec;

    #[test]
    fn test_amount_in_range() {
        assert!(check_amount(dec!(9999999999999999.99), "debit").is_none());
        assert!(check_amount(dec!(-0.01), "debit").is_none());
    }

    #[test]
    fn test_amount_out_of_range() {
        let err = check_amount(Decimal::MAX, "entries[0].debit").unwrap();
        assert_eq!(err.code, IssueCode::AmountOutOfRange);
        assert_eq!(err.severity, Severity::Critical);
        assert_eq!(err.field.as_deref(), Some("entries[0].debit"));
    }

    #[test]
    fn test_amount_too_precise() {
        let err = check_amount(dec!(100.005), "subtotal").unwrap();
        assert_eq!(err.code, IssueCode::AmountTooPrecise);
        assert_eq!(err.severity, Severity::Error);
    }
}
