//! Withholding tax arithmetic.

use bunchi_shared::types::money::{
    TAX_TOLERANCE, exceeds_tolerance, format_satang, round_satang,
};
use rust_decimal::Decimal;

use crate::validation::{
    IssueCode, ValidationError, ValidationResult, ValidationWarning, check_amount,
};

/// Withholding rates (percent) in the Revenue Department's schedule.
pub const STANDARD_WHT_RATES: [Decimal; 6] = [
    Decimal::from_parts(1, 0, 0, false, 0),
    Decimal::from_parts(2, 0, 0, false, 0),
    Decimal::from_parts(3, 0, 0, false, 0),
    Decimal::from_parts(5, 0, 0, false, 0),
    Decimal::from_parts(10, 0, 0, false, 0),
    Decimal::from_parts(15, 0, 0, false, 0),
];

/// Expected withholding: `gross × rate / 100`, rounded to satang.
///
/// Returns `None` if the product overflows.
#[must_use]
pub fn expected_wht(gross_amount: Decimal, wht_rate: Decimal) -> Option<Decimal> {
    gross_amount
        .checked_mul(wht_rate)
        .and_then(|v| v.checked_div(Decimal::ONE_HUNDRED))
        .map(round_satang)
}

/// Checks a stated withholding amount against the gross and rate.
///
/// A gap above 1 baht is a `WHT_MISMATCH` error (reviewer-overridable,
/// not critical). A rate outside [`STANDARD_WHT_RATES`] is a warning.
/// Amounts that do not fit a ledger column stop the check.
#[must_use]
pub fn validate_wht_calculation(
    gross_amount: Decimal,
    wht_rate: Decimal,
    wht_amount: Decimal,
) -> ValidationResult {
    let mut result = ValidationResult::new();

    for (field, amount) in [("gross_amount", gross_amount), ("wht_amount", wht_amount)] {
        if let Some(err) = check_amount(amount, field) {
            result.push_error(err);
        }
    }
    if result.has_critical() {
        return result;
    }

    let Some(expected) = expected_wht(gross_amount, wht_rate) else {
        result.push_error(
            ValidationError::critical(
                IssueCode::AmountOutOfRange,
                format!("Withholding rate {wht_rate}% is out of range"),
                format!("อัตราภาษีหัก ณ ที่จ่าย {wht_rate}% เกินขอบเขตที่รองรับ"),
            )
            .with_field("wht_rate"),
        );
        return result;
    };

    if exceeds_tolerance(expected, wht_amount, TAX_TOLERANCE) {
        let expected = format_satang(expected);
        let got = format_satang(wht_amount);
        result.push_error(
            ValidationError::error(
                IssueCode::WhtMismatch,
                format!("Withholding tax should be {expected}, got {got}"),
                format!("ภาษีหัก ณ ที่จ่ายไม่ถูกต้อง ควรเป็น {expected} แต่ได้ {got}"),
            )
            .with_field("wht_amount"),
        );
    }

    if !STANDARD_WHT_RATES.contains(&wht_rate) {
        result.push_warning(
            ValidationWarning::new(
                IssueCode::WhtUnusualRate,
                format!("Withholding rate {wht_rate}% is not a standard rate"),
                format!("อัตราภาษีหัก ณ ที่จ่าย {wht_rate}% ไม่ใช่อัตราปกติ"),
            )
            .with_field("wht_rate"),
        );
    }

    result
}
