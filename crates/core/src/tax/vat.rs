//! Value added tax arithmetic.

use bunchi_shared::types::money::{TAX_TOLERANCE, exceeds_tolerance, format_satang, round_baht};
use rust_decimal::Decimal;

use crate::validation::{
    IssueCode, ValidationError, ValidationResult, ValidationWarning, check_amount,
};

/// Accepted VAT rates (percent): zero-rated and the Thai standard 7%.
pub const STANDARD_VAT_RATES: [Decimal; 2] = [
    Decimal::ZERO,
    Decimal::from_parts(7, 0, 0, false, 0),
];

/// Expected VAT: `subtotal × rate / 100`, rounded to whole baht.
///
/// Returns `None` if the product overflows.
#[must_use]
pub fn expected_vat(subtotal: Decimal, vat_rate: Decimal) -> Option<Decimal> {
    subtotal
        .checked_mul(vat_rate)
        .and_then(|v| v.checked_div(Decimal::ONE_HUNDRED))
        .map(round_baht)
}

/// Expected grand total: subtotal plus [`expected_vat`].
#[must_use]
pub fn expected_total(subtotal: Decimal, vat_rate: Decimal) -> Option<Decimal> {
    expected_vat(subtotal, vat_rate).and_then(|vat| subtotal.checked_add(vat))
}

/// Checks stated VAT and grand total against the subtotal and rate.
///
/// The VAT check and the total check are independent; both may fire.
/// Gaps above 1 baht are errors, a rate other than 0% or 7% is a warning.
/// Amounts that do not fit a ledger column stop the check.
#[must_use]
pub fn validate_vat_calculation(
    subtotal: Decimal,
    vat_rate: Decimal,
    vat_amount: Decimal,
    grand_total: Decimal,
) -> ValidationResult {
    let mut result = ValidationResult::new();

    for (field, amount) in [
        ("subtotal", subtotal),
        ("vat_amount", vat_amount),
        ("grand_total", grand_total),
    ] {
        if let Some(err) = check_amount(amount, field) {
            result.push_error(err);
        }
    }
    if result.has_critical() {
        return result;
    }

    let (Some(vat), Some(total)) = (
        expected_vat(subtotal, vat_rate),
        expected_total(subtotal, vat_rate),
    ) else {
        result.push_error(rate_out_of_range(vat_rate));
        return result;
    };

    if exceeds_tolerance(vat, vat_amount, TAX_TOLERANCE) {
        let expected = format_satang(vat);
        let got = format_satang(vat_amount);
        result.push_error(
            ValidationError::error(
                IssueCode::VatMismatch,
                format!("VAT should be {expected}, got {got}"),
                format!("ภาษีมูลค่าเพิ่มไม่ถูกต้อง ควรเป็น {expected} แต่ได้ {got}"),
            )
            .with_field("vat_amount"),
        );
    }

    if exceeds_tolerance(total, grand_total, TAX_TOLERANCE) {
        let expected = format_satang(total);
        let got = format_satang(grand_total);
        result.push_error(
            ValidationError::error(
                IssueCode::TotalMismatch,
                format!("Grand total should be {expected}, got {got}"),
                format!("ยอดรวมไม่ถูกต้อง ควรเป็น {expected} แต่ได้ {got}"),
            )
            .with_field("grand_total"),
        );
    }

    if !STANDARD_VAT_RATES.contains(&vat_rate) {
        result.push_warning(
            ValidationWarning::new(
                IssueCode::VatUnusualRate,
                format!("VAT rate {vat_rate}% is not the standard rate"),
                format!("อัตราภาษีมูลค่าเพิ่ม {vat_rate}% ไม่ใช่อัตรามาตรฐาน"),
            )
            .with_field("vat_rate"),
        );
    }

    result
}

fn rate_out_of_range(vat_rate: Decimal) -> ValidationError {
    ValidationError::critical(
        IssueCode::AmountOutOfRange,
        format!("VAT rate {vat_rate}% is out of range"),
        format!("อัตราภาษีมูลค่าเพิ่ม {vat_rate}% เกินขอบเขตที่รองรับ"),
    )
    .with_field("vat_rate")
}
