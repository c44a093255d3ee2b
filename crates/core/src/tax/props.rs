//! Property-based tests for tax validators.
//!
//! - Checksum law: appending the computed check digit always yields a
//!   valid tax ID, and any other final digit never does
//! - Tolerance law: stated amounts within 1 baht of the expected value
//!   pass, anything further is flagged

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::tax_id::{is_valid_thai_tax_id, tax_id_check_digit};
use super::vat::{expected_vat, validate_vat_calculation};
use super::wht::{STANDARD_WHT_RATES, expected_wht, validate_wht_calculation};
use crate::validation::IssueCode;

/// Strategy to generate the first 12 digits of a tax ID.
fn twelve_digits() -> impl Strategy<Value = Vec<u32>> {
    prop::collection::vec(0u32..10, 12)
}

/// Strategy to generate gross amounts from 0.01 to 10,000,000.00.
fn gross_amount() -> impl Strategy<Value = Decimal> {
    (1i64..1_000_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy to pick a scheduled withholding rate.
fn wht_rate() -> impl Strategy<Value = Decimal> {
    prop::sample::select(STANDARD_WHT_RATES.to_vec())
}

fn render(digits: &[u32]) -> String {
    digits.iter().map(u32::to_string).collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// *For any* 12 digits, the computed check digit completes a valid ID.
    #[test]
    fn prop_computed_check_digit_validates(digits in twelve_digits()) {
        let check = tax_id_check_digit(&digits).unwrap_or(10);
        let mut full = digits.clone();
        full.push(check);
        let id = render(&full);

        prop_assert!(is_valid_thai_tax_id(&id));
        // recomputation is stable
        prop_assert_eq!(tax_id_check_digit(&digits), Some(check));
    }

    /// *For any* 12 digits, every other final digit is rejected.
    #[test]
    fn prop_other_check_digits_rejected(digits in twelve_digits(), wrong in 0u32..10) {
        let check = tax_id_check_digit(&digits).unwrap_or(10);
        prop_assume!(wrong != check);
        let mut full = digits;
        full.push(wrong);
        prop_assert!(!is_valid_thai_tax_id(&render(&full)));
    }

    /// *For any* gross and standard rate, stating the expected amount is valid
    /// with no warnings, and an offset of 1.01 is flagged.
    #[test]
    fn prop_wht_tolerance(gross in gross_amount(), rate in wht_rate()) {
        let expected = expected_wht(gross, rate).unwrap();

        let exact = validate_wht_calculation(gross, rate, expected);
        prop_assert!(exact.is_valid());
        prop_assert!(exact.warnings().is_empty());

        let edge = validate_wht_calculation(gross, rate, expected + Decimal::ONE);
        prop_assert!(edge.is_valid());

        let over = validate_wht_calculation(gross, rate, expected + Decimal::new(101, 2));
        prop_assert!(over.has_error(IssueCode::WhtMismatch));
    }

    /// *For any* subtotal at 7%, consistent VAT and total are valid.
    #[test]
    fn prop_vat_consistent_amounts_valid(subtotal in gross_amount()) {
        let rate = Decimal::from(7);
        let vat = expected_vat(subtotal, rate).unwrap();
        let result = validate_vat_calculation(subtotal, rate, vat, subtotal + vat);
        prop_assert!(result.is_valid());
        prop_assert!(result.warnings().is_empty());
    }
}
