//! Thai 13-digit taxpayer identification number.

use crate::validation::{IssueCode, ValidationError, ValidationResult};

/// Number of digits in a Thai tax ID.
pub const TAX_ID_LEN: usize = 13;

fn digits(tax_id: &str) -> Vec<u32> {
    tax_id.chars().filter_map(|c| c.to_digit(10)).collect()
}

/// Computes the check digit for the first 12 digits.
///
/// `sum = Σ d[i] × (13 − i)` for `i` in `0..12`;
/// `check = (11 − sum mod 11) mod 10`.
///
/// Returns `None` if fewer than 12 digits are given or any is above 9.
#[must_use]
pub fn tax_id_check_digit(first_twelve: &[u32]) -> Option<u32> {
    if first_twelve.len() < 12 || first_twelve.iter().take(12).any(|d| *d > 9) {
        return None;
    }
    let sum: u32 = first_twelve
        .iter()
        .take(12)
        .zip((2..=13u32).rev())
        .map(|(d, w)| d * w)
        .sum();
    Some((11 - sum % 11) % 10)
}

/// True if `tax_id` (any formatting; non-digits are stripped) is a
/// checksum-valid 13-digit Thai tax ID.
#[must_use]
pub fn is_valid_thai_tax_id(tax_id: &str) -> bool {
    let d = digits(tax_id);
    d.len() == TAX_ID_LEN && tax_id_check_digit(&d[..12]) == Some(d[12])
}

/// Validates a tax ID, reporting length and checksum failures separately.
#[must_use]
pub fn validate_tax_id(tax_id: &str) -> ValidationResult {
    let d = digits(tax_id);

    if d.len() != TAX_ID_LEN {
        return ValidationResult::from_error(
            ValidationError::error(
                IssueCode::TaxIdInvalidLength,
                format!("Tax ID must have 13 digits, got {}", d.len()),
                "เลขประจำตัวผู้เสียภาษีต้องมี 13 หลัก",
            )
            .with_field("tax_id"),
        );
    }

    if tax_id_check_digit(&d[..12]) != Some(d[12]) {
        return ValidationResult::from_error(
            ValidationError::error(
                IssueCode::TaxIdInvalidChecksum,
                "Tax ID check digit does not match",
                "เลขประจำตัวผู้เสียภาษีไม่ถูกต้อง",
            )
            .with_field("tax_id"),
        );
    }

    ValidationResult::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_valid_vector() {
        assert!(is_valid_thai_tax_id("0105562027123"));
        assert!(validate_tax_id("0105562027123").is_valid());
    }

    #[test]
    fn test_formatting_is_ignored() {
        assert!(is_valid_thai_tax_id("0-1055-62027-12-3"));
        assert!(is_valid_thai_tax_id(" 0105562027123 "));
    }

    #[test]
    fn test_wrong_check_digit() {
        assert!(!is_valid_thai_tax_id("0105562027124"));
        assert_eq!(
            validate_tax_id("0105562027124").error_codes(),
            vec![IssueCode::TaxIdInvalidChecksum]
        );
    }

    #[test]
    fn test_wrong_length() {
        assert!(!is_valid_thai_tax_id("010556202712"));
        assert!(!is_valid_thai_tax_id(""));
        assert_eq!(
            validate_tax_id("01055620271234").error_codes(),
            vec![IssueCode::TaxIdInvalidLength]
        );
    }

    #[test]
    fn test_check_digit_computation() {
        let d = digits("010556202712");
        assert_eq!(tax_id_check_digit(&d), Some(3));
        assert_eq!(tax_id_check_digit(&d[..11]), None);
        assert_eq!(tax_id_check_digit(&[u32::MAX; 12]), None);
    }
}
