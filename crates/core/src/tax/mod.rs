//! Thai tax arithmetic and identifier checks.
//!
//! All validators here are pure and stateless.

pub mod tax_id;
pub mod vat;
pub mod wht;

#[cfg(test)]
mod props;

pub use tax_id::{is_valid_thai_tax_id, tax_id_check_digit, validate_tax_id};
pub use vat::{STANDARD_VAT_RATES, expected_total, expected_vat, validate_vat_calculation};
pub use wht::{STANDARD_WHT_RATES, expected_wht, validate_wht_calculation};
