//! Thai baht amount helpers with decimal precision.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! Every amount in Bunchi is a `rust_decimal::Decimal`; these helpers
//! centralise the rounding and tolerance rules used by the validators.

use rust_decimal::{Decimal, RoundingStrategy};

/// Number of decimal places in a baht amount (1 baht = 100 satang).
pub const SATANG_DP: u32 = 2;

/// Maximum allowed gap between total debits and total credits.
pub const BALANCE_TOLERANCE: Decimal = Decimal::from_parts(1, 0, 0, false, 2);

/// Maximum allowed gap between a stated tax amount and the computed one.
pub const TAX_TOLERANCE: Decimal = Decimal::ONE;

/// Exclusive bound on an amount's magnitude: 10^16, the range of a
/// `NUMERIC(18,2)` ledger column.
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(1_874_919_424, 2_328_306, 0, false, 0);

/// True when `|value| < MAX_AMOUNT`.
#[must_use]
pub fn is_within_amount_range(value: Decimal) -> bool {
    value.abs() < MAX_AMOUNT
}

/// True when the amount has no digits below a satang once trailing zeros
/// are dropped, so `1.50` and `1.500` pass and `1.005` does not.
#[must_use]
pub fn has_satang_precision(value: Decimal) -> bool {
    value.normalize().scale() <= SATANG_DP
}

/// Rounds an amount to satang (2 dp), half away from zero.
///
/// Tax authorities round half-up on positive amounts, so banker's rounding
/// is not used here.
#[must_use]
pub fn round_satang(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(SATANG_DP, RoundingStrategy::MidpointAwayFromZero)
}

/// Rounds an amount to whole baht, half away from zero.
#[must_use]
pub fn round_baht(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

/// Returns true when `|a - b|` is strictly greater than `tolerance`.
///
/// A difference exactly equal to the tolerance is accepted. A difference
/// too large to represent always exceeds.
#[must_use]
pub fn exceeds_tolerance(a: Decimal, b: Decimal, tolerance: Decimal) -> bool {
    a.checked_sub(b).is_none_or(|diff| diff.abs() > tolerance)
}

/// Formats an amount with exactly two decimal places, e.g. `1.00`.
#[must_use]
pub fn format_satang(value: Decimal) -> String {
    format!("{:.2}", round_satang(value))
}

#[cfg(test)]
#[path = "money_tests.rs"]
mod tests;
