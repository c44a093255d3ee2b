//! Property-based tests for journal-line validation rules.

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::journal::validate_journal_lines;
use super::types::{EntrySide, JournalLine};
use crate::validation::IssueCode;

/// Strategy to generate a valid positive amount (> 0).
fn positive_amount() -> impl Strategy<Value = Decimal> {
    // Generate amounts from 0.01 to 1,000,000.00
    (1i64..100_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy to generate a zero or negative amount.
fn non_positive_amount() -> impl Strategy<Value = Decimal> {
    (0i64..100_000_000i64).prop_map(|cents| Decimal::new(-cents, 2))
}

/// Strategy to generate an entry side.
fn side_strategy() -> impl Strategy<Value = EntrySide> {
    prop_oneof![Just(EntrySide::Debit), Just(EntrySide::Credit)]
}

fn opposite(side: EntrySide) -> EntrySide {
    match side {
        EntrySide::Debit => EntrySide::Credit,
        EntrySide::Credit => EntrySide::Debit,
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// *For any* single line, validation stops with JL_MINIMUM_LINES only.
    #[test]
    fn prop_single_line_rejected(side in side_strategy(), amount in positive_amount()) {
        let result = validate_journal_lines(&[JournalLine::new("11200", side, amount)]);
        prop_assert_eq!(result.error_codes(), vec![IssueCode::JlMinimumLines]);
    }

    /// *For any* non-positive amount, JL_INVALID_AMOUNT is reported.
    #[test]
    fn prop_non_positive_amount_rejected(
        side in side_strategy(),
        bad in non_positive_amount(),
        other in positive_amount(),
    ) {
        let result = validate_journal_lines(&[
            JournalLine::new("52100", side, bad),
            JournalLine::new("11200", opposite(side), other),
        ]);
        prop_assert!(result.has_error(IssueCode::JlInvalidAmount));
    }

    /// *For any* split of a total into two debits against one credit, the
    /// lines are valid.
    #[test]
    fn prop_split_balanced_accepted(a in positive_amount(), b in positive_amount()) {
        let result = validate_journal_lines(&[
            JournalLine::new("52200", EntrySide::Debit, a),
            JournalLine::new("11400", EntrySide::Debit, b),
            JournalLine::new("11200", EntrySide::Credit, a + b),
        ]);
        prop_assert!(result.is_valid(), "{:?}", result.errors());
    }

    /// *For any* gap greater than 0.01, JL_OUT_OF_BALANCE is reported.
    #[test]
    fn prop_gap_flagged(amount in positive_amount(), gap_cents in 2i64..1_000_000i64) {
        let result = validate_journal_lines(&[
            JournalLine::new("52200", EntrySide::Debit, amount + Decimal::new(gap_cents, 2)),
            JournalLine::new("11200", EntrySide::Credit, amount),
        ]);
        prop_assert!(result.has_error(IssueCode::JlOutOfBalance));
    }
}
