//! Property-based tests for GlValidationEngine.
//!
//! - Balance law: valid ⇒ |Σdebit − Σcredit| ≤ 0.01, and any larger gap
//!   always yields GL_OUT_OF_BALANCE
//! - Single-sided law: both sides set ⇒ GL_BOTH_SIDES, neither ⇒ GL_ZERO_AMOUNT

use std::sync::Arc;

use async_trait::async_trait;
use bunchi_shared::types::{ClientId, UserId};
use proptest::prelude::*;
use rust_decimal::Decimal;

use super::service::GlValidationEngine;
use super::types::{GlPostingRequest, PostedGlEntry};
use crate::accounts::thai_standard;
use crate::lookup::{ClientDirectory, ClientRecord, LedgerReader, LookupError};
use crate::validation::IssueCode;

struct Nobody;

#[async_trait]
impl ClientDirectory for Nobody {
    async fn get_client_by_id(&self, _: &ClientId) -> Result<Option<ClientRecord>, LookupError> {
        Ok(None)
    }
}

#[async_trait]
impl LedgerReader for Nobody {
    async fn get_gl_entries_by_client(
        &self,
        _: &ClientId,
    ) -> Result<Vec<PostedGlEntry>, LookupError> {
        Ok(vec![])
    }
}

fn engine() -> GlValidationEngine {
    GlValidationEngine::new(Arc::new(thai_standard()), Arc::new(Nobody), Arc::new(Nobody))
}

/// Strategy to generate amounts from 0.00 to 1,000,000.00.
fn amount() -> impl Strategy<Value = Decimal> {
    (0i64..100_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy to generate a strictly positive amount.
fn positive_amount() -> impl Strategy<Value = Decimal> {
    (1i64..100_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy to pick an active account code from the bundled chart.
fn account_code() -> impl Strategy<Value = &'static str> {
    prop_oneof![
        Just("11100"),
        Just("11200"),
        Just("21100"),
        Just("41100"),
        Just("52100"),
    ]
}

fn make_entry(code: &str, debit: Decimal, credit: Decimal) -> PostedGlEntry {
    PostedGlEntry {
        date: "2024-06-30".to_string(),
        doc_no: "JV-1".to_string(),
        description: String::new(),
        account_code: code.to_string(),
        account_name: String::new(),
        debit,
        credit,
        client_id: ClientId::new("c1"),
        period: None,
        department_code: None,
    }
}

fn make_request(entries: Vec<PostedGlEntry>) -> GlPostingRequest {
    GlPostingRequest {
        entries,
        client_id: ClientId::new("c1"),
        period_month: "2024-06".to_string(),
        source_doc_id: None,
        user_id: UserId::new("u1"),
    }
}

/// Strategy for an arbitrary batch of one-sided entries.
fn batch() -> impl Strategy<Value = Vec<PostedGlEntry>> {
    prop::collection::vec((account_code(), any::<bool>(), positive_amount()), 1..8).prop_map(
        |legs| {
            legs.into_iter()
                .map(|(code, is_debit, amt)| {
                    if is_debit {
                        make_entry(code, amt, Decimal::ZERO)
                    } else {
                        make_entry(code, Decimal::ZERO, amt)
                    }
                })
                .collect()
        },
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// *For any* batch, a valid result implies the batch balances within 0.01,
    /// and a larger gap always produces GL_OUT_OF_BALANCE.
    #[test]
    fn prop_balance_law(entries in batch()) {
        let debit: Decimal = entries.iter().map(|e| e.debit).sum();
        let credit: Decimal = entries.iter().map(|e| e.credit).sum();
        let result = engine().validate_entries(&make_request(entries));

        if result.is_valid() {
            prop_assert!((debit - credit).abs() <= Decimal::new(1, 2));
        }
        if (debit - credit).abs() > Decimal::new(1, 2) {
            prop_assert!(result.has_error(IssueCode::GlOutOfBalance));
        }
    }

    /// *For any* mirrored debit/credit pair on active accounts, the batch is valid.
    #[test]
    fn prop_mirrored_pair_is_valid(
        debit_code in account_code(),
        credit_code in account_code(),
        amt in positive_amount(),
    ) {
        let result = engine().validate_entries(&make_request(vec![
            make_entry(debit_code, amt, Decimal::ZERO),
            make_entry(credit_code, Decimal::ZERO, amt),
        ]));
        prop_assert!(result.is_valid(), "{:?}", result.errors());
    }

    /// *For any* entry with debit > 0 and credit > 0, GL_BOTH_SIDES is reported.
    #[test]
    fn prop_both_sides_flagged(debit in positive_amount(), credit in positive_amount()) {
        let result = engine().validate_entries(&make_request(vec![
            make_entry("11200", debit, credit),
        ]));
        prop_assert!(result.has_error(IssueCode::GlBothSides));
        prop_assert!(!result.has_error(IssueCode::GlZeroAmount));
    }

    /// *For any* batch containing a zero/zero entry, GL_ZERO_AMOUNT is reported.
    #[test]
    fn prop_zero_entry_flagged(amt in amount()) {
        let result = engine().validate_entries(&make_request(vec![
            make_entry("11200", amt, Decimal::ZERO),
            make_entry("21100", Decimal::ZERO, Decimal::ZERO),
        ]));
        prop_assert!(result.has_error(IssueCode::GlZeroAmount));
    }
}
