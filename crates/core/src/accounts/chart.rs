//! Chart of accounts types and lookup.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Account classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountType {
    /// Resources owned by the client.
    Asset,
    /// Obligations owed to third parties.
    Liability,
    /// Owner's residual interest.
    Equity,
    /// Income earned.
    Revenue,
    /// Costs incurred.
    Expense,
}

impl AccountType {
    /// The normal balance side for accounts of this type.
    ///
    /// Contra accounts (e.g. accumulated depreciation) override this on the
    /// individual account.
    #[must_use]
    pub fn default_normal_balance(self) -> NormalBalance {
        match self {
            Self::Asset | Self::Expense => NormalBalance::Debit,
            Self::Liability | Self::Equity | Self::Revenue => NormalBalance::Credit,
        }
    }
}

/// Side on which an account's balance normally sits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NormalBalance {
    /// Debit-normal (assets, expenses).
    Debit,
    /// Credit-normal (liabilities, equity, revenue).
    Credit,
}

/// A single account in the chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartAccount {
    /// Five-digit account code, unique within the chart.
    pub code: String,
    /// English account name.
    pub name: String,
    /// Thai account name.
    pub name_th: String,
    /// Account classification.
    #[serde(rename = "type")]
    pub account_type: AccountType,
    /// Whether new postings to this account are expected.
    pub is_active: bool,
    /// Normal balance side.
    pub normal_balance: NormalBalance,
}

impl ChartAccount {
    /// Creates an active account using the type's default normal balance.
    #[must_use]
    pub fn new(
        code: impl Into<String>,
        name: impl Into<String>,
        name_th: impl Into<String>,
        account_type: AccountType,
    ) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            name_th: name_th.into(),
            account_type,
            is_active: true,
            normal_balance: account_type.default_normal_balance(),
        }
    }

    /// Overrides the normal balance (contra accounts).
    #[must_use]
    pub fn with_normal_balance(mut self, normal_balance: NormalBalance) -> Self {
        self.normal_balance = normal_balance;
        self
    }

    /// Marks the account inactive.
    #[must_use]
    pub fn inactive(mut self) -> Self {
        self.is_active = false;
        self
    }
}

/// Errors raised while building a chart of accounts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChartError {
    /// Account code is not exactly five ASCII digits.
    #[error("Account code '{0}' must be exactly 5 digits")]
    InvalidCode(String),

    /// The same code appears more than once.
    #[error("Account code '{0}' appears more than once")]
    DuplicateCode(String),
}

/// Read-only registry of accounts keyed by code.
#[derive(Debug, Clone, Default)]
pub struct ChartOfAccounts {
    accounts: BTreeMap<String, ChartAccount>,
}

impl ChartOfAccounts {
    /// Builds a chart from a list of accounts.
    ///
    /// # Errors
    ///
    /// Returns `ChartError` if a code is malformed or duplicated.
    pub fn from_accounts(
        accounts: impl IntoIterator<Item = ChartAccount>,
    ) -> Result<Self, ChartError> {
        let mut map = BTreeMap::new();
        for account in accounts {
            if !is_five_digit_code(&account.code) {
                return Err(ChartError::InvalidCode(account.code));
            }
            if map.contains_key(&account.code) {
                return Err(ChartError::DuplicateCode(account.code));
            }
            map.insert(account.code.clone(), account);
        }
        Ok(Self { accounts: map })
    }

    /// Looks up an account by code.
    #[must_use]
    pub fn get(&self, code: &str) -> Option<&ChartAccount> {
        self.accounts.get(code)
    }

    /// Returns true if the code exists (active or not).
    #[must_use]
    pub fn contains(&self, code: &str) -> bool {
        self.accounts.contains_key(code)
    }

    /// Iterates accounts in code order.
    pub fn iter(&self) -> impl Iterator<Item = &ChartAccount> {
        self.accounts.values()
    }

    /// Iterates accounts of a single type in code order.
    pub fn by_type(&self, account_type: AccountType) -> impl Iterator<Item = &ChartAccount> {
        self.accounts
            .values()
            .filter(move |a| a.account_type == account_type)
    }

    /// Number of accounts in the chart.
    #[must_use]
    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    /// Returns true if the chart holds no accounts.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}

fn is_five_digit_code(code: &str) -> bool {
    code.len() == 5 && code.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<ChartAccount> {
        vec![
            ChartAccount::new("11100", "Cash", "เงินสด", AccountType::Asset),
            ChartAccount::new("21100", "Accounts payable", "เจ้าหนี้การค้า", AccountType::Liability),
            ChartAccount::new("52800", "Entertainment", "ค่ารับรอง", AccountType::Expense).inactive(),
        ]
    }

    #[test]
    fn test_from_accounts_and_lookup() {
        let chart = ChartOfAccounts::from_accounts(sample()).unwrap();
        assert_eq!(chart.len(), 3);
        assert!(chart.contains("11100"));
        assert!(!chart.contains("99999"));
        assert_eq!(chart.get("21100").unwrap().normal_balance, NormalBalance::Credit);
        assert!(!chart.get("52800").unwrap().is_active);
    }

    #[test]
    fn test_duplicate_code_rejected() {
        let mut accounts = sample();
        accounts.push(ChartAccount::new("11100", "Petty cash", "เงินสดย่อย", AccountType::Asset));
        assert_eq!(
            ChartOfAccounts::from_accounts(accounts).unwrap_err(),
            ChartError::DuplicateCode("11100".to_string())
        );
    }

    #[test]
    fn test_invalid_code_rejected() {
        for bad in ["1110", "111000", "11A00", ""] {
            let accounts = vec![ChartAccount::new(bad, "x", "x", AccountType::Asset)];
            assert!(matches!(
                ChartOfAccounts::from_accounts(accounts),
                Err(ChartError::InvalidCode(_))
            ));
        }
    }

    #[test]
    fn test_by_type_is_ordered() {
        let chart = ChartOfAccounts::from_accounts(sample()).unwrap();
        let expenses: Vec<_> = chart.by_type(AccountType::Expense).map(|a| &a.code).collect();
        assert_eq!(expenses, vec!["52800"]);
    }

    #[test]
    fn test_contra_account_override() {
        let acc = ChartAccount::new(
            "12900",
            "Accumulated depreciation",
            "ค่าเสื่อมราคาสะสม",
            AccountType::Asset,
        )
        .with_normal_balance(NormalBalance::Credit);
        assert_eq!(acc.normal_balance, NormalBalance::Credit);
        assert_eq!(AccountType::Asset.default_normal_balance(), NormalBalance::Debit);
    }
}
