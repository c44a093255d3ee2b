//! Errors raised at the untrusted-input boundary.
//!
//! Rule violations are reported through `ValidationResult`; these errors
//! only cover input that cannot be turned into typed lines at all.

use thiserror::Error;

/// Failure to parse untyped input into ledger types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A required field is absent or null.
    #[error("{path}: missing required field")]
    MissingField {
        /// Field path, e.g. `lines[0].amount`.
        path: String,
    },

    /// Field is present but has the wrong JSON type.
    #[error("{path}: expected {expected}")]
    WrongType {
        /// Field path.
        path: String,
        /// Human description of the expected type.
        expected: &'static str,
    },

    /// Numeric field could not be read as an exact decimal.
    #[error("{path}: '{value}' is not a valid amount")]
    InvalidAmount {
        /// Field path.
        path: String,
        /// Offending text.
        value: String,
    },

    /// Amount magnitude does not fit a ledger column.
    #[error("{path}: '{value}' is out of range")]
    AmountOutOfRange {
        /// Field path.
        path: String,
        /// Offending text.
        value: String,
    },

    /// Amount has digits below a satang.
    #[error("{path}: '{value}' has more than 2 decimal places")]
    AmountTooPrecise {
        /// Field path.
        path: String,
        /// Offending text.
        value: String,
    },

    /// Side is neither DEBIT nor CREDIT.
    #[error("{path}: '{value}' is not DEBIT or CREDIT")]
    InvalidSide {
        /// Field path.
        path: String,
        /// Offending text.
        value: String,
    },

    /// Period is not `YYYY-MM`.
    #[error("{path}: '{value}' is not a YYYY-MM period")]
    InvalidPeriod {
        /// Field path.
        path: String,
        /// Offending text.
        value: String,
    },
}

impl ParseError {
    /// Returns the error code for API responses.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::MissingField { .. } => "MISSING_FIELD",
            Self::WrongType { .. } => "WRONG_TYPE",
            Self::InvalidAmount { .. } => "INVALID_AMOUNT",
            Self::AmountOutOfRange { .. } => "AMOUNT_OUT_OF_RANGE",
            Self::AmountTooPrecise { .. } => "AMOUNT_TOO_PRECISE",
            Self::InvalidSide { .. } => "INVALID_SIDE",
            Self::InvalidPeriod { .. } => "INVALID_PERIOD",
        }
    }

    /// Path of the offending field.
    #[must_use]
    pub fn path(&self) -> &str {
        match self {
            Self::MissingField { path }
            | Self::WrongType { path, .. }
            | Self::InvalidAmount { path, .. }
            | Self::AmountOutOfRange { path, .. }
            | Self::AmountTooPrecise { path, .. }
            | Self::InvalidSide { path, .. }
            | Self::InvalidPeriod { path, .. } => path,
        }
    }
}
