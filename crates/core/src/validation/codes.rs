//! Stable issue codes surfaced to the review UI.

use serde::{Deserialize, Serialize};

/// Machine-readable code attached to every error and warning.
///
/// Serialised as SCREAMING_SNAKE_CASE, e.g. `GL_OUT_OF_BALANCE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IssueCode {
    // ========== GL posting ==========
    /// Posting request has no entries.
    GlEmpty,
    /// Total debits differ from total credits beyond tolerance.
    GlOutOfBalance,
    /// Account code not found in the chart.
    GlInvalidAccount,
    /// Account exists but is inactive.
    GlInactiveAccount,
    /// Debit or credit is negative.
    GlNegativeAmount,
    /// Both debit and credit are set on one entry.
    GlBothSides,
    /// Neither debit nor credit is set.
    GlZeroAmount,
    /// Entry date is not `YYYY-MM-DD`.
    GlInvalidDate,
    /// Entry belongs to a different client than the request.
    GlClientMismatch,
    /// Client's accounting period is locked.
    PeriodLocked,
    /// Period-lock status could not be read.
    ClientCheckFailed,
    /// Ledger already holds entries for the source document.
    PossibleDuplicate,

    // ========== Amounts ==========
    /// Amount does not fit a `NUMERIC(18,2)` column.
    AmountOutOfRange,
    /// Amount has digits below a satang.
    AmountTooPrecise,

    // ========== Journal lines ==========
    /// Fewer than two journal lines.
    JlMinimumLines,
    /// Journal lines do not balance.
    JlOutOfBalance,
    /// Account code is not five characters.
    JlInvalidCode,
    /// Line amount is zero or negative.
    JlInvalidAmount,

    // ========== Tax arithmetic ==========
    /// Withholding tax differs from gross x rate.
    WhtMismatch,
    /// Withholding tax rate outside the statutory set.
    WhtUnusualRate,
    /// VAT differs from subtotal x rate.
    VatMismatch,
    /// Grand total differs from subtotal + VAT.
    TotalMismatch,
    /// VAT rate other than 0% or 7%.
    VatUnusualRate,

    // ========== Tax ID ==========
    /// Tax ID does not have 13 digits.
    TaxIdInvalidLength,
    /// Tax ID check digit does not match.
    TaxIdInvalidChecksum,
}

impl IssueCode {
    /// Returns the wire representation of the code.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::GlEmpty => "GL_EMPTY",
            Self::GlOutOfBalance => "GL_OUT_OF_BALANCE",
            Self::GlInvalidAccount => "GL_INVALID_ACCOUNT",
            Self::GlInactiveAccount => "GL_INACTIVE_ACCOUNT",
            Self::GlNegativeAmount => "GL_NEGATIVE_AMOUNT",
            Self::GlBothSides => "GL_BOTH_SIDES",
            Self::GlZeroAmount => "GL_ZERO_AMOUNT",
            Self::GlInvalidDate => "GL_INVALID_DATE",
            Self::GlClientMismatch => "GL_CLIENT_MISMATCH",
            Self::PeriodLocked => "PERIOD_LOCKED",
            Self::ClientCheckFailed => "CLIENT_CHECK_FAILED",
            Self::PossibleDuplicate => "POSSIBLE_DUPLICATE",
            Self::AmountOutOfRange => "AMOUNT_OUT_OF_RANGE",
            Self::AmountTooPrecise => "AMOUNT_TOO_PRECISE",
            Self::JlMinimumLines => "JL_MINIMUM_LINES",
            Self::JlOutOfBalance => "JL_OUT_OF_BALANCE",
            Self::JlInvalidCode => "JL_INVALID_CODE",
            Self::JlInvalidAmount => "JL_INVALID_AMOUNT",
            Self::WhtMismatch => "WHT_MISMATCH",
            Self::WhtUnusualRate => "WHT_UNUSUAL_RATE",
            Self::VatMismatch => "VAT_MISMATCH",
            Self::TotalMismatch => "TOTAL_MISMATCH",
            Self::VatUnusualRate => "VAT_UNUSUAL_RATE",
            Self::TaxIdInvalidLength => "TAX_ID_INVALID_LENGTH",
            Self::TaxIdInvalidChecksum => "TAX_ID_INVALID_CHECKSUM",
        }
    }
}

impl std::fmt::Display for IssueCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
