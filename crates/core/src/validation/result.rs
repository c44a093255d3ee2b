//! Accumulating validation result.

use serde::{Deserialize, Serialize};

use super::codes::IssueCode;

/// How strongly an error blocks posting.
///
/// Both tiers block; `Critical` groups the ledger-integrity failures
/// (out of balance, locked period) separately in the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Ledger-integrity failure.
    Critical,
    /// Line-level failure a reviewer can fix.
    Error,
}

/// A blocking validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationError {
    /// Stable code.
    pub code: IssueCode,
    /// English message.
    pub message: String,
    /// Thai message.
    pub message_th: String,
    /// Path of the offending field, e.g. `entries[1].debit`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    /// Severity tier.
    pub severity: Severity,
}

impl ValidationError {
    /// Creates a critical error.
    #[must_use]
    pub fn critical(
        code: IssueCode,
        message: impl Into<String>,
        message_th: impl Into<String>,
    ) -> Self {
        Self {
            code,
            message: message.into(),
            message_th: message_th.into(),
            field: None,
            severity: Severity::Critical,
        }
    }

    /// Creates a plain error.
    #[must_use]
    pub fn error(
        code: IssueCode,
        message: impl Into<String>,
        message_th: impl Into<String>,
    ) -> Self {
        Self {
            code,
            message: message.into(),
            message_th: message_th.into(),
            field: None,
            severity: Severity::Error,
        }
    }

    /// Attaches a field path.
    #[must_use]
    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }
}

/// A non-blocking observation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationWarning {
    /// Stable code.
    pub code: IssueCode,
    /// English message.
    pub message: String,
    /// Thai message.
    pub message_th: String,
    /// Path of the offending field.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl ValidationWarning {
    /// Creates a warning.
    #[must_use]
    pub fn new(code: IssueCode, message: impl Into<String>, message_th: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            message_th: message_th.into(),
            field: None,
        }
    }

    /// Attaches a field path.
    #[must_use]
    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }
}

/// Outcome of a validation call.
///
/// `is_valid` is true exactly when no errors were recorded; warnings never
/// affect it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    is_valid: bool,
    errors: Vec<ValidationError>,
    warnings: Vec<ValidationWarning>,
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::new()
    }
}

impl ValidationResult {
    /// An empty, valid result.
    #[must_use]
    pub fn new() -> Self {
        Self {
            is_valid: true,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// A result holding a single error.
    #[must_use]
    pub fn from_error(error: ValidationError) -> Self {
        let mut result = Self::new();
        result.push_error(error);
        result
    }

    /// Records a blocking error.
    pub fn push_error(&mut self, error: ValidationError) {
        self.is_valid = false;
        self.errors.push(error);
    }

    /// Records a warning.
    pub fn push_warning(&mut self, warning: ValidationWarning) {
        self.warnings.push(warning);
    }

    /// Appends all errors and warnings of `other`, preserving order.
    pub fn merge(&mut self, other: ValidationResult) {
        for error in other.errors {
            self.push_error(error);
        }
        self.warnings.extend(other.warnings);
    }

    /// True when posting may proceed.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    /// Recorded errors in detection order.
    #[must_use]
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Recorded warnings in detection order.
    #[must_use]
    pub fn warnings(&self) -> &[ValidationWarning] {
        &self.warnings
    }

    /// True if any error is critical.
    #[must_use]
    pub fn has_critical(&self) -> bool {
        self.errors.iter().any(|e| e.severity == Severity::Critical)
    }

    /// True if an error with `code` was recorded.
    #[must_use]
    pub fn has_error(&self, code: IssueCode) -> bool {
        self.errors.iter().any(|e| e.code == code)
    }

    /// True if a warning with `code` was recorded.
    #[must_use]
    pub fn has_warning(&self, code: IssueCode) -> bool {
        self.warnings.iter().any(|w| w.code == code)
    }

    /// Error codes in detection order.
    #[must_use]
    pub fn error_codes(&self) -> Vec<IssueCode> {
        self.errors.iter().map(|e| e.code).collect()
    }

    /// Warning codes in detection order.
    #[must_use]
    pub fn warning_codes(&self) -> Vec<IssueCode> {
        self.warnings.iter().map(|w| w.code).collect()
    }
}
