//! Validation outcome types shared by every validator.
//!
//! Validators never fail with `Err` for rule violations. They return a
//! `ValidationResult` that lists every blocking error and non-blocking
//! warning so a reviewer can fix all offending lines in one pass.

pub mod amount;
pub mod codes;
pub mod result;

pub use amount::check_amount;
pub use codes::IssueCode;
pub use result::{Severity, ValidationError, ValidationResult, ValidationWarning};
