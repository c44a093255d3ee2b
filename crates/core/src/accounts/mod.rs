//! Chart of accounts reference data.
//!
//! The chart is immutable at runtime. It is built once (from the bundled
//! Thai standard table or a tenant-specific list) and shared read-only with
//! the validators through an `Arc`.

pub mod chart;
pub mod thai;

pub use chart::{AccountType, ChartAccount, ChartError, ChartOfAccounts, NormalBalance};
pub use thai::{THAI_STANDARD_VERSION, thai_standard};
