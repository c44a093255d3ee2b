//! Double-entry posting validation.
//!
//! This module implements the GL side of the review pipeline:
//! - Journal lines and posted entries (domain types)
//! - Parse boundary for untrusted AI/form input
//! - Structural validation of journal lines
//! - The GL posting validation engine

pub mod error;
pub mod journal;
pub mod parse;
pub mod service;
pub mod types;

#[cfg(test)]
mod service_props;
#[cfg(test)]
mod validation_props;

pub use error::ParseError;
pub use journal::validate_journal_lines;
pub use parse::{
    RawJournalLine, RawPostedEntry, RawPostingRequest, parse_journal_lines, parse_posted_entry,
    parse_posting_request,
};
pub use service::GlValidationEngine;
pub use types::{EntrySide, GlPostingRequest, JournalLine, PostedGlEntry, PostingTotals};
