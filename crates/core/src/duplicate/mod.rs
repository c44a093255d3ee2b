//! Duplicate invoice detection.
//!
//! Matching runs in two explicit phases: an exact scan over the whole
//! document set, then a fuzzy scan only when no exact match was found.

pub mod detector;
pub mod types;


pub use detector::{DuplicateDetector, check_duplicate, find_exact_match, find_fuzzy_matches};
pub use types::{
    AiData, Counterparty, DocumentRecord, DuplicateCheckResult, Financials, HeaderData,
    InvoiceCandidate,
    MatchType, Parties,
};
