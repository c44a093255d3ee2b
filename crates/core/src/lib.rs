//! Core business logic for Bunchi.
//!
//! This crate contains pure business logic with ZERO web or database dependencies.
//! All posting rules, tax arithmetic and duplicate matching live here; storage
//! is reached only through the async traits in [`lookup`].
//!
//! # Modules
//!
//! - `accounts` - Thai chart of accounts
//! - `ledger` - GL posting and journal-line validation
//! - `tax` - VAT, withholding tax and tax ID checks
//! - `duplicate` - Duplicate invoice detection
//! - `validation` - Issue codes and the accumulated result type
//! - `lookup` - Read-only collaborator traits

pub mod accounts;
pub mod duplicate;
pub mod ledger;
pub mod lookup;
pub mod tax;
pub mod validation;
