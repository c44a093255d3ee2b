//! Shared types, errors, and configuration for Bunchi.
//!
//! This crate provides common types used across all other crates:
//! - Baht rounding and tolerance helpers with decimal precision
//! - Typed IDs for client, user and document keys
//! - Application-wide error types
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::{AppConfig, ValidationConfig};
pub use error::AppError;
