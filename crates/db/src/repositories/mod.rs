//! Repository abstractions for data access.
//!
//! Repositories provide a clean interface for database operations,
//! hiding the `SeaORM` implementation details from the rest of the application.
//! Each one also implements the matching read trait from `bunchi_core::lookup`
//! so the validators can be wired straight to Postgres.

pub mod client;
pub mod document;
pub mod gl_entry;

pub use client::ClientRepository;
pub use document::DocumentRepository;
pub use gl_entry::{GlEntryRepository, PostingError};

use bunchi_core::lookup::LookupError;
use sea_orm::DbErr;

/// Maps a database error onto the lookup error seen by the validators.
pub(crate) fn lookup_error(err: DbErr) -> LookupError {
    match err {
        DbErr::ConnectionAcquire(_) | DbErr::Conn(_) => LookupError::Unavailable(err.to_string()),
        other => LookupError::Backend(other.to_string()),
    }
}
