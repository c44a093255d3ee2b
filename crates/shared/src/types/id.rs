//! Typed IDs for type-safe entity references.
//!
//! Client, user and document identifiers arrive from the document store as
//! opaque strings. Wrapping them prevents accidentally passing a `UserId`
//! where a `ClientId` is expected.

use serde::{Deserialize, Serialize};

/// Error returned when parsing an empty or whitespace-only identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("identifier must not be empty")]
pub struct EmptyIdError;

/// Macro to generate typed ID wrappers around opaque string keys.
macro_rules! typed_id {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Creates an ID from an existing key.
            #[must_use]
            pub fn new(key: impl Into<String>) -> Self {
                Self(key.into())
            }

            /// Returns the key as a string slice.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Returns the inner key.
            #[must_use]
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl std::str::FromStr for $name {
            type Err = EmptyIdError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    return Err(EmptyIdError);
                }
                Ok(Self(trimmed.to_string()))
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

typed_id!(ClientId, "Identifier of an accounting-firm client (the bookkeeping entity).");
typed_id!(UserId, "Identifier of the user submitting a posting.");
typed_id!(DocumentId, "Identifier of a source document (invoice, receipt, statement).");

#[cfg(test)]
#[path = "id_tests.rs"]
mod tests;
