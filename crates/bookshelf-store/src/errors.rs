//! Store error types.
//!
//! Zero-row reads and zero-row writes are **not** errors — they surface as
//! `None`, empty vectors, or zero affected-row counts. Errors here are the
//! fatal cases: the database is unreachable, the schema does not match, or a
//! required row is missing and a caller chose to insist on it.

use thiserror::Error;

/// Errors from catalog operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Database operation failed.
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// A required author lookup came back empty.
    #[error("Author not found: {name}")]
    AuthorNotFound {
        /// The name that was looked up.
        name: String,
    },
}

impl StoreError {
    /// Create a not-found error for an author name lookup.
    pub fn author_not_found(name: impl Into<String>) -> Self {
        Self::AuthorNotFound { name: name.into() }
    }
}
