//! Error types for the document store.

use thiserror::Error;

/// Errors raised by a [`super::DocumentStore`] implementation.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The underlying SQLite call failed
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// A document could not be encoded or decoded
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Update target does not exist
    #[error("Document {collection}/{id} not found")]
    NotFound { collection: String, id: String },

    /// A record serialized to something other than a JSON object
    #[error("Record is not a JSON object")]
    NotAnObject,

    /// The connection mutex was poisoned by a panicking writer
    #[error("Database lock poisoned")]
    Poisoned,
}

impl StoreError {
    pub(crate) fn not_found(collection: &str, id: &str) -> Self {
        StoreError::NotFound {
            collection: collection.to_string(),
            id: id.to_string(),
        }
    }
}
