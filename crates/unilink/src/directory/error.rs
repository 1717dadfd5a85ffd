//! Error types for the profile, club and client services.

use thiserror::Error;

use crate::db::StoreError;
use crate::validation::ValidationError;

/// Errors that can occur during directory operations.
#[derive(Debug, Error)]
pub enum DirectoryError {
    /// The submitted form failed one or more field rules
    #[error("Invalid input: {0}")]
    Validation(#[from] ValidationError),

    /// The requested record does not exist
    #[error("Record {id} not found")]
    NotFound { id: String },

    /// The document store failed
    #[error("Persistence error: {0}")]
    Persistence(StoreError),
}

impl From<StoreError> for DirectoryError {
    fn from(error: StoreError) -> Self {
        match error {
            StoreError::NotFound { id, .. } => DirectoryError::NotFound { id },
            other => DirectoryError::Persistence(other),
        }
    }
}
