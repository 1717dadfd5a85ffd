//! Error types for the schedule store.

use thiserror::Error;

use crate::db::StoreError;
use crate::validation::ValidationError;

/// Errors that can occur during schedule operations.
#[derive(Debug, Error)]
pub enum ScheduleError {
    /// The submitted appointment failed one or more field rules
    #[error("Invalid appointment: {0}")]
    Validation(#[from] ValidationError),

    /// No appointment with this id exists for the user
    #[error("Appointment {id} not found")]
    NotFound { id: String },

    /// The document store failed
    #[error("Persistence error: {0}")]
    Persistence(StoreError),
}

impl From<StoreError> for ScheduleError {
    fn from(error: StoreError) -> Self {
        match error {
            StoreError::NotFound { id, .. } => ScheduleError::NotFound { id },
            other => ScheduleError::Persistence(other),
        }
    }
}

/// A string did not name any variant of a closed set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown {kind}: {value:?}")]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub value: String,
}

impl UnknownVariant {
    pub(crate) fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}
