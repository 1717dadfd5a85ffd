use std::sync::Arc;

use tracing::info;

use super::error::DirectoryError;
use super::read_records;
use super::types::{Club, ClubForm};
use crate::db::{to_document, DocumentStore};

/// Shared collection of student clubs.
pub const CLUBS_COLLECTION: &str = "clubs";

#[derive(Clone)]
pub struct ClubService {
    store: Arc<dyn DocumentStore>,
}

impl ClubService {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// Every club, oldest first.
    pub fn list(&self) -> Result<Vec<Club>, DirectoryError> {
        Ok(read_records(self.store.as_ref(), CLUBS_COLLECTION)?
            .into_iter()
            .map(|(id, details)| Club { id, details })
            .collect())
    }

    /// Validates and stores a new club, returning its id.
    pub fn add(&self, form: &ClubForm) -> Result<String, DirectoryError> {
        let details = form.validate()?;
        let id = self
            .store
            .create(CLUBS_COLLECTION, to_document(&details)?)?;

        info!(club_id = %id, name = %details.name, "Added club");
        Ok(id)
    }
}
