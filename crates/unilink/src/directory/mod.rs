//! Profile, club and client directories.

mod client;
mod club;
mod error;
mod profile;
mod types;

use serde::de::DeserializeOwned;

use crate::db::{from_document, DocumentStore, StoreError};

pub use client::{ClientService, CLIENTS_COLLECTION};
pub use club::{ClubService, CLUBS_COLLECTION};
pub use error::DirectoryError;
pub use profile::ProfileService;
pub use types::{
    client_avatar_url, Client, ClientDetails, ClientForm, Club, ClubDetails, ClubForm,
    CourseInput, Profile, ProfileForm, UserProfile, DEFAULT_CLUB_AVATAR_URL, MAX_COURSE,
    MIN_COURSE,
};

/// Reads and decodes every document of a collection, keeping storage order.
fn read_records<T: DeserializeOwned>(
    store: &dyn DocumentStore,
    collection: &str,
) -> Result<Vec<(String, T)>, StoreError> {
    store
        .read_all(collection)?
        .into_iter()
        .map(|(id, doc)| Ok((id, from_document(doc)?)))
        .collect()
}
