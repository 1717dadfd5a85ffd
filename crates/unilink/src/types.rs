//! Shared identifiers and the server-wide state.

use std::fmt;
use std::sync::Arc;

use thiserror::Error;

use crate::config::AppConfig;
use crate::db::DocumentStore;
use crate::directory::{ClientService, ClubService, ProfileService};
use crate::i18n::{Catalog, Locale};
use crate::schedule::ScheduleStore;

/// Collection holding one profile document per user.
pub const USERS_COLLECTION: &str = "users";

/// Identifies the student whose data an operation reads or writes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UserId(String);

/// A user id was empty or would escape its collection path.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid user id: {0:?}")]
pub struct InvalidUserId(pub String);

impl UserId {
    /// Accepts any non-blank id without a `/`.
    pub fn parse(raw: &str) -> Result<Self, InvalidUserId> {
        if raw.trim().is_empty() || raw.contains('/') {
            return Err(InvalidUserId(raw.to_string()));
        }

        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Path of this user's appointment collection.
    pub fn appointments_collection(&self) -> String {
        format!("{USERS_COLLECTION}/{}/appointments", self.0)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// State shared by every request handler.
pub struct AppState {
    pub schedule: ScheduleStore,
    pub profiles: ProfileService,
    pub clubs: ClubService,
    pub clients: ClientService,
    pub catalog: &'static Catalog,
    /// Locale used when a request does not name one
    pub default_locale: Locale,
}

impl AppState {
    pub fn new(store: Arc<dyn DocumentStore>, config: &AppConfig) -> Self {
        Self {
            schedule: ScheduleStore::new(store.clone()),
            profiles: ProfileService::new(store.clone(), config.seed_on_first_visit),
            clubs: ClubService::new(store.clone()),
            clients: ClientService::new(store),
            catalog: Catalog::builtin(),
            default_locale: config.default_locale,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_id_rules() {
        assert!(UserId::parse("").is_err());
        assert!(UserId::parse("   ").is_err());
        assert!(UserId::parse("a/b").is_err());

        let user = UserId::parse("mock-user-id").unwrap();
        assert_eq!(user.as_str(), "mock-user-id");
        assert_eq!(user.appointments_collection(), "users/mock-user-id/appointments");
    }
}
