use std::sync::{Arc, Mutex};

use tracing::{info, warn};

use super::error::DirectoryError;
use super::types::{Profile, ProfileForm};
use crate::db::{from_document, to_document, DocumentStore, StoreError};
use crate::seed::seed_user;
use crate::types::{UserId, USERS_COLLECTION};

/// Reads and edits the profile stored at `users/<user>`.
#[derive(Clone)]
pub struct ProfileService {
    store: Arc<dyn DocumentStore>,
    seed_on_first_visit: bool,
    /// Held across the existence check and the seed commit.
    seed_lock: Arc<Mutex<()>>,
}

impl ProfileService {
    pub fn new(store: Arc<dyn DocumentStore>, seed_on_first_visit: bool) -> Self {
        Self {
            store,
            seed_on_first_visit,
            seed_lock: Arc::new(Mutex::new(())),
        }
    }

    fn stored_profile(&self, user: &UserId) -> Result<Option<Profile>, DirectoryError> {
        match self.store.get(USERS_COLLECTION, user.as_str())? {
            Some(doc) => Ok(Some(Profile {
                id: user.to_string(),
                details: from_document(doc)?,
            })),
            None => Ok(None),
        }
    }

    /// Returns the user's profile.
    ///
    /// On a first visit (no profile yet) the user is seeded with the initial
    /// profile, schedule and clubs, unless seeding is disabled, in which case
    /// this fails with [`DirectoryError::NotFound`]. Concurrent first visits
    /// seed at most once.
    pub fn get(&self, user: &UserId) -> Result<Profile, DirectoryError> {
        if let Some(profile) = self.stored_profile(user)? {
            return Ok(profile);
        }

        if !self.seed_on_first_visit {
            warn!(user = %user, "Profile not found and seeding is disabled");
            return Err(DirectoryError::NotFound {
                id: user.to_string(),
            });
        }

        let _guard = self.seed_lock.lock().map_err(|_| StoreError::Poisoned)?;
        if let Some(profile) = self.stored_profile(user)? {
            return Ok(profile);
        }

        let details = seed_user(self.store.as_ref(), user)?;
        Ok(Profile {
            id: user.to_string(),
            details,
        })
    }

    /// Validates the form and merges it into the stored profile.
    pub fn update(&self, user: &UserId, form: &ProfileForm) -> Result<Profile, DirectoryError> {
        let details = form.validate()?;
        self.store
            .update(USERS_COLLECTION, user.as_str(), to_document(&details)?)?;

        info!(user = %user, "Updated profile");
        Ok(Profile {
            id: user.to_string(),
            details,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{MemoryDocumentStore, SqliteDocumentStore};
    use crate::directory::{ClubService, CourseInput};
    use crate::schedule::ScheduleStore;
    use std::sync::Barrier;
    use std::thread;

    fn user() -> UserId {
        UserId::parse("mock-user-id").unwrap()
    }

    fn form() -> ProfileForm {
        ProfileForm {
            name: "Jo Doe".to_string(),
            description: "Final year business student".to_string(),
            email: "jo@example.com".to_string(),
            university: "WIUT".to_string(),
            faculty: "Business".to_string(),
            course: CourseInput::Number(4),
            group: "BA-401".to_string(),
        }
    }

    #[test]
    fn test_first_visit_seeds_once() {
        let store = Arc::new(MemoryDocumentStore::new());
        let profiles = ProfileService::new(store.clone(), true);
        let schedule = ScheduleStore::new(store);

        let first = profiles.get(&user()).unwrap();
        assert_eq!(first.details.name, "Sunnatilla Kholdarboeva");
        assert_eq!(schedule.list(&user()).unwrap().len(), 7);

        let second = profiles.get(&user()).unwrap();
        assert_eq!(second, first);
        assert_eq!(schedule.list(&user()).unwrap().len(), 7);
    }

    fn concurrent_first_visits(store: Arc<dyn DocumentStore>) {
        let profiles = ProfileService::new(store.clone(), true);
        let schedule = ScheduleStore::new(store.clone());

        for round in 0..25 {
            let users = [
                UserId::parse(&format!("user-{round}")).unwrap(),
                UserId::parse(&format!("user-{round}")).unwrap(),
                UserId::parse(&format!("other-{round}")).unwrap(),
            ];
            let barrier = Barrier::new(users.len());
            thread::scope(|scope| {
                for user in &users {
                    let profiles = profiles.clone();
                    let barrier = &barrier;
                    scope.spawn(move || {
                        barrier.wait();
                        profiles.get(user).unwrap();
                    });
                }
            });

            assert_eq!(schedule.list(&users[0]).unwrap().len(), 7);
            assert_eq!(schedule.list(&users[2]).unwrap().len(), 7);
        }
        assert_eq!(ClubService::new(store).list().unwrap().len(), 3);
    }

    #[test]
    fn test_concurrent_first_visits_seed_once_in_memory() {
        concurrent_first_visits(Arc::new(MemoryDocumentStore::new()));
    }

    #[test]
    fn test_concurrent_first_visits_seed_once_in_sqlite() {
        concurrent_first_visits(Arc::new(SqliteDocumentStore::in_memory().unwrap()));
    }

    #[test]
    fn test_missing_profile_without_seeding() {
        let profiles = ProfileService::new(Arc::new(MemoryDocumentStore::new()), false);
        assert!(matches!(
            profiles.get(&user()),
            Err(DirectoryError::NotFound { id }) if id == "mock-user-id"
        ));
    }

    #[test]
    fn test_update_merges_into_profile() {
        let profiles = ProfileService::new(Arc::new(MemoryDocumentStore::new()), true);
        profiles.get(&user()).unwrap();

        let updated = profiles.update(&user(), &form()).unwrap();
        assert_eq!(updated.details.course, 4);
        assert_eq!(profiles.get(&user()).unwrap(), updated);
    }

    #[test]
    fn test_update_unknown_profile_is_not_found() {
        let profiles = ProfileService::new(Arc::new(MemoryDocumentStore::new()), true);
        assert!(matches!(
            profiles.update(&user(), &form()),
            Err(DirectoryError::NotFound { .. })
        ));
    }
}
