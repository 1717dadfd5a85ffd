use std::sync::Arc;

use tracing::info;

use super::error::DirectoryError;
use super::read_records;
use super::types::{Client, ClientForm};
use crate::db::{to_document, DocumentStore};

/// Shared collection of clients.
pub const CLIENTS_COLLECTION: &str = "clients";

#[derive(Clone)]
pub struct ClientService {
    store: Arc<dyn DocumentStore>,
}

impl ClientService {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    pub fn list(&self) -> Result<Vec<Client>, DirectoryError> {
        Ok(read_records(self.store.as_ref(), CLIENTS_COLLECTION)?
            .into_iter()
            .map(|(id, details)| Client { id, details })
            .collect())
    }

    /// Validates and stores a new client; the avatar is derived from the email.
    pub fn add(&self, form: &ClientForm) -> Result<String, DirectoryError> {
        let details = form.validate()?;
        let id = self
            .store
            .create(CLIENTS_COLLECTION, to_document(&details)?)?;

        info!(client_id = %id, "Added client");
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::MemoryDocumentStore;

    #[test]
    fn test_add_then_list() {
        let clients = ClientService::new(Arc::new(MemoryDocumentStore::new()));
        let id = clients
            .add(&ClientForm {
                name: "John Doe".to_string(),
                email: "john.doe@example.com".to_string(),
                university: "State University".to_string(),
            })
            .unwrap();

        let all = clients.list().unwrap();
        assert_eq!(all[0].id, id);
        assert_eq!(all[0].details.email, "john.doe@example.com");
        assert!(all[0].details.avatar_url.ends_with("?u=john.doe@example.com"));
    }

    #[test]
    fn test_bad_email_is_rejected() {
        let clients = ClientService::new(Arc::new(MemoryDocumentStore::new()));
        let err = clients
            .add(&ClientForm {
                name: "John Doe".to_string(),
                email: "john.doe".to_string(),
                university: "State University".to_string(),
            })
            .unwrap_err();

        match err {
            DirectoryError::Validation(v) => {
                assert_eq!(v.failures.len(), 1);
                assert_eq!(v.failures[0].message_key, "zod.client.email.invalid");
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
