//! Document store used to persist profiles, appointments, clubs and clients.
//!
//! Collections are addressed by slash-separated paths such as `clubs` or
//! `users/<user>/appointments`; each holds JSON object documents keyed by id.
mod error;
mod memory;
mod sqlite;
mod types;

pub use error::StoreError;
pub use memory::MemoryDocumentStore;
pub use sqlite::SqliteDocumentStore;
pub use types::{
    from_document, merge_fields, new_document_id, to_document, BatchWrite, Document, WriteBatch,
    DOCUMENT_ID_LEN,
};

/// Storage operations every backend provides.
pub trait DocumentStore: Send + Sync {
    /// Stores a new document under a generated id and returns the id.
    fn create(&self, collection: &str, doc: Document) -> Result<String, StoreError>;

    /// Creates or overwrites the document at `collection/id`.
    fn set(&self, collection: &str, id: &str, doc: Document) -> Result<(), StoreError>;

    /// Fetches a single document.
    fn get(&self, collection: &str, id: &str) -> Result<Option<Document>, StoreError>;

    /// Fetches every document of a collection in insertion order.
    fn read_all(&self, collection: &str) -> Result<Vec<(String, Document)>, StoreError>;

    /// Merges the top-level fields of `partial` into an existing document.
    ///
    /// Fails with [`StoreError::NotFound`] if the document does not exist.
    fn update(&self, collection: &str, id: &str, partial: Document) -> Result<(), StoreError>;

    /// Deletes a document. Deleting a missing document is not an error.
    fn delete(&self, collection: &str, id: &str) -> Result<(), StoreError>;

    /// Applies every write of the batch.
    fn commit(&self, batch: WriteBatch) -> Result<(), StoreError>;

    /// Returns true if the collection holds no documents.
    fn is_empty(&self, collection: &str) -> Result<bool, StoreError> {
        Ok(self.read_all(collection)?.is_empty())
    }
}
