//! Document and batch types shared by every store implementation.
use rand::distributions::Alphanumeric;
use rand::Rng;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

use super::error::StoreError;

/// Length of generated document ids.
pub const DOCUMENT_ID_LEN: usize = 20;

/// A stored document: a JSON object keyed by field name.
pub type Document = Map<String, Value>;

/// Generates a random alphanumeric document id.
pub fn new_document_id() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(DOCUMENT_ID_LEN)
        .map(char::from)
        .collect()
}

/// Serializes a value into a document. Fails unless the value is a JSON object.
pub fn to_document<T: Serialize>(value: &T) -> Result<Document, StoreError> {
    match serde_json::to_value(value)? {
        Value::Object(map) => Ok(map),
        _ => Err(StoreError::NotAnObject),
    }
}

/// Deserializes a document into a typed record.
pub fn from_document<T: DeserializeOwned>(doc: Document) -> Result<T, StoreError> {
    Ok(serde_json::from_value(Value::Object(doc))?)
}

/// Copies every top-level field of `partial` over `target`.
pub fn merge_fields(target: &mut Document, partial: Document) {
    for (key, value) in partial {
        target.insert(key, value);
    }
}

/// A single write inside a [`WriteBatch`].
#[derive(Debug, Clone, PartialEq)]
pub struct BatchWrite {
    pub collection: String,
    pub id: String,
    pub doc: Document,
}

/// A group of set-writes applied together by [`super::DocumentStore::commit`].
#[derive(Debug, Clone, Default)]
pub struct WriteBatch {
    writes: Vec<BatchWrite>,
}

impl WriteBatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a create-or-overwrite of `collection/id`.
    pub fn set(&mut self, collection: &str, id: &str, doc: Document) -> &mut Self {
        self.writes.push(BatchWrite {
            collection: collection.to_string(),
            id: id.to_string(),
            doc,
        });
        self
    }

    /// Queues a new document under a freshly generated id and returns that id.
    pub fn create(&mut self, collection: &str, doc: Document) -> String {
        let id = new_document_id();
        self.set(collection, &id, doc);
        id
    }

    pub fn len(&self) -> usize {
        self.writes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.writes.is_empty()
    }

    pub fn into_writes(self) -> Vec<BatchWrite> {
        self.writes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_document_ids_are_alphanumeric() {
        let id = new_document_id();
        assert_eq!(id.len(), DOCUMENT_ID_LEN);
        assert!(id.chars().all(|c| c.is_ascii_alphanumeric()));
        assert_ne!(id, new_document_id());
    }

    #[test]
    fn test_to_document_rejects_non_objects() {
        assert!(matches!(to_document(&"plain"), Err(StoreError::NotAnObject)));
        assert!(to_document(&json!({ "name": "Debate Club" })).is_ok());
    }

    #[test]
    fn test_merge_overwrites_only_given_fields() {
        let mut target = to_document(&json!({ "name": "A", "room": "101" })).unwrap();
        let partial = to_document(&json!({ "room": "202" })).unwrap();
        merge_fields(&mut target, partial);

        assert_eq!(target["name"], "A");
        assert_eq!(target["room"], "202");
    }

    #[test]
    fn test_batch_create_generates_distinct_ids() {
        let mut batch = WriteBatch::new();
        let a = batch.create("clubs", Document::new());
        let b = batch.create("clubs", Document::new());

        assert_ne!(a, b);
        assert_eq!(batch.len(), 2);
    }
}
