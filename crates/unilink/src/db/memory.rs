//! In-process document store.

use dashmap::DashMap;

use super::error::StoreError;
use super::types::{merge_fields, new_document_id, Document, WriteBatch};
use super::DocumentStore;

/// Thread-safe document store kept entirely in memory.
///
/// Uses DashMap so collections can be read and written concurrently without an
/// outer lock. Nothing survives a restart.
#[derive(Default)]
pub struct MemoryDocumentStore {
    collections: DashMap<String, Vec<(String, Document)>>,
}

impl MemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn upsert(&self, collection: &str, id: &str, doc: Document) {
        let mut docs = self.collections.entry(collection.to_string()).or_default();
        match docs.iter_mut().find(|(existing, _)| existing == id) {
            Some((_, slot)) => *slot = doc,
            None => docs.push((id.to_string(), doc)),
        }
    }
}

impl DocumentStore for MemoryDocumentStore {
    fn create(&self, collection: &str, doc: Document) -> Result<String, StoreError> {
        let id = new_document_id();
        self.collections
            .entry(collection.to_string())
            .or_default()
            .push((id.clone(), doc));
        Ok(id)
    }

    fn set(&self, collection: &str, id: &str, doc: Document) -> Result<(), StoreError> {
        self.upsert(collection, id, doc);
        Ok(())
    }

    fn get(&self, collection: &str, id: &str) -> Result<Option<Document>, StoreError> {
        Ok(self.collections.get(collection).and_then(|docs| {
            docs.iter()
                .find(|(existing, _)| existing == id)
                .map(|(_, doc)| doc.clone())
        }))
    }

    fn read_all(&self, collection: &str) -> Result<Vec<(String, Document)>, StoreError> {
        Ok(self
            .collections
            .get(collection)
            .map(|docs| docs.value().clone())
            .unwrap_or_default())
    }

    fn update(&self, collection: &str, id: &str, partial: Document) -> Result<(), StoreError> {
        let mut docs = self
            .collections
            .get_mut(collection)
            .ok_or_else(|| StoreError::not_found(collection, id))?;

        let (_, doc) = docs
            .iter_mut()
            .find(|(existing, _)| existing == id)
            .ok_or_else(|| StoreError::not_found(collection, id))?;

        merge_fields(doc, partial);
        Ok(())
    }

    fn delete(&self, collection: &str, id: &str) -> Result<(), StoreError> {
        if let Some(mut docs) = self.collections.get_mut(collection) {
            docs.retain(|(existing, _)| existing != id);
        }
        Ok(())
    }

    fn commit(&self, batch: WriteBatch) -> Result<(), StoreError> {
        for write in batch.into_writes() {
            self.upsert(&write.collection, &write.id, write.doc);
        }
        Ok(())
    }
}
