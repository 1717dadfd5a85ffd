//! SQLite-backed document store.
use std::sync::{Mutex, MutexGuard};

use rusqlite::{Connection, OptionalExtension};
use tracing::info;

use super::error::StoreError;
use super::types::{merge_fields, new_document_id, Document, WriteBatch};
use super::DocumentStore;

const SCHEMA_SQL: &str = include_str!("../../../../sql/init_documents.sql");

const UPSERT_SQL: &str = "INSERT INTO documents (collection, doc_id, body, created_at, updated_at)
     VALUES (?1, ?2, ?3, datetime('now'), datetime('now'))
     ON CONFLICT(collection, doc_id) DO UPDATE SET
        body = excluded.body,
        updated_at = datetime('now')";

pub struct SqliteDocumentStore {
    db: Mutex<Connection>,
}

impl SqliteDocumentStore {
    /// Opens (or creates) the database file and initializes the schema
    pub fn open(db_path: &str) -> Result<Self, StoreError> {
        info!("Opening SQLite document store at {}", db_path);
        Self::with_connection(Connection::open(db_path)?)
    }

    /// Creates a private in-memory database
    pub fn in_memory() -> Result<Self, StoreError> {
        Self::with_connection(Connection::open_in_memory()?)
    }

    fn with_connection(conn: Connection) -> Result<Self, StoreError> {
        conn.execute_batch(SCHEMA_SQL)?;

        Ok(Self {
            db: Mutex::new(conn),
        })
    }

    fn lock(&self) -> Result<MutexGuard<'_, Connection>, StoreError> {
        self.db.lock().map_err(|_| StoreError::Poisoned)
    }
}

fn parse_body(body: &str) -> Result<Document, StoreError> {
    Ok(serde_json::from_str(body)?)
}

impl DocumentStore for SqliteDocumentStore {
    fn create(&self, collection: &str, doc: Document) -> Result<String, StoreError> {
        let id = new_document_id();
        let body = serde_json::to_string(&doc)?;

        let db = self.lock()?;
        db.execute(
            "INSERT INTO documents (collection, doc_id, body, created_at, updated_at)
             VALUES (?1, ?2, ?3, datetime('now'), datetime('now'))",
            (collection, &id, body),
        )?;

        Ok(id)
    }

    fn set(&self, collection: &str, id: &str, doc: Document) -> Result<(), StoreError> {
        let body = serde_json::to_string(&doc)?;

        let db = self.lock()?;
        db.execute(UPSERT_SQL, (collection, id, body))?;

        Ok(())
    }

    fn get(&self, collection: &str, id: &str) -> Result<Option<Document>, StoreError> {
        let db = self.lock()?;
        let body: Option<String> = db
            .query_row(
                "SELECT body FROM documents WHERE collection = ?1 AND doc_id = ?2",
                (collection, id),
                |row| row.get(0),
            )
            .optional()?;

        body.as_deref().map(parse_body).transpose()
    }

    fn read_all(&self, collection: &str) -> Result<Vec<(String, Document)>, StoreError> {
        let db = self.lock()?;
        let mut stmt = db.prepare(
            "SELECT doc_id, body FROM documents
             WHERE collection = ?1
             ORDER BY seq ASC",
        )?;

        let rows = stmt
            .query_map([collection], |row| {
                Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?))
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        rows.into_iter()
            .map(|(id, body)| Ok((id, parse_body(&body)?)))
            .collect()
    }

    fn update(&self, collection: &str, id: &str, partial: Document) -> Result<(), StoreError> {
        let mut db = self.lock()?;
        let tx = db.transaction()?;

        let body: Option<String> = tx
            .query_row(
                "SELECT body FROM documents WHERE collection = ?1 AND doc_id = ?2",
                (collection, id),
                |row| row.get(0),
            )
            .optional()?;

        let Some(body) = body else {
            return Err(StoreError::not_found(collection, id));
        };

        let mut doc = parse_body(&body)?;
        merge_fields(&mut doc, partial);

        tx.execute(
            "UPDATE documents SET body = ?3, updated_at = datetime('now')
             WHERE collection = ?1 AND doc_id = ?2",
            (collection, id, serde_json::to_string(&doc)?),
        )?;
        tx.commit()?;

        Ok(())
    }

    fn delete(&self, collection: &str, id: &str) -> Result<(), StoreError> {
        let db = self.lock()?;
        db.execute(
            "DELETE FROM documents WHERE collection = ?1 AND doc_id = ?2",
            (collection, id),
        )?;

        Ok(())
    }

    fn commit(&self, batch: WriteBatch) -> Result<(), StoreError> {
        let mut db = self.lock()?;
        let tx = db.transaction()?;

        for write in batch.into_writes() {
            let body = serde_json::to_string(&write.doc)?;
            tx.execute(UPSERT_SQL, (&write.collection, &write.id, body))?;
        }

        tx.commit()?;
        Ok(())
    }

    fn is_empty(&self, collection: &str) -> Result<bool, StoreError> {
        let db = self.lock()?;
        let count: i64 = db.query_row(
            "SELECT COUNT(*) FROM documents WHERE collection = ?1",
            [collection],
            |row| row.get(0),
        )?;

        Ok(count == 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::to_document;
    use serde_json::json;

    #[test]
    fn test_file_database_survives_reopen() {
        let path = std::env::temp_dir().join(format!("unilink-test-{}.db", new_document_id()));
        let path_str = path.to_string_lossy().to_string();

        let id = {
            let store = SqliteDocumentStore::open(&path_str).unwrap();
            store
                .create("clubs", to_document(&json!({ "name": "Robotics" })).unwrap())
                .unwrap()
        };

        let reopened = SqliteDocumentStore::open(&path_str).unwrap();
        let doc = reopened.get("clubs", &id).unwrap().unwrap();
        assert_eq!(doc["name"], "Robotics");

        drop(reopened);
        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn test_corrupt_body_is_a_serialization_error() {
        let store = SqliteDocumentStore::in_memory().unwrap();
        {
            let db = store.lock().unwrap();
            db.execute(
                "INSERT INTO documents (collection, doc_id, body, created_at, updated_at)
                 VALUES ('clubs', 'bad', 'not json', datetime('now'), datetime('now'))",
                [],
            )
            .unwrap();
        }

        assert!(matches!(
            store.get("clubs", "bad"),
            Err(StoreError::Serialization(_))
        ));
    }
}
