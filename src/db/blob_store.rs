use super::db::Db;
use crate::libs::error::Result;
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;

const SCHEMA_KV_STORE: &str = "CREATE TABLE IF NOT EXISTS kv_store (
    key TEXT NOT NULL PRIMARY KEY,
    value TEXT NOT NULL,
    updated_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
);";
const SELECT_VALUE: &str = "SELECT value FROM kv_store WHERE key = ?";
const UPSERT_VALUE: &str = "INSERT INTO kv_store (key, value, updated_at) VALUES (?, ?, CURRENT_TIMESTAMP)
    ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at";
const DELETE_VALUE: &str = "DELETE FROM kv_store WHERE key = ?";

/// Opaque string-keyed storage.
pub trait BlobStore {
    /// Returns the value stored under `key`, or `None` if absent.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Deletes `key`. Removing a missing key is not an error.
    fn remove(&mut self, key: &str) -> Result<()>;
}

pub struct SqliteBlobStore {
    pub conn: Connection,
}

impl SqliteBlobStore {
    pub fn new() -> Result<Self> {
        Self::from_db(Db::new()?)
    }

    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_db(Db::open(path)?)
    }

    pub fn in_memory() -> Result<Self> {
        Self::from_db(Db::in_memory()?)
    }

    fn from_db(db: Db) -> Result<Self> {
        db.conn.execute(SCHEMA_KV_STORE, [])?;
        Ok(SqliteBlobStore { conn: db.conn })
    }
}

impl BlobStore for SqliteBlobStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let value = self
            .conn
            .query_row(SELECT_VALUE, params![key], |row| row.get::<_, String>(0))
            .optional()?;
        Ok(value)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.conn.execute(UPSERT_VALUE, params![key, value])?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.conn.execute(DELETE_VALUE, params![key])?;
        Ok(())
    }
}
