use crate::libs::data_storage::DataStorage;
use crate::libs::error::{Result, TaskError};
use rusqlite::Connection;
use std::path::Path;

/// SQLite file inside the application data directory.
pub const DB_FILE_NAME: &str = "mytasks.db";

/// Owns the SQLite connection shared by the stores.
pub struct Db {
    pub conn: Connection,
}

impl Db {
    /// Opens the database in the application data directory.
    pub fn new() -> Result<Db> {
        let db_file_path = DataStorage::new().get_path(DB_FILE_NAME).map_err(|e| TaskError::Storage(e.to_string()))?;
        Self::open(db_file_path)
    }

    /// Opens (or creates) the database at `path`.
    pub fn open(path: impl AsRef<Path>) -> Result<Db> {
        let conn = Connection::open(path)?;
        Ok(Db { conn })
    }

    /// Opens a private in-memory database.
    pub fn in_memory() -> Result<Db> {
        let conn = Connection::open_in_memory()?;
        Ok(Db { conn })
    }
}
