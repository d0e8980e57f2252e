//! Persistence layer for the mytasks application.
//!
//! Built on SQLite. The application only needs a string-keyed blob store, so
//! the schema is a single key-value table.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use mytasks::db::blob_store::{BlobStore, SqliteBlobStore};
//!
//! let mut store = SqliteBlobStore::new()?;
//! store.set("greeting", "hello")?;
//! assert_eq!(store.get("greeting")?.as_deref(), Some("hello"));
//! store.remove("greeting")?;
//! # Ok::<(), mytasks::libs::error::TaskError>(())
//! ```

/// Connection management for the application database file.
pub mod db;

/// String-keyed get/set/remove storage.
pub mod blob_store;
