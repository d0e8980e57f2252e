//! The cached task list.
//!
//! The whole list is stored as one JSON document together with the time it
//! was written:
//!
//! ```json
//! { "tasks": [ { "id": 1, "title": "...", "completed": false, ... } ],
//!   "timestamp": "2024-05-01T12:00:00Z" }
//! ```

use super::error::Result;
use super::task::Task;
use crate::db::blob_store::BlobStore;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Key under which the snapshot is stored.
pub const STORAGE_KEY: &str = "tasks_data";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub tasks: Vec<Task>,
    pub timestamp: DateTime<Utc>,
}

pub struct TaskCache<S: BlobStore> {
    store: S,
}

impl<S: BlobStore> TaskCache<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Reads the stored snapshot. A record that no longer parses is treated as absent.
    pub fn load(&self) -> Result<Option<Snapshot>> {
        let Some(raw) = self.store.get(STORAGE_KEY)? else {
            return Ok(None);
        };
        match serde_json::from_str::<Snapshot>(&raw) {
            Ok(snapshot) => Ok(Some(snapshot)),
            Err(e) => {
                tracing::warn!(key = STORAGE_KEY, error = %e, "discarding unreadable task cache");
                Ok(None)
            }
        }
    }

    /// Writes the whole list and returns the timestamp stored with it.
    pub fn save(&mut self, tasks: &[Task]) -> Result<DateTime<Utc>> {
        let timestamp = Utc::now();
        let snapshot = SnapshotRef { tasks, timestamp };
        let raw = serde_json::to_string(&snapshot)?;
        self.store.set(STORAGE_KEY, &raw)?;
        tracing::debug!(count = tasks.len(), "task cache written");
        Ok(timestamp)
    }

    /// Removes the stored snapshot. Clearing an empty store is not an error.
    pub fn clear(&mut self) -> Result<()> {
        self.store.remove(STORAGE_KEY)
    }
}

#[derive(Serialize)]
struct SnapshotRef<'a> {
    tasks: &'a [Task],
    timestamp: DateTime<Utc>,
}
