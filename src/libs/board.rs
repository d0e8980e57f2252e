//! In-memory task list backed by the cache and the remote source.
//!
//! Every mutation is applied to the list first and then the entire list is
//! written back to the cache. A fetch replaces the list wholesale with the
//! first `limit` remote records.

use super::cache::TaskCache;
use super::error::{Result, TaskError};
use super::task::{next_id, validate_title, Task, TaskCounts, TaskFilter};
use crate::api::TaskSource;
use crate::db::blob_store::BlobStore;
use chrono::{DateTime, Utc};

/// Number of remote tasks kept after a fetch.
pub const DEFAULT_FETCH_LIMIT: usize = 20;

/// Where the list came from on start-up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Startup {
    /// Loaded from the cache.
    Restored,
    /// Nothing was cached; the remote list was fetched and stored.
    Fetched,
    /// Nothing was cached and the fetch failed. The board starts empty and
    /// local changes still work. Holds the fetch error text.
    Unavailable(String),
}

/// The task list a command works on.
///
/// Generic over the store and the source so tests can swap in an in-memory
/// store or a scripted source.
pub struct TaskBoard<S: BlobStore, R: TaskSource> {
    tasks: Vec<Task>,
    last_updated: Option<DateTime<Utc>>,
    cache: TaskCache<S>,
    source: R,
    limit: usize,
}

impl<S: BlobStore, R: TaskSource> TaskBoard<S, R> {
    /// Creates an empty board. Call [`TaskBoard::initialize`] before use.
    pub fn new(store: S, source: R) -> Self {
        Self {
            tasks: Vec::new(),
            last_updated: None,
            cache: TaskCache::new(store),
            source,
            limit: DEFAULT_FETCH_LIMIT,
        }
    }

    /// Sets how many remote tasks a fetch keeps.
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Tasks in display order, newest local task first.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Time of the last fetch, or of the restored snapshot.
    pub fn last_updated(&self) -> Option<DateTime<Utc>> {
        self.last_updated
    }

    /// Restores the cached list, falling back to a remote fetch when nothing is stored.
    ///
    /// A failed fallback fetch does not abort start-up: the board stays empty
    /// and [`Startup::Unavailable`] carries the reason. Only a failure to write
    /// the fetched list is returned as an error.
    pub async fn initialize(&mut self) -> Result<Startup> {
        let restored = match self.cache.load() {
            Ok(snapshot) => snapshot,
            Err(e) => {
                tracing::error!(error = %e, "failed to read task cache");
                None
            }
        };

        if let Some(snapshot) = restored {
            tracing::debug!(count = snapshot.tasks.len(), "restored tasks from cache");
            self.tasks = snapshot.tasks;
            self.last_updated = Some(snapshot.timestamp);
            return Ok(Startup::Restored);
        }

        match self.fetch_tasks().await {
            Ok(_) => Ok(Startup::Fetched),
            Err(e @ TaskError::Fetch(_)) => {
                tracing::warn!(error = %e, "starting with an empty task list");
                Ok(Startup::Unavailable(e.to_string()))
            }
            Err(e) => Err(e),
        }
    }

    /// Replaces the list with the first `limit` remote tasks and caches it.
    pub async fn fetch_tasks(&mut self) -> Result<usize> {
        let remote = self.source.fetch().await?;
        let now = Utc::now();
        let tasks: Vec<Task> = remote.into_iter().take(self.limit).map(|t| t.into_task(now)).collect();
        let count = tasks.len();

        self.tasks = tasks;
        self.last_updated = Some(now);
        tracing::info!(count, "task list replaced from remote");

        self.persist()?;
        Ok(count)
    }

    /// Prepends a new local task.
    pub fn add_task(&mut self, title: &str) -> Result<Task> {
        let title = validate_title(title)?;
        let task = Task::local(next_id(&self.tasks)?, title);
        self.tasks.insert(0, task.clone());
        tracing::info!(id = task.id, "task added");

        self.persist()?;
        Ok(task)
    }

    /// Flips the completion flag of task `id` and returns its new state.
    pub fn toggle_task(&mut self, id: u32) -> Result<Task> {
        let task = self.tasks.iter_mut().find(|t| t.id == id).ok_or(TaskError::TaskNotFound(id))?;
        task.completed = !task.completed;
        let task = task.clone();
        tracing::info!(id, completed = task.completed, "task toggled");

        self.persist()?;
        Ok(task)
    }

    /// Deletes task `id` and returns it.
    ///
    /// # Errors
    ///
    /// [`TaskError::TaskNotFound`] for an unknown id, or a storage error if
    /// the shortened list cannot be written.
    pub fn remove_task(&mut self, id: u32) -> Result<Task> {
        let index = self.tasks.iter().position(|t| t.id == id).ok_or(TaskError::TaskNotFound(id))?;
        let task = self.tasks.remove(index);
        tracing::info!(id, "task removed");

        self.persist()?;
        Ok(task)
    }

    /// Looks up a task by id.
    pub fn get(&self, id: u32) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Drops the stored record and empties the list.
    pub fn clear(&mut self) -> Result<()> {
        self.cache.clear()?;
        self.tasks.clear();
        self.last_updated = None;
        tracing::info!("local task data cleared");
        Ok(())
    }

    /// Tasks matching `filter`, in display order.
    pub fn filtered(&self, filter: TaskFilter) -> Vec<&Task> {
        self.tasks.iter().filter(|t| filter.matches(t)).collect()
    }

    /// Per-filter totals over the whole list.
    pub fn counts(&self) -> TaskCounts {
        TaskCounts::of(&self.tasks)
    }

    fn persist(&mut self) -> Result<()> {
        self.cache.save(&self.tasks)?;
        Ok(())
    }
}
