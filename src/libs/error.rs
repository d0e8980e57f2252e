//! Error types for task operations.

use super::task::MAX_TITLE_LEN;

/// Failures raised by the task board, the cache and the remote source.
#[derive(Debug, thiserror::Error)]
pub enum TaskError {
    /// The title was empty after trimming.
    #[error("Enter a title for the task")]
    EmptyTitle,

    /// The title exceeds the maximum length.
    #[error("Task title is limited to {max} characters (got {0})", max = MAX_TITLE_LEN)]
    TitleTooLong(usize),

    /// No task with this id in the current list.
    #[error("Task #{0} not found")]
    TaskNotFound(u32),

    /// The list already holds the largest representable id.
    #[error("No task id left to assign; remove the task with the highest id first")]
    IdsExhausted,

    /// Network or HTTP status failure while loading the remote list.
    #[error("Could not load tasks from the API: {0}")]
    Fetch(String),

    /// Blob store read, write or remove failure.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Stored or fetched JSON could not be (de)serialized.
    #[error("Invalid task data: {0}")]
    Decode(#[from] serde_json::Error),
}

impl From<rusqlite::Error> for TaskError {
    fn from(err: rusqlite::Error) -> Self {
        Self::Storage(err.to_string())
    }
}

impl From<reqwest::Error> for TaskError {
    fn from(err: reqwest::Error) -> Self {
        Self::Fetch(err.to_string())
    }
}

/// Convenience result type.
pub type Result<T> = std::result::Result<T, TaskError>;
