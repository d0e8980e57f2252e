use super::error::{Result, TaskError};
use chrono::{DateTime, Utc};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Maximum number of characters in a task title.
pub const MAX_TITLE_LEN: usize = 100;

/// Owner tag given to tasks created on this device.
pub const LOCAL_USER_ID: u32 = 1;

/// A to-do item, either fetched from the API or created locally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: u32,
    pub title: String,
    pub completed: bool,
    pub user_id: u32,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub is_local: bool,
}

impl Task {
    /// Builds a pending task created on this device.
    pub fn local(id: u32, title: String) -> Self {
        Task {
            id,
            title,
            completed: false,
            user_id: LOCAL_USER_ID,
            created_at: Utc::now(),
            is_local: true,
        }
    }
}

/// Record shape returned by the remote API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteTask {
    pub user_id: u32,
    pub id: u32,
    pub title: String,
    pub completed: bool,
}

impl RemoteTask {
    pub fn into_task(self, created_at: DateTime<Utc>) -> Task {
        Task {
            id: self.id,
            title: self.title,
            completed: self.completed,
            user_id: self.user_id,
            created_at,
            is_local: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum TaskFilter {
    #[default]
    All,
    Pending,
    Completed,
}

impl TaskFilter {
    pub fn matches(&self, task: &Task) -> bool {
        match self {
            TaskFilter::All => true,
            TaskFilter::Pending => !task.completed,
            TaskFilter::Completed => task.completed,
        }
    }
}

/// Number of tasks per filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TaskCounts {
    pub all: usize,
    pub pending: usize,
    pub completed: usize,
}

impl TaskCounts {
    pub fn of(tasks: &[Task]) -> Self {
        let completed = tasks.iter().filter(|t| t.completed).count();
        Self {
            all: tasks.len(),
            pending: tasks.len() - completed,
            completed,
        }
    }
}

/// Next free identifier: max id plus one, or 1 for an empty list.
///
/// # Errors
///
/// Returns [`TaskError::IdsExhausted`] when the list already holds `u32::MAX`.
pub fn next_id(tasks: &[Task]) -> Result<u32> {
    tasks
        .iter()
        .map(|t| t.id)
        .max()
        .unwrap_or(0)
        .checked_add(1)
        .ok_or(TaskError::IdsExhausted)
}

/// Trims `title` and checks it against the length limit.
pub fn validate_title(title: &str) -> Result<String> {
    let title = title.trim();
    if title.is_empty() {
        return Err(TaskError::EmptyTitle);
    }
    let len = title.chars().count();
    if len > MAX_TITLE_LEN {
        return Err(TaskError::TitleTooLong(len));
    }
    Ok(title.to_string())
}
