//! Display implementation for application messages.
//!
//! All user-facing text is defined here, in one match over [`Message`], so
//! commands never format strings inline.

use super::types::Message;
use crate::libs::task::MAX_TITLE_LEN;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === TASK MESSAGES ===
            Message::TaskAddedWithId(id) => format!("Task #{} added successfully!", id),
            Message::TaskCompleted(id) => format!("Task #{} marked as completed", id),
            Message::TaskReopened(id) => format!("Task #{} marked as pending", id),
            Message::TaskRemoved(id) => format!("Task #{} removed", id),
            Message::ConfirmRemoveTask(title) => format!("Do you really want to remove \"{}\"?", title),
            Message::TasksHeader => "My Tasks".to_string(),
            Message::LastSynced(at) => format!("Last synchronized: {}", at),
            Message::FilterCounts { all, pending, completed } => {
                format!("All ({})  Pending ({})  Completed ({})", all, pending, completed)
            }
            Message::NoTasksFound => "No tasks found".to_string(),
            Message::NoCompletedTasks => "No completed tasks".to_string(),
            Message::NoPendingTasks => "No pending tasks".to_string(),
            Message::LocalBadge => "LOCAL".to_string(),

            // === SYNC MESSAGES ===
            Message::LoadingTasks => "Loading tasks...".to_string(),
            Message::TasksSynced(count) => format!("Synchronized {} task(s) from the API", count),
            Message::TasksRestored(count) => format!("Loaded {} task(s) from local storage", count),
            Message::TasksUnavailable(error) => format!("{}. Starting with an empty list", error),

            // === STORAGE MESSAGES ===
            Message::ConfirmClearStorage => "This will remove all tasks saved locally. Continue?".to_string(),
            Message::StorageCleared => "Local data removed".to_string(),
            Message::StorageClearFailed(error) => format!("Could not clear local data: {}", error),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigDeleted => "Configuration removed".to_string(),
            Message::ConfigNotFound => "No configuration file to remove".to_string(),
            Message::ConfigModuleSource => "Task source settings".to_string(),
            Message::InvalidEnvLimit(value) => format!("Ignoring MYTASKS_LIMIT={}: not a positive number", value),
            Message::InvalidConfigLimit(value) => {
                format!("Ignoring limit {} in config.json: must be at least 1", value)
            }

            // === PROMPTS ===
            Message::PromptTaskTitle => format!("Enter the task title (max {} characters)", MAX_TITLE_LEN),
            Message::PromptApiUrl => "Enter the tasks API URL".to_string(),
            Message::PromptFetchLimit => "Enter how many tasks to keep after a sync".to_string(),

            // === GENERAL MESSAGES ===
            Message::OperationCancelled => "Operation cancelled".to_string(),
            Message::CommandFailed(error) => error.to_string(),
        };

        write!(f, "{}", text)
    }
}
