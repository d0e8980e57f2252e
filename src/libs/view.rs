//! Terminal rendering of the task list.

use super::messages::Message;
use super::task::{Task, TaskFilter};
use chrono::{DateTime, Local, Utc};
use prettytable::{row, Table};

/// Table and notice helpers used by the `list` command.
pub struct View {}

impl View {
    /// Builds the task table.
    ///
    /// Columns are id, a check mark for completed tasks, title, a `LOCAL`
    /// badge for tasks created on this device, and the creation time in
    /// local time.
    pub fn tasks_table(tasks: &[&Task]) -> Table {
        let mut table = Table::new();

        table.add_row(row!["ID", "DONE", "TITLE", "ORIGIN", "CREATED"]);
        for task in tasks {
            let id = format!("#{}", task.id);
            let done = if task.completed { "✓" } else { "" };
            let origin = if task.is_local { Message::LocalBadge.to_string() } else { String::new() };
            let created = Self::local_time(&task.created_at);
            table.add_row(row![id, done, task.title, origin, created]);
        }

        table
    }

    /// Prints the task table to stdout.
    pub fn tasks(tasks: &[&Task]) {
        Self::tasks_table(tasks).printstd();
    }

    /// Notice shown when `filter` matches nothing.
    pub fn empty_notice(filter: TaskFilter) -> Message {
        match filter {
            TaskFilter::All => Message::NoTasksFound,
            TaskFilter::Completed => Message::NoCompletedTasks,
            TaskFilter::Pending => Message::NoPendingTasks,
        }
    }

    /// Formats a stored UTC timestamp in the user's local time zone.
    pub fn local_time(at: &DateTime<Utc>) -> String {
        at.with_timezone(&Local).format("%Y-%m-%d %H:%M:%S").to_string()
    }
}
