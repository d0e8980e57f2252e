//! Core library modules for the mytasks application.
//!
//! ## Features
//!
//! - **Core Infrastructure**: Configuration, data storage paths, logging, messaging
//! - **Task Model**: Task records, filters, title validation and id allocation
//! - **Application State**: The task board with fetch-replace and local mutations
//! - **Persistence**: The JSON snapshot cached in the blob store
//! - **User Interface**: Console rendering of task tables
//!
//! ## Usage
//!
//! ```rust,no_run
//! use mytasks::libs::task::{Task, TaskFilter};
//!
//! let task = Task::local(1, "Buy milk".to_string());
//! assert!(TaskFilter::Pending.matches(&task));
//! ```

pub mod board;
pub mod cache;
pub mod config;
pub mod data_storage;
pub mod error;
pub mod logging;
pub mod messages;
pub mod task;
pub mod view;
