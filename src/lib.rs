//! # mytasks
//!
//! A command-line to-do list that syncs sample tasks from a placeholder REST
//! API, caches them on-device and lets the user edit them locally.
//!
//! ## Features
//!
//! - **Sync**: Fetch the first tasks from the remote list and replace the local copy
//! - **Local Editing**: Add, toggle and remove tasks, persisted after every change
//! - **Filtering**: List all, pending or completed tasks
//! - **Offline Cache**: One JSON record in a SQLite-backed key-value store
//!
//! ## Usage
//!
//! ```rust,no_run
//! use mytasks::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod api;
pub mod commands;
pub mod db;
pub mod libs;
