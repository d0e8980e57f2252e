//! Remote task source.
//!
//! The application reads one fixed, read-only resource: a JSON array of
//! task-like records. The response shape is trusted as-is.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use mytasks::api::{placeholder::PlaceholderApi, TaskSource};
//!
//! # async fn run() -> mytasks::libs::error::Result<()> {
//! let api = PlaceholderApi::new("https://jsonplaceholder.typicode.com/todos");
//! let tasks = api.fetch().await?;
//! # Ok(())
//! # }
//! ```

use crate::libs::error::Result;
use crate::libs::task::RemoteTask;

pub mod placeholder;

pub use placeholder::PlaceholderApi;

/// A read-only source of task records.
#[allow(async_fn_in_trait)]
pub trait TaskSource {
    /// Retrieves the full remote list, in server order.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The network connection fails
    /// - The server answers with a non-success status
    /// - The body is not a JSON array of task records
    async fn fetch(&self) -> Result<Vec<RemoteTask>>;
}
