use super::TaskSource;
use crate::libs::error::{Result, TaskError};
use crate::libs::task::RemoteTask;
use reqwest::{header::USER_AGENT, Client};

include!(concat!(env!("OUT_DIR"), "/app_metadata.rs"));

/// Default remote resource.
pub const API_URL: &str = "https://jsonplaceholder.typicode.com/todos";

/// Client for the JSONPlaceholder `/todos` resource.
#[derive(Debug, Clone)]
pub struct PlaceholderApi {
    client: Client,
    url: String,
}

impl PlaceholderApi {
    pub fn new(url: &str) -> Self {
        Self::with_client(url, Client::new())
    }

    /// Uses a preconfigured client, e.g. one with custom proxy or timeout settings.
    pub fn with_client(url: &str, client: Client) -> Self {
        Self {
            client,
            url: url.to_string(),
        }
    }
}

impl Default for PlaceholderApi {
    fn default() -> Self {
        Self::new(API_URL)
    }
}

impl TaskSource for PlaceholderApi {
    async fn fetch(&self) -> Result<Vec<RemoteTask>> {
        tracing::debug!(url = %self.url, "fetching remote tasks");
        let res = self
            .client
            .get(&self.url)
            .header(USER_AGENT, format!("{}/{}", APP_METADATA_NAME, APP_METADATA_VERSION))
            .send()
            .await?;

        let status = res.status();
        if !status.is_success() {
            return Err(TaskError::Fetch(format!("{} returned {}", self.url, status)));
        }

        let tasks = res.json::<Vec<RemoteTask>>().await?;
        tracing::debug!(count = tasks.len(), "remote tasks received");
        Ok(tasks)
    }
}
