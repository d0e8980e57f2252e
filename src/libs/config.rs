//! Configuration management for the mytasks application.
//!
//! Settings live in `config.json` inside the platform application data
//! directory:
//! - **Windows**: `%LOCALAPPDATA%\mytasks\config.json`
//! - **macOS**: `~/Library/Application Support/mytasks/config.json`
//! - **Linux**: `~/.local/share/mytasks/config.json`
//!
//! A missing file is not an error; defaults are used. The environment
//! variables `MYTASKS_API_URL` and `MYTASKS_LIMIT` (also read from `.env`)
//! take precedence over the file.
//!
//! ## Usage Examples
//!
//! ```rust,no_run
//! use mytasks::libs::config::Config;
//!
//! let source = Config::read()?.resolved_source();
//! println!("Fetching from {}", source.api_url);
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use crate::api::placeholder::API_URL;
use crate::libs::board::DEFAULT_FETCH_LIMIT;
use crate::libs::messages::Message;
use crate::{msg_print, msg_warning};
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::Path;

/// Configuration file name used for storing application settings.
pub const CONFIG_FILE_NAME: &str = "config.json";

pub const ENV_API_URL: &str = "MYTASKS_API_URL";
pub const ENV_LIMIT: &str = "MYTASKS_LIMIT";

/// Remote task source settings.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct SourceConfig {
    /// URL answering a GET with a JSON array of tasks.
    pub api_url: String,

    /// Number of remote tasks kept after each sync.
    pub limit: usize,
}

impl Default for SourceConfig {
    fn default() -> Self {
        SourceConfig {
            api_url: API_URL.to_string(),
            limit: DEFAULT_FETCH_LIMIT,
        }
    }
}

impl SourceConfig {
    /// Replaces a zero `limit` read from the file with the default.
    ///
    /// A zero limit would make every sync store an empty list.
    pub fn validated(mut self) -> Self {
        if self.limit == 0 {
            msg_warning!(Message::InvalidConfigLimit(self.limit));
            self.limit = DEFAULT_FETCH_LIMIT;
        }
        self
    }

    /// Applies overrides, typically taken from the environment.
    ///
    /// Blank URLs are ignored. A limit that is not a positive integer is
    /// reported and ignored.
    pub fn with_overrides(mut self, api_url: Option<String>, limit: Option<String>) -> Self {
        if let Some(url) = api_url.filter(|u| !u.trim().is_empty()) {
            self.api_url = url.trim().to_string();
        }
        if let Some(raw) = limit {
            match raw.trim().parse::<usize>() {
                Ok(limit) if limit > 0 => self.limit = limit,
                _ => msg_warning!(Message::InvalidEnvLimit(raw)),
            }
        }
        self
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<SourceConfig>,
}

impl Config {
    /// Reads the configuration from the application data directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        Self::read_from(&config_file_path)
    }

    pub fn read_from(path: &Path) -> Result<Config> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        self.save_to(&config_file_path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let config_file = File::create(path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Removes the configuration file. Returns `false` if there was none.
    pub fn delete() -> Result<bool> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if !config_file_path.exists() {
            return Ok(false);
        }
        fs::remove_file(config_file_path)?;
        Ok(true)
    }

    /// Source settings after environment overrides.
    pub fn resolved_source(&self) -> SourceConfig {
        self.source
            .clone()
            .unwrap_or_default()
            .validated()
            .with_overrides(std::env::var(ENV_API_URL).ok(), std::env::var(ENV_LIMIT).ok())
    }

    /// Runs the interactive setup, pre-filled with the current values.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();
        let default = config.source.clone().unwrap_or_default();

        msg_print!(Message::ConfigModuleSource);
        config.source = Some(SourceConfig {
            api_url: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptApiUrl.to_string())
                .default(default.api_url)
                .interact_text()?,
            limit: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptFetchLimit.to_string())
                .default(default.limit)
                .validate_with(|limit: &usize| if *limit > 0 { Ok(()) } else { Err("must be at least 1") })
                .interact_text()?,
        });

        Ok(config)
    }
}
