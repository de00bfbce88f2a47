//! Client configuration
//!
//! Defaults match the local mock API. Values can be overridden by an optional
//! `podcastr.toml` and by `PODCASTR_*` environment variables
//! (`PODCASTR_BASE_URL`, `PODCASTR_HOME_LIMIT`, ...).

use crate::error::{ClientError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Default configuration file, looked up in the working directory
pub const CONFIG_FILE: &str = "podcastr.toml";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ClientConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,

    /// Episodes fetched for the home page
    #[serde(default = "default_home_limit")]
    pub home_limit: u32,

    /// How many of those are highlighted as latest releases
    #[serde(default = "default_latest_count")]
    pub latest_count: usize,
}

impl ClientConfig {
    /// Config pointing at another server, other values default
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Load configuration from `podcastr.toml` (if present) and environment
    pub fn load() -> Result<Self> {
        let path = PathBuf::from(CONFIG_FILE);
        let file = path.exists().then_some(path);
        Self::build(file.as_deref())
    }

    /// Load configuration from a specific file, then the environment
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ClientError::Config(format!(
                "Config file not found: {}",
                path.display()
            )));
        }
        Self::build(Some(path))
    }

    fn build(file: Option<&Path>) -> Result<Self> {
        let mut settings = config::Config::builder();

        if let Some(path) = file {
            debug!(path = %path.display(), "Loading client config file");
            settings = settings.add_source(config::File::from(path));
        }

        // Override with environment variables (prefixed with PODCASTR_)
        settings = settings.add_source(
            config::Environment::with_prefix("PODCASTR")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config: Self = settings.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        let url = Url::parse(&self.base_url)?;
        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(ClientError::InvalidUrl(
                "URL must start with http:// or https://".into(),
            ));
        }

        if self.timeout_secs == 0 || self.connect_timeout_secs == 0 {
            return Err(ClientError::Config("Timeouts must be at least 1 second".into()));
        }

        if self.home_limit == 0 {
            return Err(ClientError::Config("home_limit must be at least 1".into()));
        }

        if self.latest_count == 0 {
            return Err(ClientError::Config("latest_count must be at least 1".into()));
        }

        if self.latest_count > self.home_limit as usize {
            return Err(ClientError::Config(format!(
                "latest_count ({}) cannot exceed home_limit ({})",
                self.latest_count, self.home_limit
            )));
        }

        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            connect_timeout_secs: default_connect_timeout_secs(),
            home_limit: default_home_limit(),
            latest_count: default_latest_count(),
        }
    }
}

// Default value functions
fn default_base_url() -> String {
    "http://localhost:3333/".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_connect_timeout_secs() -> u64 {
    10
}

fn default_home_limit() -> u32 {
    12
}

fn default_latest_count() -> usize {
    2
}
