//! Client configuration.
//!
//! Use the builder methods to customize, or [`ClientConfig::from_env`] to
//! apply environment overrides on top of the defaults.
//!
//! # Example
//!
//! ```ignore
//! use inbox_copilot::config::ClientConfig;
//!
//! let config = ClientConfig::default()
//!     .with_api_base_url("https://copilot.example.com/api/v1/")
//!     .with_tick_rate_ms(50);
//! assert_eq!(config.api_base_url, "https://copilot.example.com/api/v1");
//! ```

use std::path::PathBuf;
use std::time::Duration;

use crate::auth::session::{DATA_DIR, SESSION_FILE};

/// Default API base URL (local development server).
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000/api/v1";

/// Environment variable overriding the API base URL.
pub const API_URL_ENV: &str = "COPILOT_API_URL";

/// Environment variable holding the log filter directive.
pub const LOG_ENV: &str = "COPILOT_LOG";

const LOG_DIR: &str = "logs";
const DEFAULT_TICK_RATE_MS: u64 = 16;

#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// Base URL all endpoint paths are joined to (no trailing slash)
    pub api_base_url: String,
    /// Location of the persisted session
    pub session_path: PathBuf,
    /// Directory receiving `copilot.log`
    pub log_dir: PathBuf,
    /// UI tick interval in milliseconds
    pub tick_rate_ms: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        let data_dir = dirs::home_dir()
            .unwrap_or_else(std::env::temp_dir)
            .join(DATA_DIR);
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            session_path: data_dir.join(SESSION_FILE),
            log_dir: data_dir.join(LOG_DIR),
            tick_rate_ms: DEFAULT_TICK_RATE_MS,
        }
    }
}

impl ClientConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults with environment overrides applied.
    pub fn from_env() -> Self {
        let config = Self::default();
        match std::env::var(API_URL_ENV) {
            Ok(url) if !url.trim().is_empty() => config.with_api_base_url(url.trim()),
            _ => config,
        }
    }

    /// Set the API base URL. Trailing slashes are dropped.
    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = normalize_base_url(&url.into());
        self
    }

    pub fn with_session_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.session_path = path.into();
        self
    }

    pub fn with_log_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.log_dir = dir.into();
        self
    }

    /// Set the UI tick interval. Zero is raised to one millisecond.
    pub fn with_tick_rate_ms(mut self, ms: u64) -> Self {
        self.tick_rate_ms = ms.max(1);
        self
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }
}

fn normalize_base_url(url: &str) -> String {
    url.trim_end_matches('/').to_string()
}
