//! Configuration type definitions

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::services::DEFAULT_SCAN_LIMIT;
use crate::error::LiveResult;

use super::loader::{self, ConfigWarning};

/// HTML retrieval settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchConfig {
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_user_agent() -> String {
    format!("temme-live/{}", env!("CARGO_PKG_VERSION"))
}

/// Logging settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogConfig {
    /// `error`, `warn`, `info`, `debug` or `trace`
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LiveConfig {
    /// Language id of selector documents
    #[serde(default = "default_language_id")]
    pub language_id: String,

    /// Appended to the selector file name to form the output file name
    #[serde(default = "default_output_suffix")]
    pub output_suffix: String,

    /// Cap on regex matches per link scan
    #[serde(default = "default_link_scan_limit")]
    pub link_scan_limit: usize,

    #[serde(default)]
    pub fetch: FetchConfig,

    #[serde(default)]
    pub log: LogConfig,
}

impl Default for LiveConfig {
    fn default() -> Self {
        Self {
            language_id: default_language_id(),
            output_suffix: default_output_suffix(),
            link_scan_limit: default_link_scan_limit(),
            fetch: FetchConfig::default(),
            log: LogConfig::default(),
        }
    }
}

fn default_language_id() -> String {
    "temme".to_string()
}

fn default_output_suffix() -> String {
    ".json".to_string()
}

fn default_link_scan_limit() -> usize {
    DEFAULT_SCAN_LIMIT
}

impl LiveConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> LiveResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> LiveResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load from project config, user config, or defaults
    pub fn load_or_default(project_root: Option<&Path>) -> Self {
        loader::load_or_default(project_root)
    }

    /// Apply environment variable overrides (TEMME_LIVE_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }

    pub fn fetch_timeout(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.fetch.timeout_secs)
    }
}
