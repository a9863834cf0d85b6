//! Client configuration.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Backend used when nothing else is configured.
pub const DEFAULT_API_URL: &str = "https://santeria-backend.onrender.com";

/// Environment variable overriding the backend URL.
pub const API_URL_ENV: &str = "SANTERIA_API_URL";

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Cannot read config file {path}: {error}")]
    Io { path: String, error: String },

    #[error("Invalid config file: {0}")]
    Parse(String),

    #[error("Invalid API URL '{0}': expected http:// or https://")]
    InvalidUrl(String),

    #[error("{0} must be greater than zero")]
    ZeroTimeout(&'static str),
}

/// How to reach the backend and where to keep the session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Base URL of the REST backend, without trailing slash.
    pub base_url: String,

    /// Whole-request timeout.
    #[serde(with = "humantime_serde")]
    pub timeout: Duration,

    #[serde(with = "humantime_serde")]
    pub connect_timeout: Duration,

    /// JSON file holding the token and user between runs.
    pub session_file: PathBuf,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            // The hosted backend sleeps when idle and takes a while to wake.
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
            session_file: default_session_path(),
        }
    }
}

impl ClientConfig {
    /// Parse a TOML document.
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.display().to_string(),
            error: e.to_string(),
        })?;
        Self::from_toml(&text)
    }

    /// Apply `SANTERIA_API_URL` when set.
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(url) = std::env::var(API_URL_ENV) {
            if !url.trim().is_empty() {
                self.base_url = url;
            }
        }
        self
    }

    /// Validate and normalise the configuration.
    pub fn validate(&mut self) -> Result<(), ConfigError> {
        let url = self.base_url.trim().trim_end_matches('/').to_string();
        let has_host = url
            .strip_prefix("https://")
            .or_else(|| url.strip_prefix("http://"))
            .is_some_and(|rest| !rest.is_empty());
        if !has_host {
            return Err(ConfigError::InvalidUrl(self.base_url.clone()));
        }
        self.base_url = url;

        if self.timeout.is_zero() {
            return Err(ConfigError::ZeroTimeout("timeout"));
        }
        if self.connect_timeout.is_zero() {
            return Err(ConfigError::ZeroTimeout("connect_timeout"));
        }
        Ok(())
    }
}

/// `~/.santeria/session.json`, or a file in the working directory when no
/// home directory is known.
pub fn default_session_path() -> PathBuf {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(|home| PathBuf::from(home).join(".santeria").join("session.json"))
        .unwrap_or_else(|| PathBuf::from(".santeria-session.json"))
}
