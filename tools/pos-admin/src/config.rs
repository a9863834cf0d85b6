//! Admin tool configuration file.
//!
//! ```toml
//! refresh = "30s"
//!
//! [client]
//! base_url = "http://localhost:3000"
//! timeout = "10s"
//!
//! [ticket]
//! shop_name = "Santeria - Oro Verde"
//! width = 40
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{bail, Context};
use pos_client::ClientConfig;
use pos_reports::TicketConfig;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdminConfig {
    pub client: ClientConfig,
    pub ticket: TicketConfig,

    /// Dashboard refresh interval.
    #[serde(with = "humantime_serde")]
    pub refresh: Duration,
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            client: ClientConfig::default(),
            ticket: TicketConfig::default(),
            refresh: Duration::from_secs(30),
        }
    }
}

/// Command line values that take precedence over the file and environment.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub api_url: Option<String>,
    pub session_file: Option<PathBuf>,
}

impl AdminConfig {
    /// Load from `path` (defaults when `None`), then apply the environment
    /// and `overrides`, then validate.
    pub fn resolve(path: Option<&Path>, overrides: &Overrides) -> anyhow::Result<Self> {
        let mut config = match path {
            Some(path) => {
                let text = std::fs::read_to_string(path)
                    .with_context(|| format!("reading config file {}", path.display()))?;
                toml::from_str(&text)
                    .with_context(|| format!("parsing config file {}", path.display()))?
            }
            None => Self::default(),
        };

        config.client = config.client.with_env_overrides();
        if let Some(url) = &overrides.api_url {
            config.client.base_url = url.clone();
        }
        if let Some(file) = &overrides.session_file {
            config.client.session_file = file.clone();
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&mut self) -> anyhow::Result<()> {
        self.client.validate()?;
        if self.refresh < Duration::from_secs(1) {
            bail!("refresh interval must be at least one second");
        }
        if self.ticket.width < 24 {
            bail!("ticket width must be at least 24 characters");
        }
        Ok(())
    }
}
