//! # POS Telemetry
//!
//! Structured logging for the Santería POS tools.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use pos_telemetry::{init_tracing, TelemetryConfig};
//!
//! let config = TelemetryConfig::for_tool("pos-admin");
//! init_tracing(&config)?;
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `SANTERIA_LOG_LEVEL` | `info` | Log level filter (`RUST_LOG` also honoured) |
//! | `SANTERIA_JSON_LOGS` | `false` | JSON formatted output |
//! | `SANTERIA_CONSOLE_OUTPUT` | `true` | Write to stderr |
//! | `SANTERIA_LOG_FILE` | unset | Write to a file instead of stderr |

mod config;
mod logging;

pub use config::TelemetryConfig;
pub use logging::init_tracing;

use thiserror::Error;

/// Telemetry initialization errors
#[derive(Error, Debug)]
pub enum TelemetryError {
    #[error("Failed to install tracing subscriber: {0}")]
    SubscriberInit(String),

    #[error("Cannot open log file {path}: {error}")]
    LogFile { path: String, error: String },

    #[error("Invalid configuration: {0}")]
    Config(String),
}
