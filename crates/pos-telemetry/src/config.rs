//! Telemetry configuration from environment variables.

use std::env;
use std::path::PathBuf;

/// Configuration for log output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TelemetryConfig {
    /// Service name attached to every event
    pub service_name: String,

    /// Log level filter (trace, debug, info, warn, error)
    pub log_level: String,

    /// Whether to write logs at all when no log file is set
    pub console_output: bool,

    /// Whether to emit JSON formatted logs
    pub json_logs: bool,

    /// Write logs to this file instead of stderr
    pub log_file: Option<PathBuf>,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            service_name: "santeria-pos".to_string(),
            log_level: "info".to_string(),
            console_output: true,
            json_logs: false,
            log_file: None,
        }
    }
}

impl TelemetryConfig {
    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `SANTERIA_SERVICE_NAME`: Service name (default: santeria-pos)
    /// - `SANTERIA_LOG_LEVEL` or `RUST_LOG`: Log level (default: info)
    /// - `SANTERIA_CONSOLE_OUTPUT`: Enable stderr output (default: true)
    /// - `SANTERIA_JSON_LOGS`: Enable JSON logs (default: false)
    /// - `SANTERIA_LOG_FILE`: Log file path (default: none)
    pub fn from_env() -> Self {
        Self {
            service_name: env::var("SANTERIA_SERVICE_NAME")
                .unwrap_or_else(|_| "santeria-pos".to_string()),

            log_level: env::var("SANTERIA_LOG_LEVEL")
                .or_else(|_| env::var("RUST_LOG"))
                .unwrap_or_else(|_| "info".to_string()),

            console_output: env::var("SANTERIA_CONSOLE_OUTPUT")
                .map(|v| parse_flag(&v, true))
                .unwrap_or(true),

            json_logs: env::var("SANTERIA_JSON_LOGS")
                .map(|v| parse_flag(&v, false))
                .unwrap_or(false),

            log_file: env::var_os("SANTERIA_LOG_FILE").map(PathBuf::from),
        }
    }

    /// Configuration for a named tool, e.g. `for_tool("pos-admin")`.
    pub fn for_tool(name: &str) -> Self {
        let mut config = Self::from_env();
        config.service_name = name.to_string();
        config
    }

    /// Whether any log sink is active.
    pub fn has_output(&self) -> bool {
        self.console_output || self.log_file.is_some()
    }
}

fn parse_flag(value: &str, default: bool) -> bool {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => true,
        "0" | "false" | "no" | "off" => false,
        _ => default,
    }
}
