//! Subscriber setup and structured log helpers.
//!
//! Every event carries the same shape so that JSON output can be filtered
//! by `area` (articles, sales, cash, ...) downstream.

use std::fs::OpenOptions;
use std::sync::Mutex;

use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::{TelemetryConfig, TelemetryError};

/// Install the global tracing subscriber.
///
/// Logs go to stderr, or to `log_file` when set (the dashboard needs the
/// terminal for itself). With neither sink the subscriber only filters.
pub fn init_tracing(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .map_err(|e| TelemetryError::Config(e.to_string()))?;

    let writer = match &config.log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|e| TelemetryError::LogFile {
                    path: path.display().to_string(),
                    error: e.to_string(),
                })?;
            BoxMakeWriter::new(Mutex::new(file))
        }
        None => BoxMakeWriter::new(std::io::stderr),
    };

    let fmt_layer = if !config.has_output() {
        None
    } else if config.json_logs {
        // JSON output for log shipping
        Some(
            tracing_subscriber::fmt::layer()
                .json()
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_writer(writer)
                .boxed(),
        )
    } else {
        // Pretty output for development
        Some(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_thread_ids(false)
                .with_ansi(config.log_file.is_none())
                .with_writer(writer)
                .boxed(),
        )
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| TelemetryError::SubscriberInit(e.to_string()))?;

    tracing::debug!(
        service = %config.service_name,
        json_logs = config.json_logs,
        "Tracing initialized"
    );

    Ok(())
}

/// Log an event tagged with the functional area it belongs to.
///
/// ```rust,ignore
/// log_event!(info, "sales", "Sale registered", total = 1500);
/// ```
#[macro_export]
macro_rules! log_event {
    ($level:ident, $area:expr, $msg:expr $(, $($field:tt)*)?) => {
        tracing::$level!(
            area = $area,
            $($($field)*,)?
            $msg
        )
    };
}
