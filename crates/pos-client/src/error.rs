use pos_types::ValidationError;
use thiserror::Error;

use crate::guard::AccessError;
use crate::session::SessionError;

/// Message used when the backend gives no reason for a failure.
pub const DEFAULT_ERROR_MESSAGE: &str = "Operation failed";

/// Errors that can occur when talking to the backend.
#[derive(Debug, Error)]
pub enum ApiError {
    /// No response at all: DNS, refused connection, timeout.
    #[error("Could not connect to the server: {0}")]
    Unreachable(String),

    /// HTTP 401. The stored session has been cleared.
    #[error("Session expired: {message}")]
    Unauthorized { message: String },

    /// Any other non-2xx response.
    #[error("{message} (HTTP {status})")]
    Status { status: u16, message: String },

    #[error("Failed to parse response: {0}")]
    Decode(String),

    #[error("HTTP client setup failed: {0}")]
    Client(String),

    #[error(transparent)]
    Access(#[from] AccessError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Session(#[from] SessionError),
}

impl ApiError {
    /// HTTP status of the failure, when the server answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Unauthorized { .. } => Some(401),
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Message to show the operator.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Unauthorized { message } | ApiError::Status { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }
}

/// Pull the failure reason out of an error body: `error`, then `message`,
/// then the default.
pub(crate) fn extract_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| {
            ["error", "message"].iter().find_map(|key| {
                value
                    .get(key)
                    .and_then(|v| v.as_str())
                    .filter(|s| !s.trim().is_empty())
                    .map(str::to_string)
            })
        })
        .unwrap_or_else(|| DEFAULT_ERROR_MESSAGE.to_string())
}
