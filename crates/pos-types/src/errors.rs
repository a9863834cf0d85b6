//! Form validation errors.

use thiserror::Error;

/// Minimum length accepted for a new password.
pub const MIN_PASSWORD_LEN: usize = 8;

/// Reasons a form draft cannot be turned into a request payload.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A mandatory field is empty or unselected.
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// Money amounts that must be strictly positive.
    #[error("Amount must be greater than 0")]
    NonPositiveAmount,

    /// Quantities or prices that cannot go below zero.
    #[error("{0} cannot be negative")]
    Negative(&'static str),

    #[error("Password must have at least {min} characters")]
    PasswordTooShort { min: usize },

    #[error("Passwords do not match")]
    PasswordMismatch,

    #[error("Invalid email address: {0}")]
    InvalidEmail(String),
}
