//! Error types used throughout the application

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error type shared by every timetable crate.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "details")]
pub enum ClassGridError {
    /// Local rejection before any network call was made.
    #[error("Validation error: {0}")]
    Validation(String),

    /// A day or shift token that does not name a grid coordinate.
    #[error("Invalid {field} token: {token:?}")]
    InvalidCoordinateToken {
        /// `"day"` or `"shift"`.
        field: String,
        /// The offending token as received.
        token: String,
    },

    /// A slot code other than `AB` or `CD`.
    #[error("Invalid slot code: {0:?}")]
    InvalidSlotCode(String),

    /// Network failure or an error reported by the backend.
    ///
    /// `reason` carries the server-supplied `{"error": ...}` text when the
    /// backend sent one.
    #[error("Remote error: {message}")]
    Remote {
        /// Server-supplied explanation, shown to the user when present.
        reason: Option<String>,
        /// Transport or status description for logs.
        message: String,
    },

    /// Rejected credentials without a server explanation.
    #[error("Authentication error: {0}")]
    Auth(String),

    /// The session role may not perform the requested action.
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Missing or invalid configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Unexpected failure inside the application.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ClassGridError {
    /// Build an `InvalidCoordinateToken` for the given coordinate field.
    #[must_use]
    pub fn invalid_token(field: &str, token: &str) -> Self {
        Self::InvalidCoordinateToken { field: field.to_string(), token: token.to_string() }
    }

    /// Build a `Remote` error without a server-supplied reason.
    #[must_use]
    pub fn remote(message: impl Into<String>) -> Self {
        Self::Remote { reason: None, message: message.into() }
    }

    /// Server-supplied reason text, if this error carries one.
    #[must_use]
    pub fn reason(&self) -> Option<&str> {
        match self {
            Self::Remote { reason, .. } => reason.as_deref().filter(|r| !r.trim().is_empty()),
            _ => None,
        }
    }

    /// Whether the error was raised by a malformed wire coordinate.
    #[must_use]
    pub const fn is_decode_error(&self) -> bool {
        matches!(self, Self::InvalidCoordinateToken { .. } | Self::InvalidSlotCode(_))
    }
}

/// Result type alias for timetable operations
pub type Result<T> = std::result::Result<T, ClassGridError>;
