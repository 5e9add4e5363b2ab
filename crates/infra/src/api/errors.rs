//! API-specific error types
//!
//! Classifies failed API calls and keeps the backend's own `{"error": ...}`
//! text so it can be shown to the user.

use std::time::Duration;

use classgrid_domain::ClassGridError;
use thiserror::Error;

/// Categories of API errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiErrorCategory {
    /// Authentication errors (401, 403)
    Authentication,
    /// Rate limiting errors (429)
    RateLimit,
    /// Server errors (5xx)
    Server,
    /// Client errors (4xx except auth)
    Client,
    /// Network/connection errors and timeouts
    Network,
    /// Configuration errors
    Config,
}

/// API operation errors
#[derive(Debug, Error)]
pub enum ApiError {
    /// 401 or 403.
    #[error("Authentication failed: {message}")]
    Auth { message: String, reason: Option<String> },

    /// 429.
    #[error("Rate limit exceeded: {message}")]
    RateLimit { message: String, reason: Option<String> },

    /// Any 5xx.
    #[error("Server error: {message}")]
    Server { message: String, reason: Option<String> },

    /// Other 4xx, or a body that did not parse.
    #[error("Client error: {message}")]
    Client { message: String, reason: Option<String> },

    /// Connection failure.
    #[error("Network error: {0}")]
    Network(String),

    /// Bad base URL or request setup.
    #[error("Configuration error: {0}")]
    Config(String),

    /// No response within the configured timeout.
    #[error("Timeout after {0:?}")]
    Timeout(Duration),
}

impl ApiError {
    /// Get the error category for this error
    #[must_use]
    pub const fn category(&self) -> ApiErrorCategory {
        match self {
            Self::Auth { .. } => ApiErrorCategory::Authentication,
            Self::RateLimit { .. } => ApiErrorCategory::RateLimit,
            Self::Server { .. } => ApiErrorCategory::Server,
            Self::Client { .. } => ApiErrorCategory::Client,
            Self::Network(_) | Self::Timeout(_) => ApiErrorCategory::Network,
            Self::Config(_) => ApiErrorCategory::Config,
        }
    }

    /// Reason text supplied by the backend, if any.
    #[must_use]
    pub fn reason(&self) -> Option<&str> {
        match self {
            Self::Auth { reason, .. }
            | Self::RateLimit { reason, .. }
            | Self::Server { reason, .. }
            | Self::Client { reason, .. } => reason.as_deref(),
            Self::Network(_) | Self::Config(_) | Self::Timeout(_) => None,
        }
    }

    /// Client error for a response body that did not match the expected
    /// shape.
    #[must_use]
    pub fn malformed(detail: impl std::fmt::Display) -> Self {
        Self::Client { message: format!("Failed to parse response: {detail}"), reason: None }
    }
}

impl From<ApiError> for ClassGridError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Config(message) => Self::Config(message),
            ApiError::Auth { message, reason: None } => Self::Auth(message),
            other => {
                let reason = other.reason().map(str::to_string);
                Self::Remote { reason, message: other.to_string() }
            }
        }
    }
}

/// Map a transport failure reported by the HTTP client.
impl From<ClassGridError> for ApiError {
    fn from(err: ClassGridError) -> Self {
        match err {
            ClassGridError::Auth(message) => Self::Auth { message, reason: None },
            ClassGridError::Config(message) => Self::Config(message),
            ClassGridError::Remote { message, .. } => Self::Network(message),
            other => Self::Network(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(reason: Option<&str>) -> ApiError {
        ApiError::Client { message: "HTTP 409".to_string(), reason: reason.map(str::to_string) }
    }

    #[test]
    fn test_error_categories() {
        assert_eq!(
            ApiError::Auth { message: "test".into(), reason: None }.category(),
            ApiErrorCategory::Authentication
        );
        assert_eq!(
            ApiError::RateLimit { message: "test".into(), reason: None }.category(),
            ApiErrorCategory::RateLimit
        );
        assert_eq!(
            ApiError::Server { message: "test".into(), reason: None }.category(),
            ApiErrorCategory::Server
        );
        assert_eq!(client(None).category(), ApiErrorCategory::Client);
        assert_eq!(ApiError::Network("test".into()).category(), ApiErrorCategory::Network);
        assert_eq!(
            ApiError::Timeout(Duration::from_secs(5)).category(),
            ApiErrorCategory::Network
        );
    }

    #[test]
    fn server_reason_survives_conversion() {
        let converted = ClassGridError::from(client(Some("Horário já cadastrado")));
        assert_eq!(converted.reason(), Some("Horário já cadastrado"));
        assert!(matches!(converted, ClassGridError::Remote { .. }));
    }

    #[test]
    fn auth_without_reason_maps_to_auth() {
        let converted =
            ClassGridError::from(ApiError::Auth { message: "401".into(), reason: None });
        assert!(matches!(converted, ClassGridError::Auth(_)));
    }

    #[test]
    fn auth_with_reason_keeps_reason() {
        let converted = ClassGridError::from(ApiError::Auth {
            message: "403".into(),
            reason: Some("Token inválido".into()),
        });
        assert_eq!(converted.reason(), Some("Token inválido"));
    }

    #[test]
    fn timeout_maps_to_remote_without_reason() {
        let converted = ClassGridError::from(ApiError::Timeout(Duration::from_millis(5000)));
        assert!(matches!(converted, ClassGridError::Remote { reason: None, .. }));
    }
}
