//! Configuration management

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_API_BASE_URL, DEFAULT_API_TIMEOUT_MS, DEFAULT_LOG_LEVEL};
use crate::types::{Role, Session};

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Backend connection settings.
    #[serde(default)]
    pub api: ApiConfig,
    /// Who is editing.
    pub session: SessionConfig,
    /// Default tracing level for the workspace crates.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

/// Scheduling/reference API configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL every endpoint path is appended to.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Per-request timeout in milliseconds.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
    /// Optional `User-Agent` header.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
}

/// Credentials of the signed-in user
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Bearer token, opaque to this application.
    #[serde(skip_serializing)]
    pub token: String,
    /// Role the backend granted the user.
    pub role: Role,
}

impl SessionConfig {
    /// Session to thread through the API client and the manager.
    #[must_use]
    pub fn to_session(&self) -> Session {
        Session::new(self.token.clone(), self.role)
    }
}

impl std::fmt::Debug for SessionConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionConfig")
            .field("token", &"<redacted>")
            .field("role", &self.role)
            .finish()
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self { base_url: default_base_url(), timeout_ms: default_timeout_ms(), user_agent: None }
    }
}

fn default_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

const fn default_timeout_ms() -> u64 {
    DEFAULT_API_TIMEOUT_MS
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_api_section_uses_defaults() {
        let config: Config =
            serde_json::from_str(r#"{"session": {"token": "abc", "role": "coordinator"}}"#).unwrap();

        assert_eq!(config.api.base_url, "http://localhost:3000/api");
        assert_eq!(config.api.timeout_ms, 5000);
        assert_eq!(config.log_level, "info");
        assert_eq!(config.session.to_session().role, Role::Coordinator);
    }

    #[test]
    fn token_is_never_serialized() {
        let config = SessionConfig { token: "secret".into(), role: Role::Admin };
        let json = serde_json::to_string(&config).unwrap();
        assert!(!json.contains("secret"));
        assert!(!format!("{config:?}").contains("secret"));
    }
}
