//! Authenticated API client
//!
//! Thin JSON client for the scheduling backend. Every request carries the
//! session's bearer token, is bounded by the configured timeout and is sent
//! once.

use std::sync::Arc;
use std::time::Duration;

use classgrid_domain::constants::{DEFAULT_API_BASE_URL, DEFAULT_API_TIMEOUT_MS};
use classgrid_domain::{ApiConfig, Session};
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Method, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use super::errors::ApiError;
use crate::http::HttpClient;

/// Configuration for API client
#[derive(Debug, Clone)]
pub struct ApiClientConfig {
    /// Base URL for API (e.g., `http://localhost:3000/api`)
    pub base_url: String,
    /// Timeout for API requests
    pub timeout: Duration,
    /// Optional `User-Agent` header
    pub user_agent: Option<String>,
}

impl Default for ApiClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
            timeout: Duration::from_millis(DEFAULT_API_TIMEOUT_MS),
            user_agent: None,
        }
    }
}

impl From<&ApiConfig> for ApiClientConfig {
    fn from(config: &ApiConfig) -> Self {
        Self {
            base_url: config.base_url.clone(),
            timeout: Duration::from_millis(config.timeout_ms),
            user_agent: config.user_agent.clone(),
        }
    }
}

/// Error payload returned by the backend.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

/// API client bound to one session
pub struct ApiClient {
    http_client: Arc<HttpClient>,
    session: Session,
    config: ApiClientConfig,
}

impl ApiClient {
    /// Create a new API client
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Config` if the HTTP client cannot be created
    pub fn new(config: ApiClientConfig, session: Session) -> Result<Self, ApiError> {
        let mut builder = HttpClient::builder().timeout(config.timeout);
        if let Some(agent) = &config.user_agent {
            builder = builder.user_agent(agent.clone());
        }
        let http_client = builder
            .build()
            .map_err(|e| ApiError::Config(format!("Failed to build HttpClient: {e}")))?;

        Ok(Self { http_client: Arc::new(http_client), session, config })
    }

    /// Create a builder for fluent configuration
    #[must_use]
    pub fn builder() -> ApiClientBuilder {
        ApiClientBuilder::default()
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> &ApiClientConfig {
        &self.config
    }

    /// Session whose token is sent.
    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// Execute a GET request and decode the JSON response
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the response cannot be
    /// deserialized
    #[instrument(skip(self), fields(path = %path))]
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self.execute(Method::GET, path, None).await?;
        let status = response.status();

        // 204/205 carry no body
        let result: T = if status == StatusCode::NO_CONTENT || status == StatusCode::RESET_CONTENT {
            serde_json::from_value(serde_json::Value::Null).map_err(ApiError::malformed)?
        } else {
            response.json().await.map_err(ApiError::malformed)?
        };

        info!(path = %path, "GET request successful");
        Ok(result)
    }

    /// Execute a POST request with a JSON body. The response body is
    /// ignored.
    ///
    /// # Errors
    ///
    /// Returns error if the body cannot be serialized or the request fails
    #[instrument(skip(self, body), fields(path = %path))]
    pub async fn post<B: Serialize>(&self, path: &str, body: &B) -> Result<(), ApiError> {
        let body = Self::encode_body(body)?;
        self.execute(Method::POST, path, Some(body)).await?;
        info!(path = %path, "POST request successful");
        Ok(())
    }

    /// Execute a DELETE request with a JSON body. The response body is
    /// ignored.
    ///
    /// # Errors
    ///
    /// Returns error if the body cannot be serialized or the request fails
    #[instrument(skip(self, body), fields(path = %path))]
    pub async fn delete<B: Serialize>(&self, path: &str, body: &B) -> Result<(), ApiError> {
        let body = Self::encode_body(body)?;
        self.execute(Method::DELETE, path, Some(body)).await?;
        info!(path = %path, "DELETE request successful");
        Ok(())
    }

    async fn execute(
        &self,
        method: Method,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> Result<Response, ApiError> {
        let url = self.url(path);
        debug!(%method, url = %url, "API request");

        let mut request = self
            .http_client
            .request(method, &url)
            .header(AUTHORIZATION, format!("Bearer {}", self.session.token))
            .header(CONTENT_TYPE, "application/json");
        if let Some(body) = body {
            request = request.json(&body);
        }

        let timeout = self.config.timeout;
        let response = match tokio::time::timeout(timeout, self.http_client.send(request)).await {
            Ok(Ok(response)) => response,
            Ok(Err(err)) => return Err(ApiError::from(err)),
            Err(_) => {
                warn!(url = %url, ?timeout, "API request timed out");
                return Err(ApiError::Timeout(timeout));
            }
        };

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Self::map_status_error(status, &url, &body));
        }

        Ok(response)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url.trim_end_matches('/'), path)
    }

    fn encode_body<B: Serialize>(body: &B) -> Result<serde_json::Value, ApiError> {
        serde_json::to_value(body).map_err(|e| ApiError::Client {
            message: format!("Failed to serialize body: {e}"),
            reason: None,
        })
    }

    fn map_status_error(status: StatusCode, url: &str, body: &str) -> ApiError {
        let reason = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|parsed| parsed.error)
            .filter(|text| !text.trim().is_empty());

        let message = if body.is_empty() {
            format!("{url} returned status {status}")
        } else {
            format!("{url} returned status {status}: {body}")
        };

        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            ApiError::Auth { message, reason }
        } else if status == StatusCode::TOO_MANY_REQUESTS {
            ApiError::RateLimit { message, reason }
        } else if status.is_server_error() {
            ApiError::Server { message, reason }
        } else if status.is_client_error() {
            ApiError::Client { message, reason }
        } else {
            ApiError::Network(message)
        }
    }
}

/// Builder for API client
#[derive(Default)]
pub struct ApiClientBuilder {
    config: Option<ApiClientConfig>,
    session: Option<Session>,
}

impl ApiClientBuilder {
    /// Set the API configuration
    #[must_use]
    pub fn config(mut self, config: ApiClientConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Set the session whose token authenticates every request
    #[must_use]
    pub fn session(mut self, session: Session) -> Self {
        self.session = Some(session);
        self
    }

    /// Build the API client
    ///
    /// # Errors
    ///
    /// Returns error if the session is missing or client creation fails
    pub fn build(self) -> Result<ApiClient, ApiError> {
        let config = self.config.unwrap_or_default();
        let session =
            self.session.ok_or_else(|| ApiError::Config("Session not set".to_string()))?;

        ApiClient::new(config, session)
    }
}
