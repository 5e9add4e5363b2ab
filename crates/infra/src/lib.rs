//! # `classgrid-infra`
//!
//! Infrastructure implementations of core domain ports.
//!
//! This crate contains:
//! - HTTP transport and the authenticated API client
//! - REST implementations of `SchedulingApi` and `ReferenceDataApi`
//! - Configuration loading (environment, JSON, TOML)
//! - Tracing subscriber setup
//!
//! ## Architecture
//! - Implements traits defined in `classgrid-core`
//! - Contains all "impure" code (network, filesystem, environment)

pub mod api;
pub mod config;
pub mod errors;
pub mod http;
pub mod observability;

// Re-export commonly used items
pub use api::{ApiClient, ApiClientConfig, ApiError, RestReferenceDataApi, RestSchedulingApi};
pub use errors::InfraError;
pub use http::HttpClient;
pub use observability::init_tracing;
