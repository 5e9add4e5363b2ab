//! REST adapters for the scheduling backend
//!
//! # Architecture
//!
//! - `HttpClient` for transport (no direct reqwest in adapters)
//! - `ApiClient` adds the session's bearer token, JSON handling and status
//!   classification
//! - `RestSchedulingApi` and `RestReferenceDataApi` implement the core ports
//!   and own the wire DTOs

pub mod client;
pub mod errors;
pub mod reference;
pub mod scheduling;

pub use client::{ApiClient, ApiClientBuilder, ApiClientConfig};
pub use errors::{ApiError, ApiErrorCategory};
pub use reference::RestReferenceDataApi;
pub use scheduling::RestSchedulingApi;
