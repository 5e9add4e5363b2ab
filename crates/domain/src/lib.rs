//! # `classgrid-domain`
//!
//! Business domain types and models for class timetables.
//!
//! This crate contains:
//! - Grid coordinates and the wire codec
//! - The 30-cell timetable grid model
//! - Assignment and reference data types
//! - Domain error types and Result definitions
//! - Configuration structures and constants
//!
//! ## Architecture
//! - No dependencies on other workspace crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod codec;
pub mod config;
pub mod constants;
pub mod errors;
pub mod grid;
pub mod labels;
pub mod types;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use grid::{Grid, LoadReport, SkippedEntry};
pub use labels::cell_caption;
pub use types::*;
