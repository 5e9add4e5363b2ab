//! Shared test helpers for `classgrid-core` integration tests.
//!
//! These helpers provide in-memory port implementations so the timetable
//! tests can focus on behaviour instead of HTTP plumbing.

#![allow(dead_code)]

pub mod reference;
pub mod scheduling;

pub use reference::{subject, teacher, MockReferenceDataApi};
pub use scheduling::{schedule_entry, MockSchedulingApi, SchedulingCall};
