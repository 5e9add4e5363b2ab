//! Class timetable editing

pub mod ports;
pub mod service;

pub use ports::{CreateAssignment, DeleteAssignment, ReferenceDataApi, SchedulingApi};
pub use service::{PendingOperation, TimetableManager};
