//! # `classgrid-core`
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - Port interfaces (traits) for the scheduling and reference APIs
//! - The timetable manager that keeps the grid in sync with the backend
//! - Hours aggregation and render-ready views
//!
//! ## Architecture Principles
//! - Only depends on `classgrid-domain`
//! - No HTTP or platform code
//! - All external dependencies via traits

pub mod hours;
pub mod notice;
pub mod timetable;
pub mod view;

pub use hours::{aggregate, HoursRow, HoursSummary};
pub use notice::{Notice, NoticeLevel, Operation};
pub use timetable::{
    CreateAssignment, DeleteAssignment, PendingOperation, ReferenceDataApi, SchedulingApi,
    TimetableManager,
};
pub use view::{class_summary_rows, shift_tables, CellView, ShiftRow, ShiftTable};
