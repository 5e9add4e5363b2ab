//! Port interfaces for timetable editing
//!
//! These traits define the boundaries between the timetable manager and the
//! REST backend that owns schedules and reference data.

use async_trait::async_trait;
use classgrid_domain::{CellCoord, ClassInfo, EntityId, Result, ScheduleEntry, Subject, Teacher};

/// Request to bind a subject and teacher to an empty cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateAssignment {
    /// Class owning the grid.
    pub class_id: EntityId,
    /// Subject to schedule.
    pub subject_id: EntityId,
    /// Teacher giving the subject.
    pub teacher_id: EntityId,
    /// Target cell.
    pub coord: CellCoord,
}

/// Request to free a cell. The coordinate is the key; no assignment id is
/// needed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteAssignment {
    /// Class owning the grid.
    pub class_id: EntityId,
    /// Cell to free.
    pub coord: CellCoord,
}

/// Trait for the scheduling endpoint
#[async_trait]
pub trait SchedulingApi: Send + Sync {
    /// Fetch every schedule record of a class
    async fn fetch_schedule(&self, class_id: &EntityId) -> Result<Vec<ScheduleEntry>>;

    /// Create an assignment
    async fn create_assignment(&self, request: &CreateAssignment) -> Result<()>;

    /// Delete the assignment at a coordinate
    async fn delete_assignment(&self, request: &DeleteAssignment) -> Result<()>;
}

/// Trait for read-only reference data
#[async_trait]
pub trait ReferenceDataApi: Send + Sync {
    /// Teachers eligible for the coordinator's course
    async fn list_teachers(&self) -> Result<Vec<Teacher>>;

    /// Subjects that can be scheduled
    async fn list_subjects(&self) -> Result<Vec<Subject>>;

    /// Header details of a class
    async fn class_info(&self, class_id: &EntityId) -> Result<ClassInfo>;
}
