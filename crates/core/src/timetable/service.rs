//! Timetable manager - core business logic
//!
//! Keeps the grid of one class consistent with the scheduling backend.
//! Creates are confirmed by reloading the whole schedule; deletes are
//! confirmed by clearing the single cell. Failed calls leave the grid as it
//! was.
//!
//! Overlapping requests are not serialized: every method takes `&self`, the
//! state lock is never held across an `.await`, and whichever reload or
//! clear completes last determines the displayed grid.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use classgrid_domain::constants::MSG_MISSING_FIELDS;
use classgrid_domain::{
    Assignment, CellCoord, ClassGridError, ClassInfo, EntityId, Grid, LoadReport, Result, Role,
    SelectOption, Shift,
};
use parking_lot::{Mutex, RwLock};
use tracing::{debug, info, instrument, warn};

use super::ports::{CreateAssignment, DeleteAssignment, ReferenceDataApi, SchedulingApi};
use crate::hours::{aggregate, HoursSummary};
use crate::notice::{Notice, Operation};
use crate::view::ShiftTable;

/// In-flight mutation on a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PendingOperation {
    /// An assignment is being created.
    Create,
    /// An assignment is being deleted.
    Delete,
}

#[derive(Debug, Default)]
struct ViewState {
    grid: Grid,
    teachers: Vec<SelectOption>,
    subjects: Vec<SelectOption>,
    class_info: Option<ClassInfo>,
}

/// Timetable editing service for one class
pub struct TimetableManager {
    class_id: EntityId,
    role: Role,
    scheduling: Arc<dyn SchedulingApi>,
    reference: Arc<dyn ReferenceDataApi>,
    state: RwLock<ViewState>,
    pending: Mutex<PendingTable>,
    next_ticket: AtomicU64,
}

/// In-flight operations per cell, oldest first, each tagged with a ticket.
type PendingTable = HashMap<CellCoord, Vec<(u64, PendingOperation)>>;

impl TimetableManager {
    /// Create a manager with an empty grid. Call [`load`](Self::load) to
    /// populate it.
    #[must_use]
    pub fn new(
        class_id: EntityId,
        role: Role,
        scheduling: Arc<dyn SchedulingApi>,
        reference: Arc<dyn ReferenceDataApi>,
    ) -> Self {
        Self {
            class_id,
            role,
            scheduling,
            reference,
            state: RwLock::new(ViewState::default()),
            pending: Mutex::new(HashMap::new()),
            next_ticket: AtomicU64::new(0),
        }
    }

    /// Class this manager edits.
    #[must_use]
    pub const fn class_id(&self) -> &EntityId {
        &self.class_id
    }

    /// Fetch class details, teacher and subject choices, and the schedule.
    ///
    /// Each fetch fails independently; failures are returned as notices and
    /// leave the corresponding state untouched.
    #[instrument(skip(self), fields(class_id = %self.class_id))]
    pub async fn load(&self) -> Vec<Notice> {
        let mut notices = Vec::new();

        match self.reference.class_info(&self.class_id).await {
            Ok(info) => {
                self.state.write().class_info = Some(info);
            }
            Err(err) => {
                warn!(error = %err, "Failed to load class info");
                notices.push(Notice::from_error(Operation::LoadClassInfo, &err));
            }
        }

        match self.reference.list_teachers().await {
            Ok(teachers) => {
                self.state.write().teachers = teachers.iter().map(SelectOption::from).collect();
            }
            Err(err) => {
                warn!(error = %err, "Failed to load teachers");
                notices.push(Notice::from_error(Operation::LoadTeachers, &err));
            }
        }

        match self.reference.list_subjects().await {
            Ok(subjects) => {
                self.state.write().subjects = subjects.iter().map(SelectOption::from).collect();
            }
            Err(err) => {
                warn!(error = %err, "Failed to load subjects");
                notices.push(Notice::from_error(Operation::LoadSubjects, &err));
            }
        }

        if let Err(err) = self.reload_schedule().await {
            notices.push(Notice::from_error(Operation::LoadSchedule, &err));
        }

        notices
    }

    /// Re-fetch the schedule and rebuild the grid from it.
    ///
    /// # Errors
    /// The backend error of the fetch; the grid is left untouched.
    #[instrument(skip(self), fields(class_id = %self.class_id))]
    pub async fn reload_schedule(&self) -> Result<LoadReport> {
        let entries = self.scheduling.fetch_schedule(&self.class_id).await.inspect_err(|err| {
            warn!(error = %err, "Failed to fetch schedule");
        })?;

        let report = self.state.write().grid.load(entries);
        debug!(placed = report.placed, skipped = report.skipped.len(), "Schedule loaded");
        Ok(report)
    }

    /// Assign a subject and teacher to a cell.
    ///
    /// Both selections are required; a missing one is rejected before any
    /// network call. On success the schedule is reloaded from the backend.
    ///
    /// # Errors
    /// `Validation` for a missing selection, `Forbidden` when the role may
    /// not edit, or the backend error of the create call.
    #[instrument(skip(self, subject, teacher), fields(class_id = %self.class_id))]
    pub async fn assign(
        &self,
        coord: CellCoord,
        subject: Option<&SelectOption>,
        teacher: Option<&SelectOption>,
    ) -> Result<()> {
        let (Some(subject), Some(teacher)) = (subject, teacher) else {
            debug!("Rejecting assignment with missing selection");
            return Err(ClassGridError::Validation(MSG_MISSING_FIELDS.to_string()));
        };
        self.role.ensure_can_edit()?;

        let request = CreateAssignment {
            class_id: self.class_id.clone(),
            subject_id: subject.value.clone(),
            teacher_id: teacher.value.clone(),
            coord,
        };

        let outcome = {
            let _pending = self.mark_pending(coord, PendingOperation::Create);
            self.scheduling.create_assignment(&request).await
        };

        match outcome {
            Ok(()) => {
                info!(subject = %subject.label, teacher = %teacher.label, "Assignment created");
                if let Err(err) = self.reload_schedule().await {
                    warn!(error = %err, "Assignment created but schedule reload failed");
                }
                Ok(())
            }
            Err(err) => {
                warn!(error = %err, "Failed to create assignment");
                Err(err)
            }
        }
    }

    /// Remove the assignment at a cell.
    ///
    /// On success only that cell is cleared locally; no reload is needed.
    ///
    /// # Errors
    /// `Forbidden` when the role may not edit, or the backend error of the
    /// delete call.
    #[instrument(skip(self), fields(class_id = %self.class_id))]
    pub async fn remove(&self, coord: CellCoord) -> Result<()> {
        self.role.ensure_can_edit()?;

        let request = DeleteAssignment { class_id: self.class_id.clone(), coord };

        let outcome = {
            let _pending = self.mark_pending(coord, PendingOperation::Delete);
            self.scheduling.delete_assignment(&request).await
        };

        match outcome {
            Ok(()) => {
                let removed = self.state.write().grid.clear(coord);
                info!(removed = ?removed.as_ref().map(Assignment::pair_label), "Assignment deleted");
                Ok(())
            }
            Err(err) => {
                warn!(error = %err, "Failed to delete assignment");
                Err(err)
            }
        }
    }

    /// Most recent in-flight mutation on a cell, if any.
    ///
    /// When requests overlap on one cell the marker stays set until the last
    /// of them completes.
    #[must_use]
    pub fn pending(&self, coord: CellCoord) -> Option<PendingOperation> {
        self.pending.lock().get(&coord).and_then(|ops| ops.last()).map(|(_, op)| *op)
    }

    /// Snapshot of the current grid.
    #[must_use]
    pub fn grid(&self) -> Grid {
        self.state.read().grid.clone()
    }

    /// Hours summary of the current grid.
    #[must_use]
    pub fn hours(&self) -> HoursSummary {
        aggregate(&self.state.read().grid)
    }

    /// Display table of one shift of the current grid.
    #[must_use]
    pub fn shift_table(&self, shift: Shift) -> ShiftTable {
        ShiftTable::build(&self.state.read().grid, shift)
    }

    /// Teacher choices from the last successful load.
    #[must_use]
    pub fn teachers(&self) -> Vec<SelectOption> {
        self.state.read().teachers.clone()
    }

    /// Subject choices from the last successful load.
    #[must_use]
    pub fn subjects(&self) -> Vec<SelectOption> {
        self.state.read().subjects.clone()
    }

    /// Class details, once loaded.
    #[must_use]
    pub fn class_info(&self) -> Option<ClassInfo> {
        self.state.read().class_info.clone()
    }

    /// Teacher choice by id.
    #[must_use]
    pub fn find_teacher(&self, id: &EntityId) -> Option<SelectOption> {
        self.state.read().teachers.iter().find(|option| &option.value == id).cloned()
    }

    /// Subject choice by id.
    #[must_use]
    pub fn find_subject(&self, id: &EntityId) -> Option<SelectOption> {
        self.state.read().subjects.iter().find(|option| &option.value == id).cloned()
    }

    fn mark_pending(&self, coord: CellCoord, operation: PendingOperation) -> PendingGuard<'_> {
        let ticket = self.next_ticket.fetch_add(1, Ordering::Relaxed);
        self.pending.lock().entry(coord).or_default().push((ticket, operation));
        PendingGuard { pending: &self.pending, coord, ticket }
    }
}

/// Removes its own pending marker when the call completes.
struct PendingGuard<'a> {
    pending: &'a Mutex<PendingTable>,
    coord: CellCoord,
    ticket: u64,
}

impl Drop for PendingGuard<'_> {
    fn drop(&mut self) {
        let mut pending = self.pending.lock();
        if let Some(ops) = pending.get_mut(&self.coord) {
            ops.retain(|(ticket, _)| *ticket != self.ticket);
            if ops.is_empty() {
                pending.remove(&self.coord);
            }
        }
    }
}
