use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::sync::oneshot;
use classgrid_core::timetable::ports::{CreateAssignment, DeleteAssignment, SchedulingApi};
use classgrid_domain::{
    codec, ClassGridError, EntityId, Result as DomainResult, ScheduleEntry, SubjectRef,
    TeacherRef, WireCoord,
};

/// Call received by [`MockSchedulingApi`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchedulingCall {
    Fetch(EntityId),
    Create(CreateAssignment),
    Delete(DeleteAssignment),
}

/// In-memory mock for `SchedulingApi`.
///
/// Behaves like a tiny backend: creates append a record, deletes remove the
/// record at the coordinate, fetches return the current records. Every call
/// is recorded, and each operation can be primed to fail once.
#[derive(Default, Clone)]
pub struct MockSchedulingApi {
    entries: Arc<Mutex<Vec<ScheduleEntry>>>,
    calls: Arc<Mutex<Vec<SchedulingCall>>>,
    subjects: Arc<Mutex<HashMap<EntityId, String>>>,
    teachers: Arc<Mutex<HashMap<EntityId, String>>>,
    fail_fetch: Arc<Mutex<Option<ClassGridError>>>,
    fail_create: Arc<Mutex<Option<ClassGridError>>>,
    fail_delete: Arc<Mutex<Option<ClassGridError>>>,
    delete_gate: Arc<Mutex<Option<oneshot::Receiver<()>>>>,
}

impl MockSchedulingApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a raw record, wire coordinate as given.
    pub fn with_entry(self, entry: ScheduleEntry) -> Self {
        self.entries.lock().unwrap().push(entry);
        self
    }

    /// Register the subject code used when a create stores a record.
    pub fn with_subject(self, id: impl Into<EntityId>, code: &str) -> Self {
        self.subjects.lock().unwrap().insert(id.into(), code.to_string());
        self
    }

    /// Register the teacher name used when a create stores a record.
    pub fn with_teacher(self, id: impl Into<EntityId>, name: &str) -> Self {
        self.teachers.lock().unwrap().insert(id.into(), name.to_string());
        self
    }

    pub fn fail_next_fetch(&self, error: ClassGridError) {
        *self.fail_fetch.lock().unwrap() = Some(error);
    }

    pub fn fail_next_create(&self, error: ClassGridError) {
        *self.fail_create.lock().unwrap() = Some(error);
    }

    pub fn fail_next_delete(&self, error: ClassGridError) {
        *self.fail_delete.lock().unwrap() = Some(error);
    }

    /// Make the next delete wait until the returned sender fires (or is
    /// dropped).
    pub fn hold_next_delete(&self) -> oneshot::Sender<()> {
        let (release, gate) = oneshot::channel();
        *self.delete_gate.lock().unwrap() = Some(gate);
        release
    }

    pub fn calls(&self) -> Vec<SchedulingCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Calls other than fetches.
    pub fn mutations(&self) -> Vec<SchedulingCall> {
        self.calls()
            .into_iter()
            .filter(|call| !matches!(call, SchedulingCall::Fetch(_)))
            .collect()
    }

    pub fn stored(&self) -> usize {
        self.entries.lock().unwrap().len()
    }
}

#[async_trait]
impl SchedulingApi for MockSchedulingApi {
    async fn fetch_schedule(&self, class_id: &EntityId) -> DomainResult<Vec<ScheduleEntry>> {
        self.calls.lock().unwrap().push(SchedulingCall::Fetch(class_id.clone()));
        if let Some(error) = self.fail_fetch.lock().unwrap().take() {
            return Err(error);
        }
        Ok(self
            .entries
            .lock()
            .unwrap()
            .iter()
            .filter(|entry| &entry.class_id == class_id)
            .cloned()
            .collect())
    }

    async fn create_assignment(&self, request: &CreateAssignment) -> DomainResult<()> {
        self.calls.lock().unwrap().push(SchedulingCall::Create(request.clone()));
        if let Some(error) = self.fail_create.lock().unwrap().take() {
            return Err(error);
        }

        let code = self
            .subjects
            .lock()
            .unwrap()
            .get(&request.subject_id)
            .cloned()
            .unwrap_or_else(|| request.subject_id.to_string());
        let name = self
            .teachers
            .lock()
            .unwrap()
            .get(&request.teacher_id)
            .cloned()
            .unwrap_or_else(|| request.teacher_id.to_string());

        self.entries.lock().unwrap().push(ScheduleEntry {
            class_id: request.class_id.clone(),
            subject: SubjectRef { id: request.subject_id.clone(), code },
            teacher: TeacherRef { id: request.teacher_id.clone(), name },
            wire: codec::encode(request.coord),
        });
        Ok(())
    }

    async fn delete_assignment(&self, request: &DeleteAssignment) -> DomainResult<()> {
        self.calls.lock().unwrap().push(SchedulingCall::Delete(request.clone()));
        let gate = self.delete_gate.lock().unwrap().take();
        if let Some(gate) = gate {
            let _ = gate.await;
        }
        if let Some(error) = self.fail_delete.lock().unwrap().take() {
            return Err(error);
        }

        let wire = codec::encode(request.coord);
        self.entries
            .lock()
            .unwrap()
            .retain(|entry| !(entry.class_id == request.class_id && entry.wire == wire));
        Ok(())
    }
}

/// Build a schedule record for the given wire coordinate.
pub fn schedule_entry(
    class_id: impl Into<EntityId>,
    subject_code: &str,
    teacher_name: &str,
    wire: WireCoord,
) -> ScheduleEntry {
    ScheduleEntry {
        class_id: class_id.into(),
        subject: SubjectRef { id: EntityId::from(subject_code), code: subject_code.to_string() },
        teacher: TeacherRef { id: EntityId::from(teacher_name), name: teacher_name.to_string() },
        wire,
    }
}
