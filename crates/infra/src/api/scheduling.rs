//! REST adapter for the scheduling endpoint
//!
//! `GET /class-schedules/{classId}` lists a class's records,
//! `POST /class-schedules` creates one and `DELETE /class-schedules` removes
//! the record at a coordinate.

use std::sync::Arc;

use async_trait::async_trait;
use classgrid_core::timetable::ports::{CreateAssignment, DeleteAssignment, SchedulingApi};
use classgrid_domain::{
    codec, ClassGridError, EntityId, Result, ScheduleEntry, SubjectRef, TeacherRef, WireCoord,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

use super::client::ApiClient;

const SCHEDULES_PATH: &str = "/class-schedules";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ScheduleListResponse {
    #[serde(default)]
    class_schedules: Vec<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ScheduleRecord {
    day_week: String,
    shift: String,
    schedule: String,
    professor: ProfessorRecord,
    subject: SubjectRecord,
}

#[derive(Debug, Deserialize)]
struct ProfessorRecord {
    id: EntityId,
    username: String,
}

#[derive(Debug, Deserialize)]
struct SubjectRecord {
    id: EntityId,
    acronym: String,
}

impl ScheduleRecord {
    fn into_entry(self, class_id: &EntityId) -> ScheduleEntry {
        ScheduleEntry {
            class_id: class_id.clone(),
            subject: SubjectRef { id: self.subject.id, code: self.subject.acronym },
            teacher: TeacherRef { id: self.professor.id, name: self.professor.username },
            wire: WireCoord::new(self.day_week, self.shift, self.schedule),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CreateScheduleBody<'a> {
    class_id: &'a EntityId,
    subject_id: &'a EntityId,
    professor_id: &'a EntityId,
    #[serde(flatten)]
    wire: WireCoord,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct DeleteScheduleBody<'a> {
    class_id: &'a EntityId,
    #[serde(flatten)]
    wire: WireCoord,
}

/// `SchedulingApi` backed by the REST backend
pub struct RestSchedulingApi {
    client: Arc<ApiClient>,
}

impl RestSchedulingApi {
    /// Adapter sending through `client`.
    #[must_use]
    pub const fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl SchedulingApi for RestSchedulingApi {
    #[instrument(skip(self), fields(class_id = %class_id))]
    async fn fetch_schedule(&self, class_id: &EntityId) -> Result<Vec<ScheduleEntry>> {
        let path = format!("{}/{}", SCHEDULES_PATH, urlencoding::encode(&class_id.to_string()));
        let response: ScheduleListResponse =
            self.client.get(&path).await.map_err(ClassGridError::from)?;

        let total = response.class_schedules.len();
        let entries: Vec<ScheduleEntry> = response
            .class_schedules
            .into_iter()
            .enumerate()
            .filter_map(|(position, raw)| match serde_json::from_value::<ScheduleRecord>(raw) {
                Ok(record) => Some(record.into_entry(class_id)),
                Err(err) => {
                    warn!(position, error = %err, "skipping malformed schedule record");
                    None
                }
            })
            .collect();

        debug!(total, decoded = entries.len(), "Fetched class schedule");
        Ok(entries)
    }

    #[instrument(skip(self, request), fields(class_id = %request.class_id, coord = %request.coord))]
    async fn create_assignment(&self, request: &CreateAssignment) -> Result<()> {
        let body = CreateScheduleBody {
            class_id: &request.class_id,
            subject_id: &request.subject_id,
            professor_id: &request.teacher_id,
            wire: codec::encode(request.coord),
        };
        self.client.post(SCHEDULES_PATH, &body).await.map_err(ClassGridError::from)
    }

    #[instrument(skip(self, request), fields(class_id = %request.class_id, coord = %request.coord))]
    async fn delete_assignment(&self, request: &DeleteAssignment) -> Result<()> {
        let body = DeleteScheduleBody {
            class_id: &request.class_id,
            wire: codec::encode(request.coord),
        };
        self.client.delete(SCHEDULES_PATH, &body).await.map_err(ClassGridError::from)
    }
}
