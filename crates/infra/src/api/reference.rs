//! REST adapter for read-only reference data

use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use classgrid_core::timetable::ports::ReferenceDataApi;
use classgrid_domain::{ClassGridError, ClassInfo, EntityId, Result, Semester, Subject, Teacher};
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, instrument};

use super::client::ApiClient;

#[derive(Debug, Deserialize)]
struct UsersResponse {
    #[serde(default)]
    users: Vec<UserRecord>,
}

#[derive(Debug, Deserialize)]
struct UserRecord {
    id: EntityId,
    username: String,
}

#[derive(Debug, Deserialize)]
struct SubjectsResponse {
    #[serde(default)]
    subjects: Vec<SubjectRecord>,
}

#[derive(Debug, Deserialize)]
struct SubjectRecord {
    id: EntityId,
    name: String,
    #[serde(default)]
    acronym: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ClassResponse {
    class: ClassRecord,
}

#[derive(Debug, Deserialize)]
struct ClassRecord {
    id: EntityId,
    #[serde(default)]
    description: String,
    course: CourseRecord,
    semester: SemesterRecord,
}

#[derive(Debug, Deserialize)]
struct CourseRecord {
    name: String,
}

#[derive(Debug, Deserialize)]
struct SemesterRecord {
    #[serde(default)]
    year: Value,
    #[serde(default)]
    semester: Value,
    #[serde(default, rename = "type")]
    kind: Value,
    #[serde(default)]
    start_date: Option<String>,
    #[serde(default)]
    end_date: Option<String>,
}

impl From<ClassRecord> for ClassInfo {
    fn from(record: ClassRecord) -> Self {
        let semester = record.semester;
        ClassInfo {
            id: record.id,
            description: record.description,
            course_name: record.course.name,
            semester: Semester {
                year: scalar_text(&semester.year),
                number: scalar_text(&semester.semester),
                kind: scalar_text(&semester.kind),
                start_date: semester.start_date.as_deref().and_then(parse_date),
                end_date: semester.end_date.as_deref().and_then(parse_date),
            },
        }
    }
}

/// Render a JSON scalar the way it would appear in a template string.
fn scalar_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

/// Accepts `YYYY-MM-DD` and timestamps that start with it.
fn parse_date(raw: &str) -> Option<NaiveDate> {
    let date = raw.get(..10)?;
    NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()
}

/// `ReferenceDataApi` backed by the REST backend
pub struct RestReferenceDataApi {
    client: Arc<ApiClient>,
}

impl RestReferenceDataApi {
    /// Adapter sending through `client`.
    #[must_use]
    pub const fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ReferenceDataApi for RestReferenceDataApi {
    #[instrument(skip(self))]
    async fn list_teachers(&self) -> Result<Vec<Teacher>> {
        let response: UsersResponse =
            self.client.get("/coordinator/professors").await.map_err(ClassGridError::from)?;
        debug!(count = response.users.len(), "Fetched teachers");

        Ok(response
            .users
            .into_iter()
            .map(|user| Teacher { id: user.id, name: user.username })
            .collect())
    }

    #[instrument(skip(self))]
    async fn list_subjects(&self) -> Result<Vec<Subject>> {
        let response: SubjectsResponse =
            self.client.get("/coordinator/subjects").await.map_err(ClassGridError::from)?;
        debug!(count = response.subjects.len(), "Fetched subjects");

        Ok(response
            .subjects
            .into_iter()
            .map(|subject| Subject { id: subject.id, name: subject.name, code: subject.acronym })
            .collect())
    }

    #[instrument(skip(self), fields(class_id = %class_id))]
    async fn class_info(&self, class_id: &EntityId) -> Result<ClassInfo> {
        let path = format!("/classes/{}", urlencoding::encode(&class_id.to_string()));
        let response: ClassResponse = self.client.get(&path).await.map_err(ClassGridError::from)?;
        Ok(response.class.into())
    }
}
