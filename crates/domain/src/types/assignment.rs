//! Assignment types
//!
//! An assignment binds one subject, taught by one teacher, to one cell of a
//! class timetable.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::coordinate::{CellCoord, WireCoord};

/// Backend identifier. The API emits ids either as JSON numbers or strings;
/// both forms are kept as received so they round-trip unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EntityId {
    /// Numeric id.
    Int(i64),
    /// Any other id form.
    Text(String),
}

impl EntityId {
    /// Parse user input, preferring the numeric form.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        trimmed.parse::<i64>().map_or_else(|_| Self::Text(trimmed.to_string()), Self::Int)
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(id) => write!(f, "{id}"),
            Self::Text(id) => f.write_str(id),
        }
    }
}

impl From<i64> for EntityId {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<&str> for EntityId {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for EntityId {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// Subject as referenced from a schedule record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SubjectRef {
    pub id: EntityId,
    /// Short code shown in the grid, e.g. `MATH101`.
    pub code: String,
}

/// Teacher as referenced from a schedule record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TeacherRef {
    pub id: EntityId,
    pub name: String,
}

/// A subject-teacher binding placed in one grid cell.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Assignment {
    pub class_id: EntityId,
    pub subject: SubjectRef,
    pub teacher: TeacherRef,
    pub coord: CellCoord,
}

impl Assignment {
    /// Display label `"{subjectCode} - {teacherName}"`, also the hours
    /// aggregation key.
    #[must_use]
    pub fn pair_label(&self) -> String {
        pair_label(&self.subject.code, &self.teacher.name)
    }
}

/// Format a pair label from its parts.
#[must_use]
pub fn pair_label(subject_code: &str, teacher_name: &str) -> String {
    format!("{subject_code} - {teacher_name}")
}

/// Schedule record as fetched from the backend, before its coordinate has
/// been decoded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    pub class_id: EntityId,
    pub subject: SubjectRef,
    pub teacher: TeacherRef,
    pub wire: WireCoord,
}
