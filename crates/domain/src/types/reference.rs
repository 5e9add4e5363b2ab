//! Reference data supplied by the backend
//!
//! Teachers, subjects and class details are read-only here. They are fetched
//! once per class view and only used to populate choices and headers.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::assignment::EntityId;

/// Teacher eligible to be assigned to the class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Teacher {
    pub id: EntityId,
    pub name: String,
}

/// Subject offered for the class's course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    pub id: EntityId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

/// A `{value, label}` choice for subject/teacher pickers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SelectOption {
    pub value: EntityId,
    pub label: String,
}

impl SelectOption {
    /// Choice with the given id and display text.
    #[must_use]
    pub fn new(value: impl Into<EntityId>, label: impl Into<String>) -> Self {
        Self { value: value.into(), label: label.into() }
    }
}

impl From<&Teacher> for SelectOption {
    fn from(teacher: &Teacher) -> Self {
        Self { value: teacher.id.clone(), label: teacher.name.clone() }
    }
}

impl From<&Subject> for SelectOption {
    fn from(subject: &Subject) -> Self {
        Self { value: subject.id.clone(), label: subject.name.clone() }
    }
}

/// Academic term a class belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Semester {
    pub year: String,
    /// Term number within the year, e.g. `"1"`.
    pub number: String,
    /// Term type as labelled by the backend, e.g. `"Regular"`.
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
}

/// Header information for the timetable being edited.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassInfo {
    pub id: EntityId,
    pub description: String,
    pub course_name: String,
    pub semester: Semester,
}
