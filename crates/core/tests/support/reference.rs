use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use classgrid_core::timetable::ports::ReferenceDataApi;
use classgrid_domain::{
    ClassGridError, ClassInfo, EntityId, Result as DomainResult, Semester, Subject, Teacher,
};

/// In-memory mock for `ReferenceDataApi`.
///
/// Returns fixed lists. Teacher loading can be switched to fail to exercise
/// partial-load handling.
#[derive(Default, Clone)]
pub struct MockReferenceDataApi {
    teachers: Arc<Vec<Teacher>>,
    subjects: Arc<Vec<Subject>>,
    teachers_error: Arc<Mutex<Option<ClassGridError>>>,
}

impl MockReferenceDataApi {
    pub fn new(teachers: Vec<Teacher>, subjects: Vec<Subject>) -> Self {
        Self {
            teachers: Arc::new(teachers),
            subjects: Arc::new(subjects),
            teachers_error: Arc::default(),
        }
    }

    pub fn failing_teachers(self, error: ClassGridError) -> Self {
        *self.teachers_error.lock().unwrap() = Some(error);
        self
    }
}

#[async_trait]
impl ReferenceDataApi for MockReferenceDataApi {
    async fn list_teachers(&self) -> DomainResult<Vec<Teacher>> {
        if let Some(error) = self.teachers_error.lock().unwrap().clone() {
            return Err(error);
        }
        Ok(self.teachers.to_vec())
    }

    async fn list_subjects(&self) -> DomainResult<Vec<Subject>> {
        Ok(self.subjects.to_vec())
    }

    async fn class_info(&self, class_id: &EntityId) -> DomainResult<ClassInfo> {
        Ok(ClassInfo {
            id: class_id.clone(),
            description: "Turma A".to_string(),
            course_name: "Engenharia de Software".to_string(),
            semester: Semester {
                year: "2024".to_string(),
                number: "1".to_string(),
                kind: "Regular".to_string(),
                start_date: None,
                end_date: None,
            },
        })
    }
}

pub fn teacher(id: i64, name: &str) -> Teacher {
    Teacher { id: EntityId::Int(id), name: name.to_string() }
}

pub fn subject(id: i64, name: &str, code: &str) -> Subject {
    Subject { id: EntityId::Int(id), name: name.to_string(), code: Some(code.to_string()) }
}
