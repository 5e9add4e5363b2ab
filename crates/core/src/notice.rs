//! User-facing notices
//!
//! Every operation the timetable screen performs ends in a short notice.
//! Failures prefer the server's own reason and fall back to a fixed text per
//! operation.

use classgrid_domain::constants::{
    MSG_CLASS_LOAD_FAILED, MSG_CREATE_FAILED, MSG_CREATE_SUCCESS, MSG_DELETE_FAILED,
    MSG_DELETE_SUCCESS, MSG_FORBIDDEN, MSG_SCHEDULE_LOAD_FAILED, MSG_SUBJECTS_LOAD_FAILED,
    MSG_TEACHERS_LOAD_FAILED,
};
use classgrid_domain::ClassGridError;
use serde::Serialize;

/// Operations that can produce a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    /// Fetch of the class schedule.
    LoadSchedule,
    /// Fetch of teacher choices.
    LoadTeachers,
    /// Fetch of subject choices.
    LoadSubjects,
    /// Fetch of the class header.
    LoadClassInfo,
    /// Assignment of a cell.
    Create,
    /// Removal of a cell's assignment.
    Delete,
}

impl Operation {
    /// Text shown when the operation fails without a server reason.
    #[must_use]
    pub const fn fallback_message(self) -> &'static str {
        match self {
            Self::LoadSchedule => MSG_SCHEDULE_LOAD_FAILED,
            Self::LoadTeachers => MSG_TEACHERS_LOAD_FAILED,
            Self::LoadSubjects => MSG_SUBJECTS_LOAD_FAILED,
            Self::LoadClassInfo => MSG_CLASS_LOAD_FAILED,
            Self::Create => MSG_CREATE_FAILED,
            Self::Delete => MSG_DELETE_FAILED,
        }
    }

    /// Text shown on success. Loads complete silently.
    #[must_use]
    pub const fn success_message(self) -> Option<&'static str> {
        match self {
            Self::Create => Some(MSG_CREATE_SUCCESS),
            Self::Delete => Some(MSG_DELETE_SUCCESS),
            _ => None,
        }
    }
}

/// Severity of a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeLevel {
    /// The operation went through.
    Success,
    /// Rejected locally; nothing was sent.
    Warning,
    /// The backend or the network failed.
    Error,
}

/// Transient message for the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    /// Operation that produced the notice.
    pub operation: Operation,
    /// Severity.
    pub level: NoticeLevel,
    /// Text for the user.
    pub message: String,
}

impl Notice {
    /// Notice for a failed operation.
    #[must_use]
    pub fn from_error(operation: Operation, error: &ClassGridError) -> Self {
        let (level, message) = match error {
            ClassGridError::Validation(message) => (NoticeLevel::Warning, message.clone()),
            ClassGridError::Forbidden(_) => (NoticeLevel::Error, MSG_FORBIDDEN.to_string()),
            other => (
                NoticeLevel::Error,
                other.reason().unwrap_or(operation.fallback_message()).to_string(),
            ),
        };
        Self { operation, level, message }
    }

    /// Notice for a finished operation, `None` for silent successes.
    #[must_use]
    pub fn from_result<T>(
        operation: Operation,
        result: &Result<T, ClassGridError>,
    ) -> Option<Self> {
        match result {
            Ok(_) => operation.success_message().map(|message| Self {
                operation,
                level: NoticeLevel::Success,
                message: message.to_string(),
            }),
            Err(error) => Some(Self::from_error(operation, error)),
        }
    }

    /// Whether the notice reports a failure.
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.level == NoticeLevel::Error
    }
}

#[cfg(test)]
mod tests {
    use classgrid_domain::constants::MSG_MISSING_FIELDS;

    use super::*;

    #[test]
    fn server_reason_wins_over_fallback() {
        let err = ClassGridError::Remote {
            reason: Some("Professor já possui aula neste horário".into()),
            message: "409 Conflict".into(),
        };
        let notice = Notice::from_error(Operation::Create, &err);
        assert_eq!(notice.level, NoticeLevel::Error);
        assert_eq!(notice.message, "Professor já possui aula neste horário");
    }

    #[test]
    fn fallback_used_without_reason() {
        let notice = Notice::from_error(Operation::Delete, &ClassGridError::remote("timeout"));
        assert_eq!(notice.message, "Erro ao excluir horário. Tente novamente.");

        let notice = Notice::from_error(Operation::Create, &ClassGridError::Auth("401".into()));
        assert_eq!(notice.message, "Erro ao cadastrar horário.");
    }

    #[test]
    fn validation_is_a_warning() {
        let err = ClassGridError::Validation(MSG_MISSING_FIELDS.into());
        let notice = Notice::from_error(Operation::Create, &err);
        assert_eq!(notice.level, NoticeLevel::Warning);
        assert_eq!(notice.message, "Preencha todos os campos corretamente!");
    }

    #[test]
    fn successes() {
        let ok: Result<(), ClassGridError> = Ok(());
        let notice = Notice::from_result(Operation::Create, &ok).unwrap();
        assert_eq!(notice.level, NoticeLevel::Success);
        assert_eq!(notice.message, "Horário salvo com sucesso!");
        assert_eq!(
            Notice::from_result(Operation::Delete, &ok).map(|n| n.message),
            Some("Horário excluído com sucesso!".to_string())
        );
        assert!(Notice::from_result(Operation::LoadSchedule, &ok).is_none());
    }
}
