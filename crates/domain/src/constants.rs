//! Application constants
//!
//! Centralized location for all domain-level constants used throughout the
//! application.

// Grid dimensions
/// Teaching days per week.
pub const DAY_COUNT: usize = 5;
/// Shifts per day.
pub const SHIFT_COUNT: usize = 3;
/// Slots per shift.
pub const SLOT_COUNT: usize = 2;
/// Addressable cells in a class timetable.
pub const CELL_COUNT: usize = DAY_COUNT * SHIFT_COUNT * SLOT_COUNT;

/// Hours credited to a subject-teacher pair for each occupied cell.
pub const HOURS_PER_CELL: u32 = 40;

// API defaults
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000/api";
pub const DEFAULT_API_TIMEOUT_MS: u64 = 5000;
pub const DEFAULT_LOG_LEVEL: &str = "info";

// User-facing messages
pub const MSG_MISSING_FIELDS: &str = "Preencha todos os campos corretamente!";
pub const MSG_CREATE_SUCCESS: &str = "Horário salvo com sucesso!";
pub const MSG_DELETE_SUCCESS: &str = "Horário excluído com sucesso!";
pub const MSG_CREATE_FAILED: &str = "Erro ao cadastrar horário.";
pub const MSG_DELETE_FAILED: &str = "Erro ao excluir horário. Tente novamente.";
pub const MSG_SCHEDULE_LOAD_FAILED: &str = "Erro ao carregar horários. Tente novamente.";
pub const MSG_TEACHERS_LOAD_FAILED: &str = "Erro ao carregar professores. Tente novamente.";
pub const MSG_SUBJECTS_LOAD_FAILED: &str = "Erro ao carregar disciplinas. Tente novamente.";
pub const MSG_CLASS_LOAD_FAILED: &str = "Erro ao carregar turma. Tente novamente.";
pub const MSG_FORBIDDEN: &str = "Acesso negado.";
