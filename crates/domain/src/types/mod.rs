//! Domain types and models

pub mod assignment;
pub mod coordinate;
pub mod reference;
pub mod session;

pub use assignment::{pair_label, Assignment, EntityId, ScheduleEntry, SubjectRef, TeacherRef};
pub use coordinate::{CellCoord, Day, Shift, Slot, WireCoord};
pub use reference::{ClassInfo, SelectOption, Semester, Subject, Teacher};
pub use session::{Role, Session};
