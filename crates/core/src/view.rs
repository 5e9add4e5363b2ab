//! Render-ready views of the timetable
//!
//! One table per shift: a row per slot (`AB`, `CD`) and a column per day.

use chrono::NaiveDate;
use classgrid_domain::{CellCoord, ClassInfo, Day, Grid, Shift, Slot};
use serde::Serialize;

/// Content of one cell as displayed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum CellView {
    /// Shows the pair label and offers removal.
    Occupied {
        /// Pair label, e.g. `"MATH101 - Alice"`.
        label: String,
    },
    /// Offers assignment.
    Empty,
}

/// One slot across the five days.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShiftRow {
    /// Row header.
    pub slot: Slot,
    /// Cells in weekday order.
    pub cells: Vec<(Day, CellView)>,
}

/// Table of one shift.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShiftTable {
    /// Shift shown by the table.
    pub shift: Shift,
    /// `AB` row, then `CD`.
    pub rows: Vec<ShiftRow>,
}

impl ShiftTable {
    /// Table of one shift taken from the grid.
    #[must_use]
    pub fn build(grid: &Grid, shift: Shift) -> Self {
        let rows = Slot::ALL
            .into_iter()
            .map(|slot| ShiftRow {
                slot,
                cells: Day::ALL
                    .into_iter()
                    .map(|day| {
                        let cell = grid.get(CellCoord::new(day, shift, slot)).map_or(
                            CellView::Empty,
                            |assignment| CellView::Occupied { label: assignment.pair_label() },
                        );
                        (day, cell)
                    })
                    .collect(),
            })
            .collect();
        Self { shift, rows }
    }

    /// Shift label shown above the table.
    #[must_use]
    pub const fn title(&self) -> &'static str {
        self.shift.label()
    }
}

/// Tables for all three shifts, morning first.
#[must_use]
pub fn shift_tables(grid: &Grid) -> Vec<ShiftTable> {
    Shift::ALL.into_iter().map(|shift| ShiftTable::build(grid, shift)).collect()
}

/// Header rows describing a class.
#[must_use]
pub fn class_summary_rows(info: &ClassInfo) -> Vec<(&'static str, String)> {
    let semester = &info.semester;
    vec![
        ("Curso", info.course_name.clone()),
        ("Descrição", info.description.clone()),
        ("Semestre", format!("{} - {} ({})", semester.year, semester.number, semester.kind)),
        ("Data de Início do Semestre", format_date(semester.start_date)),
        ("Data de Fim do Semestre", format_date(semester.end_date)),
    ]
}

fn format_date(date: Option<NaiveDate>) -> String {
    date.map_or_else(|| "-".to_string(), |d| d.format("%d/%m/%Y").to_string())
}

#[cfg(test)]
mod tests {
    use classgrid_domain::{Assignment, EntityId, Semester, SubjectRef, TeacherRef};

    use super::*;

    #[test]
    fn shift_table_marks_occupied_cells() {
        let mut grid = Grid::empty();
        let coord = CellCoord::new(Day::Wednesday, Shift::Afternoon, Slot::Second);
        grid.set(
            coord,
            Assignment {
                class_id: EntityId::Int(3),
                subject: SubjectRef { id: EntityId::Int(1), code: "HIST".into() },
                teacher: TeacherRef { id: EntityId::Int(2), name: "Eve".into() },
                coord,
            },
        );

        let table = ShiftTable::build(&grid, Shift::Afternoon);
        assert_eq!(table.title(), "Tarde");
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[1].slot, Slot::Second);
        assert_eq!(
            table.rows[1].cells[2],
            (Day::Wednesday, CellView::Occupied { label: "HIST - Eve".into() })
        );

        let occupied = table
            .rows
            .iter()
            .flat_map(|row| row.cells.iter())
            .filter(|(_, cell)| *cell != CellView::Empty)
            .count();
        assert_eq!(occupied, 1);

        let morning = ShiftTable::build(&grid, Shift::Morning);
        assert!(morning.rows.iter().flat_map(|r| r.cells.iter()).all(|(_, c)| *c == CellView::Empty));
    }

    #[test]
    fn three_tables_in_shift_order() {
        let tables = shift_tables(&Grid::empty());
        let titles: Vec<_> = tables.iter().map(ShiftTable::title).collect();
        assert_eq!(titles, ["Manhã", "Tarde", "Noite"]);
    }

    #[test]
    fn class_summary_formats_semester() {
        let info = ClassInfo {
            id: EntityId::Int(9),
            description: "Turma A".into(),
            course_name: "Engenharia".into(),
            semester: Semester {
                year: "2024".into(),
                number: "1".into(),
                kind: "Regular".into(),
                start_date: NaiveDate::from_ymd_opt(2024, 2, 5),
                end_date: None,
            },
        };

        let rows = class_summary_rows(&info);
        assert_eq!(rows[0], ("Curso", "Engenharia".to_string()));
        assert_eq!(rows[2].1, "2024 - 1 (Regular)");
        assert_eq!(rows[3].1, "05/02/2024");
        assert_eq!(rows[4].1, "-");
    }
}
