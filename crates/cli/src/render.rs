//! Plain-text rendering of the timetable screen

use std::fmt::Write;

use classgrid_core::{class_summary_rows, CellView, HoursSummary, Notice, NoticeLevel, ShiftTable};
use classgrid_domain::{ClassInfo, Day};

const EMPTY_CELL: &str = "-";

/// Class header table, titled like the screen it mirrors.
pub fn class_info(info: &ClassInfo) -> String {
    let rows = class_summary_rows(info);
    let width = rows.iter().map(|(label, _)| label.chars().count()).max().unwrap_or(0);

    let mut out = String::from("Informações da Turma\n");
    for (label, value) in rows {
        let _ = writeln!(out, "  {label:<width$}  {value}");
    }
    out
}

/// One shift table with a header row of weekday labels.
pub fn shift_table(table: &ShiftTable) -> String {
    let mut header = vec!["Horário".to_string()];
    header.extend(Day::ALL.iter().map(|day| day.label().to_string()));

    let mut lines = vec![header];
    for row in &table.rows {
        let mut line = vec![row.slot.label().to_string()];
        line.extend(row.cells.iter().map(|(_, cell)| match cell {
            CellView::Occupied { label } => label.clone(),
            CellView::Empty => EMPTY_CELL.to_string(),
        }));
        lines.push(line);
    }

    let widths: Vec<usize> = (0..lines[0].len())
        .map(|col| lines.iter().map(|line| line[col].chars().count()).max().unwrap_or(0))
        .collect();

    let mut out = format!("{}\n", table.title());
    for line in lines {
        let cells: Vec<String> = line
            .iter()
            .zip(&widths)
            .map(|(text, width)| format!("{text:<width$}", width = *width))
            .collect();
        let _ = writeln!(out, "  {}", cells.join(" | ").trim_end());
    }
    out
}

/// Hours table; `None` when nothing is scheduled.
pub fn hours(summary: &HoursSummary) -> Option<String> {
    let rows = summary.view()?;
    let width = rows.iter().map(|row| row.pair.chars().count()).max().unwrap_or(0);

    let mut out = String::from("Total de Horas\n");
    for row in rows {
        let _ = writeln!(out, "  {:<width$}  {}", row.pair, row.hours_text());
    }
    Some(out)
}

/// One notice line tagged with its level.
pub fn notice(notice: &Notice) -> String {
    let tag = match notice.level {
        NoticeLevel::Success => "ok",
        NoticeLevel::Warning => "aviso",
        NoticeLevel::Error => "erro",
    };
    format!("[{tag}] {}", notice.message)
}

#[cfg(test)]
mod tests {
    use classgrid_core::aggregate;
    use classgrid_domain::{
        Assignment, CellCoord, EntityId, Grid, Semester, Shift, Slot, SubjectRef, TeacherRef,
    };

    use super::*;

    fn grid_with(coords: &[CellCoord]) -> Grid {
        let mut grid = Grid::empty();
        for coord in coords {
            grid.set(
                *coord,
                Assignment {
                    class_id: EntityId::Int(1),
                    subject: SubjectRef { id: EntityId::Int(9), code: "MATH101".into() },
                    teacher: TeacherRef { id: EntityId::Int(1), name: "Alice".into() },
                    coord: *coord,
                },
            );
        }
        grid
    }

    #[test]
    fn shift_table_lists_slots_and_days() {
        let grid = grid_with(&[CellCoord::new(Day::Friday, Shift::Morning, Slot::Second)]);
        let rendered = shift_table(&ShiftTable::build(&grid, Shift::Morning));
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines[0], "Manhã");
        assert!(lines[1].contains("Horário") && lines[1].contains("Sexta"));
        assert!(lines[2].trim_start().starts_with("AB"));
        assert!(lines[3].trim_start().starts_with("CD"));
        assert!(lines[3].ends_with("MATH101 - Alice"));
    }

    #[test]
    fn hours_are_omitted_when_empty() {
        assert_eq!(hours(&aggregate(&Grid::empty())), None);

        let grid = grid_with(&[
            CellCoord::new(Day::Monday, Shift::Morning, Slot::First),
            CellCoord::new(Day::Tuesday, Shift::Night, Slot::First),
        ]);
        let rendered = hours(&aggregate(&grid)).unwrap();
        assert!(rendered.starts_with("Total de Horas"));
        assert!(rendered.contains("MATH101 - Alice  80 hrs"));
    }

    #[test]
    fn class_info_renders_all_rows() {
        let info = ClassInfo {
            id: EntityId::Int(1),
            description: "Turma A".into(),
            course_name: "Engenharia".into(),
            semester: Semester {
                year: "2024".into(),
                number: "1".into(),
                kind: "Regular".into(),
                start_date: None,
                end_date: None,
            },
        };
        let rendered = class_info(&info);
        assert!(rendered.contains("2024 - 1 (Regular)"));
        assert_eq!(rendered.lines().count(), 6);
    }
}
