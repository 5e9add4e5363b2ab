//! Timetable grid model
//!
//! Fixed 30-cell map from [`CellCoord`] to an optional [`Assignment`] for one
//! class. Cells can only be occupied or emptied; the set of addressable
//! coordinates never changes.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::codec;
use crate::constants::CELL_COUNT;
use crate::errors::ClassGridError;
use crate::types::{Assignment, CellCoord, ScheduleEntry};

/// Weekly grid of one class.
///
/// Deserializing rejects any `cells` array that does not hold exactly
/// [`CELL_COUNT`] entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    cells: [Option<Assignment>; CELL_COUNT],
}

/// Outcome of [`Grid::load`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Entries that were placed (including ones later overwritten).
    pub placed: usize,
    /// Entries dropped because their coordinate did not decode.
    pub skipped: Vec<SkippedEntry>,
}

/// A schedule entry that could not be placed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedEntry {
    /// Position of the entry in the loaded sequence.
    pub position: usize,
    /// Why the coordinate did not decode.
    pub error: ClassGridError,
}

impl Grid {
    /// Grid with every cell unoccupied.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Replace the whole grid with the given schedule entries.
    ///
    /// When two entries decode to the same cell the later one wins. Entries
    /// with a malformed coordinate are skipped and reported; the remaining
    /// entries are still placed.
    pub fn load<I>(&mut self, entries: I) -> LoadReport
    where
        I: IntoIterator<Item = ScheduleEntry>,
    {
        let mut fresh = Self::empty();
        let mut report = LoadReport::default();

        for (position, entry) in entries.into_iter().enumerate() {
            match codec::decode(&entry.wire) {
                Ok(coord) => {
                    if fresh.get(coord).is_some() {
                        warn!(%coord, position, "Duplicate schedule entry overwrites earlier one");
                    }
                    fresh.set(
                        coord,
                        Assignment {
                            class_id: entry.class_id,
                            subject: entry.subject,
                            teacher: entry.teacher,
                            coord,
                        },
                    );
                    report.placed += 1;
                }
                Err(error) => {
                    warn!(position, wire = ?entry.wire, error = %error, "Skipping schedule entry");
                    report.skipped.push(SkippedEntry { position, error });
                }
            }
        }

        *self = fresh;
        report
    }

    /// Occupy a cell, replacing whatever was there.
    pub fn set(&mut self, coord: CellCoord, assignment: Assignment) {
        let assignment = Assignment { coord, ..assignment };
        self.cells[coord.index()] = Some(assignment);
    }

    /// Empty a cell, returning its previous assignment.
    pub fn clear(&mut self, coord: CellCoord) -> Option<Assignment> {
        self.cells[coord.index()].take()
    }

    /// Assignment at a cell, if occupied.
    #[must_use]
    pub fn get(&self, coord: CellCoord) -> Option<&Assignment> {
        self.cells[coord.index()].as_ref()
    }

    /// Whether a cell holds an assignment.
    #[must_use]
    pub fn is_occupied(&self, coord: CellCoord) -> bool {
        self.get(coord).is_some()
    }

    /// Occupied cells in coordinate order.
    pub fn occupied(&self) -> impl Iterator<Item = &Assignment> {
        self.cells.iter().flatten()
    }

    /// Number of occupied cells.
    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.occupied().count()
    }

    /// Whether no cell is occupied.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.occupied_count() == 0
    }

    /// Every coordinate paired with its cell content, in coordinate order.
    pub fn cells(&self) -> impl Iterator<Item = (CellCoord, Option<&Assignment>)> {
        CellCoord::all().map(move |coord| (coord, self.get(coord)))
    }
}
