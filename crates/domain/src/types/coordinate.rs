//! Grid coordinate types
//!
//! A timetable cell is addressed by `(Day, Shift, Slot)`. The set is closed:
//! five weekdays, three shifts, two slots, 30 cells in total.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::{CELL_COUNT, SHIFT_COUNT, SLOT_COUNT};

/// Teaching day. Weekends are not part of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Day {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
}

impl Day {
    /// Weekdays in grid column order.
    pub const ALL: [Self; 5] =
        [Self::Monday, Self::Tuesday, Self::Wednesday, Self::Thursday, Self::Friday];

    /// Zero-based position in the week (Monday = 0).
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Daily teaching period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Shift {
    Morning,
    Afternoon,
    Night,
}

impl Shift {
    /// Shifts in table order.
    pub const ALL: [Self; 3] = [Self::Morning, Self::Afternoon, Self::Night];

    /// Zero-based position in the day (Morning = 0).
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Half-block within a shift (`AB` / `CD` on the wire).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Slot {
    First,
    Second,
}

impl Slot {
    /// Slots in row order.
    pub const ALL: [Self; 2] = [Self::First, Self::Second];

    /// Zero-based position in the shift (First = 0).
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Address of one timetable cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CellCoord {
    /// Grid column.
    pub day: Day,
    /// Table the cell belongs to.
    pub shift: Shift,
    /// Row within the shift table.
    pub slot: Slot,
}

impl CellCoord {
    /// Coordinate of one cell.
    #[must_use]
    pub const fn new(day: Day, shift: Shift, slot: Slot) -> Self {
        Self { day, shift, slot }
    }

    /// Dense index in `0..CELL_COUNT`, day-major then shift then slot.
    #[must_use]
    pub const fn index(self) -> usize {
        (self.day.index() * SHIFT_COUNT + self.shift.index()) * SLOT_COUNT + self.slot.index()
    }

    /// Inverse of [`CellCoord::index`].
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        if index >= CELL_COUNT {
            return None;
        }
        let slot = Slot::ALL[index % SLOT_COUNT];
        let shift = Shift::ALL[(index / SLOT_COUNT) % SHIFT_COUNT];
        let day = Day::ALL[index / (SLOT_COUNT * SHIFT_COUNT)];
        Some(Self { day, shift, slot })
    }

    /// All 30 coordinates in index order.
    pub fn all() -> impl Iterator<Item = Self> {
        Day::ALL.into_iter().flat_map(|day| {
            Shift::ALL.into_iter().flat_map(move |shift| {
                Slot::ALL.into_iter().map(move |slot| Self { day, shift, slot })
            })
        })
    }
}

impl fmt::Display for CellCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}/{:?}/{:?}", self.day, self.shift, self.slot)
    }
}

/// Coordinate as exchanged with the scheduling API.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireCoord {
    /// ASCII weekday token, e.g. `"segunda"`.
    pub day_week: String,
    /// Shift letter: `M`, `T` or `N`.
    pub shift: String,
    /// Slot code: `AB` or `CD`.
    pub schedule: String,
}

impl WireCoord {
    /// Wire tuple from its three tokens, taken as given.
    #[must_use]
    pub fn new(
        day_week: impl Into<String>,
        shift: impl Into<String>,
        schedule: impl Into<String>,
    ) -> Self {
        Self { day_week: day_week.into(), shift: shift.into(), schedule: schedule.into() }
    }
}
