//! Display labels for grid coordinates (pt-BR, as shown to coordinators).

use crate::codec;
use crate::types::{CellCoord, Day, Shift, Slot};

impl Day {
    /// Column header, e.g. `"Terça"`.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Monday => "Segunda",
            Self::Tuesday => "Terça",
            Self::Wednesday => "Quarta",
            Self::Thursday => "Quinta",
            Self::Friday => "Sexta",
        }
    }

    /// Full weekday name, e.g. `"Terça-feira"`.
    #[must_use]
    pub fn long_label(self) -> String {
        format!("{}-feira", self.label())
    }
}

impl Shift {
    /// Table title, e.g. `"Manhã"`.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Morning => "Manhã",
            Self::Afternoon => "Tarde",
            Self::Night => "Noite",
        }
    }
}

impl Slot {
    /// Row header, the same code used on the wire.
    #[must_use]
    pub const fn label(self) -> &'static str {
        codec::encode_slot(self)
    }
}

/// Caption for the assignment dialog, e.g. `"AB - Manhã (Segunda-feira)"`.
#[must_use]
pub fn cell_caption(coord: CellCoord) -> String {
    format!("{} - {} ({})", coord.slot.label(), coord.shift.label(), coord.day.long_label())
}
