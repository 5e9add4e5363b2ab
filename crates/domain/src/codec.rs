//! Coordinate codec
//!
//! Bidirectional mapping between the scheduling API's wire tuple
//! (`dayWeek`, `shift`, `schedule`) and [`CellCoord`].
//!
//! Days travel as lowercase, unaccented Portuguese weekday names. Shifts
//! travel as one letter (`M`, `T`, `N`). Slots travel as `AB` or `CD`.
//! Decoding is lenient about case, accents and label suffixes; encoding
//! always produces the canonical form, so `decode(encode(c)) == c` for every
//! coordinate and `encode(decode(w)) == w` for every canonical tuple.

use crate::errors::{ClassGridError, Result};
use crate::types::{CellCoord, Day, Shift, Slot, WireCoord};

/// Canonical day tokens, in `Day::ALL` order.
const DAY_TOKENS: [(Day, &str); 5] = [
    (Day::Monday, "segunda"),
    (Day::Tuesday, "terca"),
    (Day::Wednesday, "quarta"),
    (Day::Thursday, "quinta"),
    (Day::Friday, "sexta"),
];

const SHIFT_CODES: [(Shift, char); 3] =
    [(Shift::Morning, 'M'), (Shift::Afternoon, 'T'), (Shift::Night, 'N')];

const SLOT_CODES: [(Slot, &str); 2] = [(Slot::First, "AB"), (Slot::Second, "CD")];

/// Accented characters that appear in Portuguese weekday and shift labels.
const ACCENT_FOLDS: [(char, char); 12] = [
    ('á', 'a'),
    ('à', 'a'),
    ('â', 'a'),
    ('ã', 'a'),
    ('ç', 'c'),
    ('é', 'e'),
    ('ê', 'e'),
    ('í', 'i'),
    ('ó', 'o'),
    ('ô', 'o'),
    ('õ', 'o'),
    ('ú', 'u'),
];

/// Encode a coordinate into its wire tuple.
#[must_use]
pub fn encode(coord: CellCoord) -> WireCoord {
    WireCoord {
        day_week: encode_day(coord.day).to_string(),
        shift: encode_shift(coord.shift).to_string(),
        schedule: encode_slot(coord.slot).to_string(),
    }
}

/// Decode a wire tuple into a coordinate.
///
/// # Errors
/// `InvalidCoordinateToken` for an unknown day or shift, `InvalidSlotCode`
/// for a slot other than `AB`/`CD`.
pub fn decode(wire: &WireCoord) -> Result<CellCoord> {
    Ok(CellCoord {
        day: decode_day(&wire.day_week)?,
        shift: decode_shift(&wire.shift)?,
        slot: decode_slot(&wire.schedule)?,
    })
}

/// Wire token of a weekday, e.g. `"terca"`.
#[must_use]
pub const fn encode_day(day: Day) -> &'static str {
    DAY_TOKENS[day.index()].1
}

/// Decode a weekday token or label (`"terca"`, `"Terça"`, `"Terça-feira"`).
///
/// # Errors
/// `InvalidCoordinateToken` when the token names no weekday of the grid.
pub fn decode_day(token: &str) -> Result<Day> {
    let normalized = normalize_day_token(token);
    DAY_TOKENS
        .iter()
        .find(|(_, wire)| *wire == normalized)
        .map(|(day, _)| *day)
        .ok_or_else(|| ClassGridError::invalid_token("day", token))
}

/// Wire letter of a shift.
#[must_use]
pub const fn encode_shift(shift: Shift) -> char {
    SHIFT_CODES[shift.index()].1
}

/// Decode a shift code or label by its first character.
///
/// `M`/`manhã`/`morning` → Morning, `T`/`tarde` or `A`/`afternoon` →
/// Afternoon, `N`/`noite`/`night` → Night.
///
/// # Errors
/// `InvalidCoordinateToken` for an empty token or an unknown first letter.
pub fn decode_shift(token: &str) -> Result<Shift> {
    let first = token
        .trim()
        .chars()
        .next()
        .map(|c| c.to_ascii_uppercase())
        .ok_or_else(|| ClassGridError::invalid_token("shift", token))?;

    if first == 'A' {
        return Ok(Shift::Afternoon);
    }

    SHIFT_CODES
        .iter()
        .find(|(_, code)| *code == first)
        .map(|(shift, _)| *shift)
        .ok_or_else(|| ClassGridError::invalid_token("shift", token))
}

/// Wire code of a slot, `AB` or `CD`.
#[must_use]
pub const fn encode_slot(slot: Slot) -> &'static str {
    SLOT_CODES[slot.index()].1
}

/// Decode a slot code. Only the exact codes `AB` and `CD` are legal.
///
/// # Errors
/// `InvalidSlotCode` for any other string.
pub fn decode_slot(code: &str) -> Result<Slot> {
    SLOT_CODES
        .iter()
        .find(|(_, wire)| *wire == code)
        .map(|(slot, _)| *slot)
        .ok_or_else(|| ClassGridError::InvalidSlotCode(code.to_string()))
}

fn normalize_day_token(token: &str) -> String {
    let mut folded: String = token.trim().to_lowercase().chars().map(fold_accent).collect();
    if let Some(stem_len) = folded.strip_suffix("-feira").map(str::len) {
        folded.truncate(stem_len);
    }
    folded
}

fn fold_accent(c: char) -> char {
    ACCENT_FOLDS.iter().find(|(accented, _)| *accented == c).map_or(c, |(_, plain)| *plain)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_coordinate_round_trips() {
        for coord in CellCoord::all() {
            let wire = encode(coord);
            assert_eq!(decode(&wire).unwrap(), coord, "wire {wire:?}");
        }
    }

    #[test]
    fn every_canonical_wire_tuple_round_trips() {
        for (_, day) in DAY_TOKENS {
            for shift in ["M", "T", "N"] {
                for slot in ["AB", "CD"] {
                    let wire = WireCoord::new(day, shift, slot);
                    assert_eq!(encode(decode(&wire).unwrap()), wire);
                }
            }
        }
    }

    #[test]
    fn slot_codes() {
        assert_eq!(decode_slot("AB").unwrap(), Slot::First);
        assert_eq!(decode_slot("CD").unwrap(), Slot::Second);
        for bad in ["ab", "EF", "", "ABCD", " AB"] {
            assert_eq!(decode_slot(bad), Err(ClassGridError::InvalidSlotCode(bad.to_string())));
        }
    }

    #[test]
    fn day_labels_are_normalized() {
        assert_eq!(decode_day("Terça").unwrap(), Day::Tuesday);
        assert_eq!(decode_day("TERCA").unwrap(), Day::Tuesday);
        assert_eq!(decode_day("Segunda-feira").unwrap(), Day::Monday);
        assert_eq!(decode_day(" sexta ").unwrap(), Day::Friday);
    }

    #[test]
    fn unknown_days_are_rejected() {
        for bad in ["sabado", "Sábado", "domingo", "monday", ""] {
            assert!(matches!(
                decode_day(bad),
                Err(ClassGridError::InvalidCoordinateToken { ref field, .. }) if field == "day"
            ));
        }
    }

    #[test]
    fn shift_labels_use_first_letter() {
        assert_eq!(decode_shift("M").unwrap(), Shift::Morning);
        assert_eq!(decode_shift("manhã").unwrap(), Shift::Morning);
        assert_eq!(decode_shift("t").unwrap(), Shift::Afternoon);
        assert_eq!(decode_shift("afternoon").unwrap(), Shift::Afternoon);
        assert_eq!(decode_shift("Noite").unwrap(), Shift::Night);
        assert_eq!(decode_shift("night").unwrap(), Shift::Night);
    }

    #[test]
    fn unknown_shifts_are_rejected() {
        for bad in ["", "  ", "X", "vespertino"] {
            assert!(matches!(
                decode_shift(bad),
                Err(ClassGridError::InvalidCoordinateToken { ref field, .. }) if field == "shift"
            ));
        }
    }

    #[test]
    fn encoding_is_canonical() {
        let coord = CellCoord::new(Day::Tuesday, Shift::Afternoon, Slot::Second);
        assert_eq!(encode(coord), WireCoord::new("terca", "T", "CD"));
    }
}
