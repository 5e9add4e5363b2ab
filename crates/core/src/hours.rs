//! Scheduled-hours aggregation
//!
//! Hours are always derived from the grid: every occupied cell credits
//! [`HOURS_PER_CELL`] hours to its subject-teacher pair. The summary is
//! recomputed after each grid change and never patched in place.

use std::collections::BTreeMap;

use classgrid_domain::constants::HOURS_PER_CELL;
use classgrid_domain::Grid;
use serde::Serialize;

/// Total hours per pair label, sorted by label.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct HoursSummary {
    hours: BTreeMap<String, u32>,
}

/// One line of the hours table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HoursRow {
    /// Pair label, `"{subjectCode} - {teacherName}"`.
    pub pair: String,
    /// Total scheduled hours.
    pub hours: u32,
}

impl HoursRow {
    /// Hours formatted for display, e.g. `"120 hrs"`.
    #[must_use]
    pub fn hours_text(&self) -> String {
        format!("{} hrs", self.hours)
    }
}

/// Compute the hours summary of a grid.
#[must_use]
pub fn aggregate(grid: &Grid) -> HoursSummary {
    let mut hours = BTreeMap::new();
    for assignment in grid.occupied() {
        *hours.entry(assignment.pair_label()).or_insert(0) += HOURS_PER_CELL;
    }
    HoursSummary { hours }
}

impl HoursSummary {
    /// Hours of one pair label.
    #[must_use]
    pub fn get(&self, pair: &str) -> Option<u32> {
        self.hours.get(pair).copied()
    }

    /// Number of distinct pairs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.hours.len()
    }

    /// Whether nothing is scheduled.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.hours.is_empty()
    }

    /// Pairs and their hours, sorted by label.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.hours.iter().map(|(pair, hours)| (pair.as_str(), *hours))
    }

    /// Sum over all pairs.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.hours.values().sum()
    }

    /// Underlying label-to-hours map.
    #[must_use]
    pub const fn as_map(&self) -> &BTreeMap<String, u32> {
        &self.hours
    }

    /// One row per pair, sorted by label.
    #[must_use]
    pub fn rows(&self) -> Vec<HoursRow> {
        self.iter().map(|(pair, hours)| HoursRow { pair: pair.to_string(), hours }).collect()
    }

    /// Rows to render, or `None` when the table should be omitted.
    #[must_use]
    pub fn view(&self) -> Option<Vec<HoursRow>> {
        if self.is_empty() {
            None
        } else {
            Some(self.rows())
        }
    }
}

impl From<HoursSummary> for BTreeMap<String, u32> {
    fn from(summary: HoursSummary) -> Self {
        summary.hours
    }
}
