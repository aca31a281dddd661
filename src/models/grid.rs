//! Weekly grid model.
//!
//! A [`Grid`] is one section's day × period matrix. Cells hold the
//! [`ReqId`] of the occupying requirement or `None` while free. A lab
//! occupies two adjacent same-day cells carrying the same id.

use serde::{Deserialize, Serialize};

use super::requirement::{ReqId, Section};

/// Days per week.
pub const DAYS: usize = 6;
/// Periods per day.
pub const PERIODS: usize = 5;
/// The rest day (Saturday): no labs, no language subjects, two periods
/// reserved for activities. Processed first by the filler.
pub const REST_DAY: usize = 5;

/// A section's weekly grid: 6 days × 5 periods of nullable requirement
/// references.
///
/// Created empty per attempt and mutated only by the slot filler.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    cells: [[Option<ReqId>; PERIODS]; DAYS],
}

impl Grid {
    /// Creates an empty grid.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the occupant of `(day, period)`, if any.
    #[inline]
    pub fn get(&self, day: usize, period: usize) -> Option<ReqId> {
        self.cells[day][period]
    }

    /// Writes `id` into `(day, period)`.
    #[inline]
    pub fn set(&mut self, day: usize, period: usize, id: ReqId) {
        self.cells[day][period] = Some(id);
    }

    /// Whether `(day, period)` is still free.
    #[inline]
    pub fn is_free(&self, day: usize, period: usize) -> bool {
        self.cells[day][period].is_none()
    }

    /// One day's row of cells.
    #[inline]
    pub fn day(&self, day: usize) -> &[Option<ReqId>; PERIODS] {
        &self.cells[day]
    }

    /// Number of free cells remaining.
    pub fn free_cells(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| cell.is_none())
            .count()
    }

    /// Whether every cell is occupied.
    pub fn is_complete(&self) -> bool {
        self.free_cells() == 0
    }

    /// Counts the cells in `day` whose occupant shares `name`.
    ///
    /// Both cells of a lab count, matching how the per-day subject limit
    /// is enforced.
    pub fn subject_count_in_day(&self, section: &Section, day: usize, name: &str) -> usize {
        self.cells[day]
            .iter()
            .flatten()
            .filter(|&&id| section.requirement(id).name == name)
            .count()
    }

    /// Whether `day` already contains a lab placement.
    pub fn day_has_lab(&self, section: &Section, day: usize) -> bool {
        self.cells[day]
            .iter()
            .flatten()
            .any(|&id| section.requirement(id).is_lab)
    }
}
