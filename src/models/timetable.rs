//! Timetable (run output) model.
//!
//! A [`Timetable`] is the result of one engine run: one grid per input
//! section, a completeness flag, and the number of run attempts
//! consumed. An incomplete timetable is a valid best-effort result, not
//! an error.

use serde::{Deserialize, Serialize};

use super::grid::Grid;

/// The output of a full engine run.
///
/// Grids are index-aligned with the input sections. `complete` is true
/// when every grid is fully occupied; otherwise the grids are the last
/// attempt's best effort and may contain free cells.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timetable {
    /// One grid per section, in input order.
    pub grids: Vec<Grid>,
    /// Whether every grid is fully occupied.
    pub complete: bool,
    /// Run attempts consumed (1-based; 1 means the first attempt held).
    pub attempts: u32,
}

impl Timetable {
    /// The grid for section `index`.
    #[inline]
    pub fn grid(&self, index: usize) -> &Grid {
        &self.grids[index]
    }

    /// Total free cells remaining across all sections.
    pub fn free_cells(&self) -> usize {
        self.grids.iter().map(Grid::free_cells).sum()
    }
}
