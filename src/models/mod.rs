//! Timetabling domain models.
//!
//! Core data types for weekly class-period scheduling:
//!
//! | Type | Role |
//! |------|------|
//! | [`SubjectRequirement`] | subject/teacher pair with repeat count, flags, optional fixed slot |
//! | [`Section`] | one independently scheduled group and its requirement list |
//! | [`Grid`] | a section's 6-day × 5-period matrix of nullable requirement refs |
//! | [`ConflictState`] | cross-section teacher occupancy and daily workload |
//! | [`Timetable`] | run output: grids, completeness, attempts consumed |

mod conflict;
mod grid;
mod requirement;
mod timetable;

pub use conflict::ConflictState;
pub use grid::{Grid, DAYS, PERIODS, REST_DAY};
pub use requirement::{ReqId, Section, SubjectRequirement};
pub use timetable::Timetable;
