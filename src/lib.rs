//! Randomized weekly timetable generation.
//!
//! Assigns class periods to subject/teacher pairs across independent
//! sections so that each section's 6-day × 5-period grid fills up, no
//! teacher is double-booked across sections, daily workloads stay
//! capped, and subject placement rules (lab contiguity, activity
//! periods, language-day restrictions, pre-fixed slots) hold.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `SubjectRequirement`, `Section`,
//!   `Grid`, `ConflictState`, `Timetable`
//! - **`scheduler`**: The engine — `TimetableEngine`, `EngineConfig`
//! - **`report`**: Derived views — text rendering, teacher pivot
//! - **`validation`**: Input integrity checks (fixed-slot bounds,
//!   pinned-cell clashes, grid cell totals)
//!
//! # Design
//!
//! The engine is a Las Vegas heuristic, not a constraint solver: it
//! places randomly with bounded retries at the slot, section, and run
//! level, and returns a best-effort partial timetable when the budgets
//! run out. Infeasibility is a reportable outcome, never an error. All
//! randomness flows through a caller-suppliable `rand::Rng`, so runs
//! are reproducible under a fixed seed.

pub mod models;
pub mod report;
pub mod scheduler;
pub mod validation;
