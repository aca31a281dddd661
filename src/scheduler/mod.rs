//! Randomized timetable generation.
//!
//! # Algorithm
//!
//! [`TimetableEngine`] drives up to `run_attempts` full passes over the
//! input sections. Within a pass, each section's grid is built by a
//! randomized first-fit slot filler with bounded per-slot retries, and
//! rebuilt from a conflict-state snapshot while it comes back
//! incomplete. This is a Las Vegas heuristic: it offers no feasibility
//! guarantee and degrades to a best-effort partial timetable when the
//! budgets run out.

mod config;
mod filler;
mod run;
mod section;

pub use config::EngineConfig;
pub use run::TimetableEngine;
