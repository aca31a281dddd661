//! Run-level orchestration.
//!
//! A run attempt schedules every section once, in input order, threading
//! one [`ConflictState`] through them so teacher conflicts and workload
//! accumulate across sections. If any section ends with free cells the
//! whole attempt is discarded and restarted from an empty conflict
//! state, up to the run budget; exhausting the budget returns the last
//! attempt's grids as a best effort.

use rand::Rng;

use crate::models::{ConflictState, Grid, Section, Timetable};

use super::config::EngineConfig;
use super::section::schedule_section;

/// Randomized timetable generator.
///
/// The engine is a pure function of its input sections and the supplied
/// random source: it holds no state across runs, performs no I/O, and is
/// fully synchronous. [`generate`](Self::generate) draws from the
/// process RNG; [`generate_with_rng`](Self::generate_with_rng) accepts a
/// seeded generator for reproducible output.
///
/// # Example
///
/// ```
/// use classgrid::models::{Section, SubjectRequirement};
/// use classgrid::scheduler::{EngineConfig, TimetableEngine};
///
/// let section = Section::new("Year 1.a")
///     .with_requirement(SubjectRequirement::new("Maths", "T4", 1).with_fixed_slot(1, 1));
/// let engine = TimetableEngine::new().with_config(EngineConfig::new().with_run_attempts(2));
///
/// let timetable = engine.generate(&[section]);
/// assert_eq!(timetable.grid(0).get(0, 0), Some(0));
/// ```
#[derive(Debug, Clone, Default)]
pub struct TimetableEngine {
    config: EngineConfig,
}

impl TimetableEngine {
    /// Creates an engine with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the engine configuration.
    pub fn with_config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    /// Generates a timetable using the process random source.
    pub fn generate(&self, sections: &[Section]) -> Timetable {
        self.generate_with_rng(sections, &mut rand::rng())
    }

    /// Generates a timetable from the given random source.
    ///
    /// Identical input and an identically seeded generator produce an
    /// identical timetable.
    pub fn generate_with_rng<R: Rng>(&self, sections: &[Section], rng: &mut R) -> Timetable {
        let mut attempt = 0;

        loop {
            attempt += 1;
            let mut conflicts = ConflictState::new();
            let grids: Vec<Grid> = sections
                .iter()
                .map(|section| schedule_section(section, &mut conflicts, &self.config, rng))
                .collect();

            let complete = grids.iter().all(Grid::is_complete);
            if complete || attempt >= self.config.run_attempts.max(1) {
                if !complete {
                    log::warn!(
                        "no complete timetable after {attempt} run attempts; returning best effort"
                    );
                }
                return Timetable {
                    grids,
                    complete,
                    attempts: attempt,
                };
            }
        }
    }
}
