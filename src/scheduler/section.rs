//! Section-level retry orchestration.
//!
//! Wraps the slot filler in a bounded retry loop with an explicit
//! commit-or-rollback contract: each attempt runs against a clone of the
//! conflict state as it stood *before this section's first attempt*, so
//! a failed attempt leaks nothing, while conflicts committed by earlier
//! sections in the run attempt stay in force.

use rand::Rng;

use crate::models::{ConflictState, Grid, Section};

use super::config::EngineConfig;
use super::filler::fill_grid;

/// Builds `section`'s grid, retrying from scratch (fresh grid, fresh
/// pool, rolled-back conflict state) while the result has free cells and
/// the section budget lasts. The accepted attempt's conflict state —
/// complete or not — is committed back into `conflicts`.
pub(crate) fn schedule_section<R: Rng>(
    section: &Section,
    conflicts: &mut ConflictState,
    config: &EngineConfig,
    rng: &mut R,
) -> Grid {
    let snapshot = conflicts.clone();
    let mut attempt = 0;

    loop {
        attempt += 1;
        let mut trial = snapshot.clone();
        let grid = fill_grid(section, &mut trial, config, rng);

        if grid.is_complete() || attempt >= config.section_attempts.max(1) {
            if !grid.is_complete() {
                log::debug!(
                    "{}: {} free cells after {attempt} attempts",
                    section.label,
                    grid.free_cells()
                );
            }
            *conflicts = trial;
            return grid;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{SubjectRequirement, DAYS, PERIODS, REST_DAY};
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn small_config() -> EngineConfig {
        EngineConfig::new()
            .with_section_attempts(3)
            .with_slot_attempts(5)
    }

    /// A section whose every fill attempt provably completes: 28 distinct
    /// single-instance core subjects plus two activities to cover the
    /// reserved rest-day periods, all with distinct teachers.
    fn always_complete_section() -> Section {
        let mut section = Section::new("full");
        for i in 0..28 {
            section = section
                .with_requirement(SubjectRequirement::new(format!("S{i}"), format!("T{i}"), 1));
        }
        section
            .with_requirement(SubjectRequirement::new("Sports", "TA", 1).with_activity())
            .with_requirement(SubjectRequirement::new("Library", "TB", 1).with_activity())
    }

    #[test]
    fn test_complete_section_commits_conflicts() {
        let section = always_complete_section();
        let mut conflicts = ConflictState::new();
        let mut rng = SmallRng::seed_from_u64(42);

        let grid = schedule_section(&section, &mut conflicts, &small_config(), &mut rng);

        assert!(grid.is_complete());
        // Every placement was committed: 30 units across the week.
        let total: u32 = (0..DAYS)
            .map(|day| {
                (0..28)
                    .map(|i| conflicts.daily_load(day, &format!("T{i}")))
                    .sum::<u32>()
                    + conflicts.daily_load(day, "TA")
                    + conflicts.daily_load(day, "TB")
            })
            .sum();
        assert_eq!(total, 30);
    }

    #[test]
    fn test_incomplete_section_commits_only_accepted_attempt() {
        // One instance can never fill the grid; after the budget runs
        // out, the committed state holds exactly that single placement
        // on top of the pre-existing snapshot.
        let section =
            Section::new("sparse").with_requirement(SubjectRequirement::new("Maths", "T4", 1));
        let mut conflicts = ConflictState::new();
        conflicts.mark_busy(0, 0, "Prior");
        conflicts.add_load(0, "Prior", 1);
        let mut rng = SmallRng::seed_from_u64(42);

        let grid = schedule_section(&section, &mut conflicts, &small_config(), &mut rng);

        assert!(!grid.is_complete());
        assert_eq!(grid.free_cells(), DAYS * PERIODS - 1);
        // Prior sections' contribution survives the retries.
        assert!(conflicts.is_busy(0, 0, "Prior"));
        assert_eq!(conflicts.daily_load(0, "Prior"), 1);
        // Exactly one unit of this section's teacher was committed.
        let t4_total: u32 = (0..DAYS).map(|d| conflicts.daily_load(d, "T4")).sum();
        assert_eq!(t4_total, 1);
    }

    #[test]
    fn test_prior_conflicts_constrain_placement() {
        // The committed grid never overlaps a slot where its teacher was
        // already booked by an earlier section.
        let section =
            Section::new("s").with_requirement(SubjectRequirement::new("OS", "T5", 3));
        let mut conflicts = ConflictState::new();
        for period in 0..PERIODS {
            conflicts.mark_busy(REST_DAY, period, "T5");
        }
        let mut rng = SmallRng::seed_from_u64(9);

        let grid = schedule_section(&section, &mut conflicts, &small_config(), &mut rng);

        for period in 0..PERIODS {
            assert!(grid.is_free(REST_DAY, period));
        }
    }
}
