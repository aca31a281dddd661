//! Per-section slot filler.
//!
//! Builds one section's grid against the shared conflict state.
//!
//! # Algorithm
//!
//! 1. Seed fixed requirements into their pinned cells.
//! 2. Expand the flexible requirements into a shuffled instance pool.
//! 3. Reserve two random rest-day periods (of periods 3–5) for
//!    activities, and pick one random weekday as the double-day where a
//!    subject may appear twice until the allowance is consumed.
//! 4. Fill days rest-day first, then Monday through Friday: per free
//!    slot, reshuffle the pool and place the first candidate passing the
//!    full check chain, retrying up to the per-slot budget.
//!
//! The rest day goes first because its rules are the tightest (no labs,
//! no language subjects, reserved activity periods) and should be
//! satisfied while the pool is least constrained. A slot whose budget or
//! pool runs out is left free; the orchestrators decide whether to retry
//! the whole section.

use rand::seq::{IndexedRandom, SliceRandom};
use rand::Rng;

use crate::models::{ConflictState, Grid, ReqId, Section, PERIODS, REST_DAY};

use super::config::EngineConfig;

/// Day processing order: rest day first, then the weekdays.
const DAY_ORDER: [usize; 6] = [REST_DAY, 0, 1, 2, 3, 4];

/// Rest-day periods eligible for the activity reservation.
const RESERVABLE_PERIODS: [usize; 3] = [2, 3, 4];

/// Runs one placement attempt for `section`, mutating `conflicts` in
/// place and returning the (possibly incomplete) grid.
///
/// Fixed slots are assumed in range; [`crate::validation`] checks that
/// upstream before the engine is invoked.
pub(crate) fn fill_grid<R: Rng>(
    section: &Section,
    conflicts: &mut ConflictState,
    config: &EngineConfig,
    rng: &mut R,
) -> Grid {
    let mut grid = Grid::new();
    seed_fixed(section, &mut grid, conflicts);

    let mut pool = section.flexible_pool();
    let reserved: Vec<usize> = RESERVABLE_PERIODS
        .choose_multiple(rng, 2)
        .copied()
        .collect();

    let double_day = rng.random_range(0..REST_DAY);
    let mut double_day_available = true;

    for &day in &DAY_ORDER {
        for period in 0..PERIODS {
            if !grid.is_free(day, period) {
                continue;
            }

            let mut placed = false;
            let mut attempts = 0;
            while !placed && attempts < config.slot_attempts.max(1) {
                attempts += 1;
                if pool.is_empty() {
                    log::debug!(
                        "{}: pool exhausted at day {day} period {period}",
                        section.label
                    );
                    break;
                }
                pool.shuffle(rng);
                placed = try_place(
                    section,
                    &mut grid,
                    conflicts,
                    &mut pool,
                    day,
                    period,
                    &reserved,
                    double_day,
                    &mut double_day_available,
                    config.daily_teacher_cap,
                );
            }
            if !placed && !pool.is_empty() {
                log::debug!(
                    "{}: slot budget exhausted at day {day} period {period}",
                    section.label
                );
            }
        }
    }

    grid
}

/// Seeds every fixed requirement: cell write, busy mark, workload charge
/// (2 units for labs). Fixed placements bypass the flexible-placement
/// rules entirely.
fn seed_fixed(section: &Section, grid: &mut Grid, conflicts: &mut ConflictState) {
    for (id, req) in section.fixed() {
        let (Some(day), Some(period)) = (req.fixed_day, req.fixed_period) else {
            continue;
        };
        let day = day as usize - 1;
        let period = period as usize - 1;
        grid.set(day, period, id);
        conflicts.mark_busy(day, period, &req.teacher);
        conflicts.add_load(day, &req.teacher, req.unit_cost());
    }
}

/// Scans the pool in its current order and places the first candidate
/// satisfying every placement rule for `(day, period)`. Returns whether
/// a placement happened.
#[allow(clippy::too_many_arguments)]
fn try_place(
    section: &Section,
    grid: &mut Grid,
    conflicts: &mut ConflictState,
    pool: &mut Vec<ReqId>,
    day: usize,
    period: usize,
    reserved: &[usize],
    double_day: usize,
    double_day_available: &mut bool,
    daily_cap: u32,
) -> bool {
    for i in 0..pool.len() {
        let id = pool[i];
        let req = section.requirement(id);

        // Per-day subject limit: 1, or 2 on the double-day while the
        // allowance is unconsumed. Activities stay capped at 1.
        let k = if day == double_day && *double_day_available {
            2
        } else {
            1
        };
        let day_count = grid.subject_count_in_day(section, day, &req.name);
        if day_count >= k {
            continue;
        }
        if req.is_activity && day_count >= 1 {
            continue;
        }

        if conflicts.daily_load(day, &req.teacher) + req.unit_cost() > daily_cap {
            continue;
        }
        if period == 0 && req.is_activity {
            continue;
        }
        if day == REST_DAY {
            if req.is_language {
                continue;
            }
            let in_reserved = reserved.contains(&period);
            if in_reserved && !req.is_activity {
                continue;
            }
            if req.is_activity && !in_reserved {
                continue;
            }
        }

        if req.is_lab {
            if day == REST_DAY {
                continue;
            }
            if grid.day_has_lab(section, day) {
                continue;
            }
            // Labs need this period and the next, both free of the teacher.
            if period + 1 >= PERIODS || !grid.is_free(day, period + 1) {
                continue;
            }
            if conflicts.is_busy(day, period, &req.teacher)
                || conflicts.is_busy(day, period + 1, &req.teacher)
            {
                continue;
            }

            grid.set(day, period, id);
            grid.set(day, period + 1, id);
            conflicts.mark_busy(day, period, &req.teacher);
            conflicts.mark_busy(day, period + 1, &req.teacher);
            conflicts.add_load(day, &req.teacher, 2);
            pool.swap_remove(i);
            return true;
        }

        if conflicts.is_busy(day, period, &req.teacher) {
            continue;
        }

        grid.set(day, period, id);
        conflicts.mark_busy(day, period, &req.teacher);
        conflicts.add_load(day, &req.teacher, 1);
        if day == double_day && *double_day_available && day_count + 1 >= 2 {
            // A subject just reached its second slot today; the one-day
            // allowance is consumed for the rest of this attempt.
            *double_day_available = false;
        }
        pool.swap_remove(i);
        return true;
    }

    false
}
