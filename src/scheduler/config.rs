//! Engine configuration.

use serde::{Deserialize, Serialize};

/// Retry budgets and workload cap for the timetable engine.
///
/// The defaults reproduce the production behavior: 1000 attempts at each
/// of the three levels and a four-unit daily cap per teacher. Tests
/// shrink the budgets to keep infeasible inputs cheap; every budget is
/// treated as "at least one attempt", so a zero value still yields a
/// result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Full multi-section run attempts before returning a best effort.
    pub run_attempts: u32,
    /// Per-section rebuild attempts within one run attempt.
    pub section_attempts: u32,
    /// Reshuffle-and-rescan passes per free slot.
    pub slot_attempts: u32,
    /// Maximum occupancy units per teacher per day (a lab counts 2).
    pub daily_teacher_cap: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            run_attempts: 1000,
            section_attempts: 1000,
            slot_attempts: 1000,
            daily_teacher_cap: 4,
        }
    }
}

impl EngineConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the run attempt budget.
    pub fn with_run_attempts(mut self, attempts: u32) -> Self {
        self.run_attempts = attempts;
        self
    }

    /// Sets the per-section attempt budget.
    pub fn with_section_attempts(mut self, attempts: u32) -> Self {
        self.section_attempts = attempts;
        self
    }

    /// Sets the per-slot attempt budget.
    pub fn with_slot_attempts(mut self, attempts: u32) -> Self {
        self.slot_attempts = attempts;
        self
    }

    /// Sets the daily teacher workload cap.
    pub fn with_daily_teacher_cap(mut self, cap: u32) -> Self {
        self.daily_teacher_cap = cap;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.run_attempts, 1000);
        assert_eq!(config.section_attempts, 1000);
        assert_eq!(config.slot_attempts, 1000);
        assert_eq!(config.daily_teacher_cap, 4);
    }

    #[test]
    fn test_builder() {
        let config = EngineConfig::new()
            .with_run_attempts(5)
            .with_section_attempts(10)
            .with_slot_attempts(20)
            .with_daily_teacher_cap(3);
        assert_eq!(config.run_attempts, 5);
        assert_eq!(config.section_attempts, 10);
        assert_eq!(config.slot_attempts, 20);
        assert_eq!(config.daily_teacher_cap, 3);
    }
}
