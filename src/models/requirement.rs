//! Subject requirement and section models.
//!
//! A [`SubjectRequirement`] is one row of a section's weekly plan: a
//! subject/teacher pair with a repeat count, category flags, and an
//! optional pre-fixed slot. A [`Section`] is an ordered list of
//! requirements sharing one weekly grid.

use serde::{Deserialize, Serialize};

/// Index of a requirement within its section's requirement list.
///
/// Grid cells and pool instances store `ReqId` rather than copies of the
/// requirement, so two cells referencing the same requirement compare
/// equal by identity (lab pairing relies on this) while per-day subject
/// limits compare by name through the section.
pub type ReqId = usize;

/// A subject/teacher pair to be placed into a section's weekly grid.
///
/// A requirement with both `fixed_day` and `fixed_period` set is *fixed*:
/// it is seeded exactly once at that slot and its `repeat` is ignored.
/// Any other requirement is *flexible* and contributes `repeat`
/// interchangeable instances to the placement pool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubjectRequirement {
    /// Subject name. Per-day placement limits count cells by this name.
    pub name: String,
    /// Teacher name. Conflict tracking and workload caps key on this.
    pub teacher: String,
    /// Weekly instance count for flexible requirements.
    #[serde(default)]
    pub repeat: u32,
    /// Lab: occupies two adjacent periods, never on the rest day.
    #[serde(default)]
    pub is_lab: bool,
    /// Activity (sports, library): at most one period per day, never the
    /// first period, confined to reserved periods on the rest day.
    #[serde(default)]
    pub is_activity: bool,
    /// Language subject: never placed on the rest day.
    #[serde(default)]
    pub is_language: bool,
    /// Fixed day, 1-based (1..=6).
    #[serde(default)]
    pub fixed_day: Option<u8>,
    /// Fixed period, 1-based (1..=5).
    #[serde(default)]
    pub fixed_period: Option<u8>,
}

impl SubjectRequirement {
    /// Creates a flexible requirement with the given weekly repeat count.
    pub fn new(name: impl Into<String>, teacher: impl Into<String>, repeat: u32) -> Self {
        Self {
            name: name.into(),
            teacher: teacher.into(),
            repeat,
            is_lab: false,
            is_activity: false,
            is_language: false,
            fixed_day: None,
            fixed_period: None,
        }
    }

    /// Marks this requirement as a lab.
    pub fn with_lab(mut self) -> Self {
        self.is_lab = true;
        self
    }

    /// Marks this requirement as an activity.
    pub fn with_activity(mut self) -> Self {
        self.is_activity = true;
        self
    }

    /// Marks this requirement as a language subject.
    pub fn with_language(mut self) -> Self {
        self.is_language = true;
        self
    }

    /// Pins this requirement to a fixed slot (1-based day and period).
    pub fn with_fixed_slot(mut self, day: u8, period: u8) -> Self {
        self.fixed_day = Some(day);
        self.fixed_period = Some(period);
        self
    }

    /// Whether this requirement is fixed (both day and period set).
    pub fn is_fixed(&self) -> bool {
        self.fixed_day.is_some() && self.fixed_period.is_some()
    }

    /// Occupancy units one placement of this requirement costs a teacher
    /// (2 for labs, 1 otherwise).
    #[inline]
    pub fn unit_cost(&self) -> u32 {
        if self.is_lab {
            2
        } else {
            1
        }
    }
}

/// One independently scheduled group (class/year/stream) with its own
/// grid and requirement list.
///
/// Sections are mutually ordered: the engine processes them in input
/// order and teacher conflicts propagate from earlier to later sections
/// within a run attempt.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Display label ("Year 2.b", "1st MCA", ...).
    pub label: String,
    /// Requirements, addressed by [`ReqId`].
    pub requirements: Vec<SubjectRequirement>,
}

impl Section {
    /// Creates an empty section.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            requirements: Vec::new(),
        }
    }

    /// Adds a requirement.
    pub fn with_requirement(mut self, requirement: SubjectRequirement) -> Self {
        self.requirements.push(requirement);
        self
    }

    /// Looks up a requirement by id.
    #[inline]
    pub fn requirement(&self, id: ReqId) -> &SubjectRequirement {
        &self.requirements[id]
    }

    /// Iterates the fixed requirements with their ids.
    pub fn fixed(&self) -> impl Iterator<Item = (ReqId, &SubjectRequirement)> {
        self.requirements
            .iter()
            .enumerate()
            .filter(|(_, r)| r.is_fixed())
    }

    /// Expands the flexible requirements into the placement pool:
    /// `repeat` instances per requirement, all referencing the same id.
    pub fn flexible_pool(&self) -> Vec<ReqId> {
        let mut pool = Vec::new();
        for (id, req) in self.requirements.iter().enumerate() {
            if !req.is_fixed() {
                pool.extend(std::iter::repeat(id).take(req.repeat as usize));
            }
        }
        pool
    }
}
