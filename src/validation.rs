//! Input validation for timetable generation.
//!
//! Checks structural integrity of sections and requirements before the
//! engine runs. Detects:
//! - Fixed slots outside the 6×5 grid
//! - Two fixed requirements pinned to the same cell of a section
//! - The same teacher pinned to the same day/period in two sections
//! - Empty sections
//! - Flexible requirements with a zero repeat count (silently inert)
//! - Requirement totals that cannot exactly fill a section's 30 cells
//!
//! Validation is advisory and external to the engine: the engine treats
//! malformed input as a precondition violation and never validates on
//! its own.

use std::collections::HashMap;

use crate::models::{Section, DAYS, PERIODS};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// A fixed day or period falls outside the grid.
    FixedSlotOutOfBounds,
    /// Two fixed requirements of one section share a cell.
    DuplicateFixedSlot,
    /// One teacher is pinned to the same day/period in two sections.
    FixedTeacherClash,
    /// A section has no requirements.
    EmptySection,
    /// A flexible requirement with `repeat == 0` contributes nothing.
    ZeroRepeat,
    /// A section's placements cannot exactly fill its grid.
    UnitTotalMismatch,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates engine input.
///
/// Checks:
/// 1. Every fixed day is in 1..=6 and every fixed period in 1..=5
/// 2. No two fixed requirements of a section share a cell
/// 3. No teacher is pinned to one day/period by two sections
/// 4. Every section has at least one requirement
/// 5. No flexible requirement has `repeat == 0`
/// 6. Every section's cell total is exactly 30 (a fixed requirement
///    seeds one cell; a flexible one contributes `repeat` cells, twice
///    that for labs)
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_sections(sections: &[Section]) -> ValidationResult {
    let mut errors = Vec::new();
    // (day, period, teacher) → section label, for cross-section clashes.
    let mut pinned: HashMap<(u8, u8, &str), &str> = HashMap::new();

    for section in sections {
        if section.requirements.is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptySection,
                format!("Section '{}' has no requirements", section.label),
            ));
        }

        let mut cells_seen: HashMap<(u8, u8), &str> = HashMap::new();
        let mut cell_total: u64 = 0;

        for req in &section.requirements {
            if !req.is_fixed() {
                if req.repeat == 0 {
                    errors.push(ValidationError::new(
                        ValidationErrorKind::ZeroRepeat,
                        format!(
                            "'{}' in section '{}' is flexible with repeat 0",
                            req.name, section.label
                        ),
                    ));
                }
                cell_total += u64::from(req.repeat) * u64::from(req.unit_cost());
                continue;
            }

            let (Some(day), Some(period)) = (req.fixed_day, req.fixed_period) else {
                continue;
            };
            if !(1..=DAYS as u8).contains(&day) || !(1..=PERIODS as u8).contains(&period) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::FixedSlotOutOfBounds,
                    format!(
                        "'{}' in section '{}' is pinned to day {day}, period {period}",
                        req.name, section.label
                    ),
                ));
                continue;
            }
            cell_total += 1;

            if let Some(other) = cells_seen.insert((day, period), &req.name) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::DuplicateFixedSlot,
                    format!(
                        "Section '{}' pins both '{other}' and '{}' to day {day}, period {period}",
                        section.label, req.name
                    ),
                ));
            }

            if let Some(other_section) =
                pinned.insert((day, period, req.teacher.as_str()), &section.label)
            {
                if other_section != section.label {
                    errors.push(ValidationError::new(
                        ValidationErrorKind::FixedTeacherClash,
                        format!(
                            "Teacher '{}' is pinned to day {day}, period {period} by sections \
                             '{other_section}' and '{}'",
                            req.teacher, section.label
                        ),
                    ));
                }
            }
        }

        let grid_cells = (DAYS * PERIODS) as u64;
        if !section.requirements.is_empty() && cell_total != grid_cells {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnitTotalMismatch,
                format!(
                    "Section '{}' supplies {cell_total} cells for a {grid_cells}-cell grid",
                    section.label
                ),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
