//! Derived views over a generated timetable.
//!
//! The engine's consumers render day/period tables and export a
//! teacher-centric pivot; this module derives both from the grids
//! without owning any file format. [`render_section`] produces a plain
//! text table with lab pairs collapsed into one span, and
//! [`teacher_view`] lists every teacher's occupied slots across all
//! sections.

use std::collections::BTreeMap;
use std::fmt::Write;

use serde::{Deserialize, Serialize};

use crate::models::{Grid, Section, Timetable, DAYS, PERIODS};

/// Day labels in grid order.
pub const DAY_NAMES: [&str; DAYS] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// One occupied slot from a teacher's point of view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeacherSlot {
    /// Index of the section in the engine input.
    pub section: usize,
    /// Day index (0 = Monday).
    pub day: usize,
    /// Period index (0-based). A lab is reported once, at its first
    /// period.
    pub period: usize,
    /// Subject name.
    pub subject: String,
    /// Whether the slot is a two-period lab.
    pub is_lab: bool,
}

/// Pivots the timetable by teacher: for every teacher, the slots they
/// occupy across all sections, in section/day/period order.
///
/// The second cell of a lab pair is skipped, matching how the slot is
/// taught rather than how it is stored.
pub fn teacher_view(
    sections: &[Section],
    timetable: &Timetable,
) -> BTreeMap<String, Vec<TeacherSlot>> {
    let mut view: BTreeMap<String, Vec<TeacherSlot>> = BTreeMap::new();

    for (index, (section, grid)) in sections.iter().zip(&timetable.grids).enumerate() {
        for day in 0..DAYS {
            for period in 0..PERIODS {
                let Some(id) = grid.get(day, period) else {
                    continue;
                };
                let req = section.requirement(id);
                if req.is_lab && period > 0 && grid.get(day, period - 1) == Some(id) {
                    // Lab continuation cell.
                    continue;
                }
                view.entry(req.teacher.clone()).or_default().push(TeacherSlot {
                    section: index,
                    day,
                    period,
                    subject: req.name.clone(),
                    is_lab: req.is_lab,
                });
            }
        }
    }

    view
}

/// Renders one section's grid as a plain text table, one day per row.
///
/// A lab's two cells are collapsed into a single `(Lab)` span; free
/// cells render as `Free`.
pub fn render_section(section: &Section, grid: &Grid) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "== {} ==", section.label);

    for day in 0..DAYS {
        let mut cells = Vec::new();
        let mut period = 0;
        while period < PERIODS {
            match grid.get(day, period) {
                Some(id) => {
                    let req = section.requirement(id);
                    let spans_next =
                        period + 1 < PERIODS && grid.get(day, period + 1) == Some(id);
                    if req.is_lab && spans_next {
                        cells.push(format!("{} - {} (Lab)", req.name, req.teacher));
                        period += 2;
                    } else {
                        cells.push(format!("{} - {}", req.name, req.teacher));
                        period += 1;
                    }
                }
                None => {
                    cells.push("Free".to_string());
                    period += 1;
                }
            }
        }
        let _ = writeln!(out, "{:<9} | {}", DAY_NAMES[day], cells.join(" | "));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SubjectRequirement;

    fn sample() -> (Vec<Section>, Timetable) {
        let section = Section::new("Year 1.a")
            .with_requirement(SubjectRequirement::new("Maths", "T4", 1))
            .with_requirement(SubjectRequirement::new("ML Lab", "T2", 1).with_lab())
            .with_requirement(SubjectRequirement::new("OS", "T5", 1));

        let mut grid = Grid::new();
        grid.set(0, 0, 0);
        grid.set(0, 1, 1);
        grid.set(0, 2, 1);
        grid.set(2, 4, 2);

        let other = Section::new("Year 1.b")
            .with_requirement(SubjectRequirement::new("Algorithms", "T4", 1));
        let mut other_grid = Grid::new();
        other_grid.set(1, 3, 0);

        (
            vec![section, other],
            Timetable {
                grids: vec![grid, other_grid],
                complete: false,
                attempts: 1,
            },
        )
    }

    #[test]
    fn test_teacher_view_collects_across_sections() {
        let (sections, timetable) = sample();
        let view = teacher_view(&sections, &timetable);

        // T4 teaches in both sections.
        let t4 = &view["T4"];
        assert_eq!(t4.len(), 2);
        assert_eq!((t4[0].section, t4[0].day, t4[0].period), (0, 0, 0));
        assert_eq!((t4[1].section, t4[1].day, t4[1].period), (1, 1, 3));
        assert_eq!(t4[1].subject, "Algorithms");
    }

    #[test]
    fn test_teacher_view_reports_lab_once() {
        let (sections, timetable) = sample();
        let view = teacher_view(&sections, &timetable);

        let t2 = &view["T2"];
        assert_eq!(t2.len(), 1);
        assert_eq!(t2[0].period, 1);
        assert!(t2[0].is_lab);
    }

    #[test]
    fn test_render_collapses_lab_span() {
        let (sections, timetable) = sample();
        let text = render_section(&sections[0], timetable.grid(0));

        assert!(text.contains("== Year 1.a =="));
        assert!(text.contains("Maths - T4"));
        assert!(text.contains("ML Lab - T2 (Lab)"));
        // The lab renders once: Monday shows 4 columns, not 5.
        let monday = text.lines().find(|l| l.starts_with("Monday")).unwrap();
        assert_eq!(monday.matches(" | ").count(), 4);
        assert_eq!(monday.matches("Free").count(), 2);
    }

    #[test]
    fn test_adjacent_double_placement_is_not_a_lab_span() {
        // On the double-day a subject may occupy two adjacent periods
        // with the same requirement id; only labs collapse into a span.
        let section = Section::new("s")
            .with_requirement(SubjectRequirement::new("Maths", "T4", 2));
        let mut grid = Grid::new();
        grid.set(0, 0, 0);
        grid.set(0, 1, 0);
        let timetable = Timetable {
            grids: vec![grid],
            complete: false,
            attempts: 1,
        };

        let view = teacher_view(std::slice::from_ref(&section), &timetable);
        assert_eq!(view["T4"].len(), 2);

        let text = render_section(&section, timetable.grid(0));
        let monday = text.lines().find(|l| l.starts_with("Monday")).unwrap();
        assert_eq!(monday.matches("Maths - T4").count(), 2);
        assert!(!monday.contains("(Lab)"));
    }

    #[test]
    fn test_render_free_rows() {
        let (sections, timetable) = sample();
        let text = render_section(&sections[0], timetable.grid(0));

        let saturday = text.lines().find(|l| l.starts_with("Saturday")).unwrap();
        assert_eq!(saturday.matches("Free").count(), 5);
    }
}
