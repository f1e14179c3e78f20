//! Semantic checks on a parsed input snapshot.
//!
//! Structural problems (bad JSON, missing fields) are caught by the parser.
//! This module rejects values that parse but make no sense for scheduling:
//! - Negative lab capacity
//! - Negative expected enrollment
//! - Negative sessions per week
//!
//! Duplicate ids are reported as warnings only. Occupancy is keyed by id, so
//! duplicates simply share their bookings.

use std::collections::HashSet;

use crate::api::scheduling_dto::input_dto::SchedulingInputDto;
use crate::error::{Error, Result};

/// Validates the input snapshot.
///
/// # Returns
/// `Ok(())` if all checks pass, otherwise `Error::ValidationError` listing every violation.
pub fn validate_input(dto: &SchedulingInputDto) -> Result<()> {
    let mut violations = Vec::new();

    for lab in &dto.labs {
        if lab.capacity < 0 {
            violations.push(format!("lab {} has negative capacity {}", lab.lab_id, lab.capacity));
        }
    }

    for section in &dto.sections {
        if section.capacity < 0 {
            violations.push(format!("section {} has negative expected enrollment {}", section.section_id, section.capacity));
        }
        if section.labs_per_week < 0 {
            violations.push(format!("section {} has negative labs_per_week {}", section.section_id, section.labs_per_week));
        }
    }

    warn_on_duplicates("lab", dto.labs.iter().map(|l| l.lab_id));
    warn_on_duplicates("course", dto.courses.iter().map(|c| c.course_id));
    warn_on_duplicates("section", dto.sections.iter().map(|s| s.section_id));
    if let Some(faculty) = &dto.faculty_users {
        warn_on_duplicates("faculty", faculty.iter().map(|f| f.user_id));
    }

    let known_courses: HashSet<i64> = dto.courses.iter().map(|c| c.course_id).collect();
    for section in &dto.sections {
        if !known_courses.contains(&section.course_id) {
            log::debug!("Section {} references course {} which is not part of the input.", section.section_id, section.course_id);
        }
    }

    if violations.is_empty() { Ok(()) } else { Err(Error::ValidationError(violations.join("; "))) }
}

fn warn_on_duplicates(kind: &str, ids: impl Iterator<Item = i64>) {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            log::warn!("Duplicate {} id {} in input; entries with the same id share occupancy.", kind, id);
        }
    }
}
