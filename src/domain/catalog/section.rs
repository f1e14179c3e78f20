use crate::api::scheduling_dto::input_dto::SectionDto;
use crate::domain::utils::id::{CourseId, SectionId};

/// A course section that needs weekly lab sessions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub id: SectionId,
    pub course_id: CourseId,
    pub name: String,
    pub course_name: String,
    pub expected_enrollment: i64,
    pub sessions_per_week: i64,
}

impl Section {
    pub fn new(id: SectionId, course_id: CourseId, name: impl Into<String>, course_name: impl Into<String>) -> Self {
        Section { id, course_id, name: name.into(), course_name: course_name.into(), expected_enrollment: 30, sessions_per_week: 1 }
    }

    pub fn with_expected_enrollment(mut self, expected_enrollment: i64) -> Self {
        self.expected_enrollment = expected_enrollment;
        self
    }

    pub fn with_sessions_per_week(mut self, sessions_per_week: i64) -> Self {
        self.sessions_per_week = sessions_per_week;
        self
    }

    /// Human readable purpose stamped on every booking of this section.
    pub fn booking_purpose(&self) -> String {
        format!("Lab for {} - Section {}", self.course_name, self.name)
    }
}

impl From<SectionDto> for Section {
    fn from(dto: SectionDto) -> Self {
        Section {
            id: SectionId::new(dto.section_id),
            course_id: CourseId::new(dto.course_id),
            name: dto.name,
            course_name: dto.course_name,
            expected_enrollment: dto.capacity,
            sessions_per_week: dto.labs_per_week,
        }
    }
}
