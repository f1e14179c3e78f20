use crate::api::scheduling_dto::input_dto::CourseDto;
use crate::domain::utils::id::CourseId;

/// Parent course of one or more sections. Informational only, the engine never reads it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Course {
    pub id: CourseId,
    pub name: String,
}

impl From<CourseDto> for Course {
    fn from(dto: CourseDto) -> Self {
        Course { id: CourseId::new(dto.course_id), name: dto.name }
    }
}
