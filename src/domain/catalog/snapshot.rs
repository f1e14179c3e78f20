use crate::api::scheduling_dto::input_dto::SchedulingInputDto;
use crate::domain::catalog::{ResourceCatalog, course::Course, faculty::Faculty, lab::Lab, section::Section, validation::validate_input};
use crate::error::Error;

/// Typed view of one input document: the resource catalog plus the demand to place.
#[derive(Debug, Clone)]
pub struct SchedulingSnapshot {
    pub catalog: ResourceCatalog,
    pub courses: Vec<Course>,
    pub sections: Vec<Section>,
}

impl TryFrom<SchedulingInputDto> for SchedulingSnapshot {
    type Error = Error;

    fn try_from(dto: SchedulingInputDto) -> Result<Self, Self::Error> {
        validate_input(&dto)?;

        let labs: Vec<Lab> = dto.labs.into_iter().map(Lab::from).collect();
        let faculty: Vec<Faculty> = dto.faculty_users.unwrap_or_default().into_iter().map(Faculty::from).collect();
        let courses: Vec<Course> = dto.courses.into_iter().map(Course::from).collect();
        let sections: Vec<Section> = dto.sections.into_iter().map(Section::from).collect();

        log::debug!("Snapshot contains {} courses and {} sections.", courses.len(), sections.len());

        Ok(SchedulingSnapshot { catalog: ResourceCatalog::new(labs, faculty), courses, sections })
    }
}
