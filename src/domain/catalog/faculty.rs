use crate::api::scheduling_dto::input_dto::FacultyDto;
use crate::domain::utils::id::FacultyId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Faculty {
    pub id: FacultyId,
    pub full_name: String,
}

impl Faculty {
    pub fn new(id: FacultyId, full_name: impl Into<String>) -> Self {
        Faculty { id, full_name: full_name.into() }
    }
}

impl From<FacultyDto> for Faculty {
    fn from(dto: FacultyDto) -> Self {
        Faculty { id: FacultyId::new(dto.user_id), full_name: dto.full_name }
    }
}
