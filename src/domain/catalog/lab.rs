use crate::api::scheduling_dto::input_dto::LabDto;
use crate::domain::utils::id::LabId;

/// A bookable lab room.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lab {
    pub id: LabId,
    pub name: String,

    /// Number of seats. A lab can only host a section whose expected enrollment fits.
    pub capacity: i64,

    /// Kind of lab ("General", "Computer", ...). Carried through, not matched against courses.
    pub lab_type: String,
    pub is_available: bool,
}

impl Lab {
    pub fn new(id: LabId, name: impl Into<String>, capacity: i64) -> Self {
        Lab { id, name: name.into(), capacity, lab_type: "General".to_string(), is_available: true }
    }

    pub fn with_availability(mut self, is_available: bool) -> Self {
        self.is_available = is_available;
        self
    }

    /// Returns true if the lab has at least `expected_enrollment` seats.
    pub fn can_host(&self, expected_enrollment: i64) -> bool {
        self.capacity >= expected_enrollment
    }
}

impl From<LabDto> for Lab {
    fn from(dto: LabDto) -> Self {
        Lab { id: LabId::new(dto.lab_id), name: dto.name, capacity: dto.capacity, lab_type: dto.lab_type, is_available: dto.is_available }
    }
}
