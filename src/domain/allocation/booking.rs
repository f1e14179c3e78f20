use std::fmt;

use crate::domain::schedule::time_slot::TimeSlot;
use crate::domain::utils::id::{FacultyId, LabId, SectionId};

/// Who supervises a booked session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FacultyAssignment {
    Assigned(FacultyId),
    /// The roster was empty; the session runs without a named supervisor.
    Unassigned,
}

impl FacultyAssignment {
    pub fn faculty_id(&self) -> Option<FacultyId> {
        match self {
            FacultyAssignment::Assigned(id) => Some(*id),
            FacultyAssignment::Unassigned => None,
        }
    }
}

impl fmt::Display for FacultyAssignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FacultyAssignment::Assigned(id) => write!(f, "faculty {}", id),
            FacultyAssignment::Unassigned => write!(f, "no faculty"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BookingStatus {
    Scheduled,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Scheduled => "Scheduled",
        }
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One section assigned to one lab in one weekly slot. Never changed after the engine creates it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Booking {
    lab_id: LabId,
    section_id: SectionId,
    faculty: FacultyAssignment,
    slot: TimeSlot,
    purpose: String,
    status: BookingStatus,
}

impl Booking {
    pub fn new(lab_id: LabId, section_id: SectionId, faculty: FacultyAssignment, slot: TimeSlot, purpose: String) -> Self {
        Booking { lab_id, section_id, faculty, slot, purpose, status: BookingStatus::Scheduled }
    }

    pub fn lab_id(&self) -> LabId {
        self.lab_id
    }

    pub fn section_id(&self) -> SectionId {
        self.section_id
    }

    pub fn faculty(&self) -> FacultyAssignment {
        self.faculty
    }

    pub fn slot(&self) -> TimeSlot {
        self.slot
    }

    pub fn purpose(&self) -> &str {
        &self.purpose
    }

    pub fn status(&self) -> BookingStatus {
        self.status
    }
}
