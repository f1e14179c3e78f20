use crate::domain::allocation::booking::Booking;
use crate::domain::utils::id::SectionId;

pub const NO_LABS_MESSAGE: &str = "No available labs to schedule.";
pub const NO_SECTIONS_MESSAGE: &str = "No sections to schedule.";
pub const NO_BOOKINGS_MESSAGE: &str = "No bookings could be scheduled with the available labs, faculty and time slots.";

/// How a run ended. None of these is an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AllocationStatus {
    /// The search ran over all sections.
    Completed,
    /// Short-circuited: no lab was available.
    NoAvailableLabs,
    /// Short-circuited: nothing to schedule.
    NoSections,
}

/// A section that received fewer sessions than it asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionShortfall {
    pub section_id: SectionId,
    pub requested: i64,
    pub placed: i64,
}

impl SectionShortfall {
    pub fn missing(&self) -> i64 {
        self.requested - self.placed
    }
}

/// Everything one engine invocation produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllocationOutcome {
    pub status: AllocationStatus,
    pub bookings: Vec<Booking>,
    pub shortfalls: Vec<SectionShortfall>,
    pub requested_sessions: i64,
}

impl AllocationOutcome {
    pub fn short_circuit(status: AllocationStatus) -> Self {
        AllocationOutcome { status, bookings: Vec::new(), shortfalls: Vec::new(), requested_sessions: 0 }
    }

    pub fn placed_sessions(&self) -> usize {
        self.bookings.len()
    }

    pub fn bookings_for(&self, section_id: SectionId) -> impl Iterator<Item = &Booking> {
        self.bookings.iter().filter(move |b| b.section_id() == section_id)
    }

    /// Informational message for the output document; only set when nothing was booked.
    pub fn message(&self) -> Option<&'static str> {
        match self.status {
            AllocationStatus::NoAvailableLabs => Some(NO_LABS_MESSAGE),
            AllocationStatus::NoSections => Some(NO_SECTIONS_MESSAGE),
            AllocationStatus::Completed if self.bookings.is_empty() => Some(NO_BOOKINGS_MESSAGE),
            AllocationStatus::Completed => None,
        }
    }
}
