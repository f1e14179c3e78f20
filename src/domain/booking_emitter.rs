use chrono::NaiveDate;

use crate::api::scheduling_dto::output_dto::{BookingDto, ScheduleOutputDto, UnscheduledSectionDto};
use crate::domain::allocation::{booking::Booking, outcome::AllocationOutcome};
use crate::domain::schedule::calendar::{format_timestamp, slot_window};

/// Creator id stamped on bookings unless the caller supplies its own.
pub const DEFAULT_CREATED_BY_USER_ID: i64 = 1;

/// Turns an [`AllocationOutcome`] into the output document for the week starting at `monday`.
#[derive(Debug, Clone, Copy)]
pub struct BookingEmitter {
    monday: NaiveDate,
    created_by_user_id: i64,
}

impl BookingEmitter {
    pub fn new(monday: NaiveDate, created_by_user_id: i64) -> Self {
        BookingEmitter { monday, created_by_user_id }
    }

    pub fn emit(&self, outcome: &AllocationOutcome) -> ScheduleOutputDto {
        let proposed_bookings: Vec<BookingDto> = outcome.bookings.iter().map(|b| self.booking_dto(b)).collect();

        let unscheduled_sections = outcome
            .shortfalls
            .iter()
            .map(|s| UnscheduledSectionDto { section_id: s.section_id.value(), requested_sessions: s.requested, scheduled_sessions: s.placed })
            .collect();

        ScheduleOutputDto { proposed_bookings, message: outcome.message().map(str::to_string), unscheduled_sections }
    }

    fn booking_dto(&self, booking: &Booking) -> BookingDto {
        let (start, end) = slot_window(self.monday, &booking.slot());

        BookingDto {
            lab_id: booking.lab_id().value(),
            section_id: booking.section_id().value(),
            user_id: booking.faculty().faculty_id().map(|id| id.value()),
            start_time: format_timestamp(&start),
            end_time: format_timestamp(&end),
            purpose: booking.purpose().to_string(),
            status: booking.status().to_string(),
            created_by_user_id: self.created_by_user_id,
        }
    }
}
