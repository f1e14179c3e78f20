pub mod calendar;
pub mod occupancy;
pub mod time_slot;
