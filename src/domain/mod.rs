pub mod allocation;
pub mod booking_emitter;
pub mod catalog;
pub mod clock;
pub mod schedule;
pub mod utils;
