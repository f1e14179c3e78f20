pub mod booking;
pub mod engine;
pub mod outcome;
