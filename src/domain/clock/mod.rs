use chrono::{Local, NaiveDate};

/// Source of "today" for computing the week to schedule.
pub trait Clock: std::fmt::Debug + Send + Sync {
    fn today(&self) -> NaiveDate;
}

/// Reads the local system date.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalClock;

impl Clock for LocalClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Always reports the same date. Used for reproducible runs and in tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    pub date: NaiveDate,
}

impl FixedClock {
    pub fn new(date: NaiveDate) -> FixedClock {
        FixedClock { date }
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.date
    }
}
