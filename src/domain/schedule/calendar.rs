//! Maps weekly slots onto concrete calendar timestamps.

use chrono::{Datelike, Days, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};

use crate::domain::schedule::time_slot::TimeSlot;
use crate::error::{Error, Result};

/// Format of the local timestamps written to the output document.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Returns the Monday of the week that gets scheduled.
///
/// Always a future Monday: on a Monday this is the Monday seven days later,
/// on any other day it is the upcoming Monday.
pub fn next_scheduling_monday(today: NaiveDate) -> NaiveDate {
    let days_ahead = 7 - u64::from(today.weekday().num_days_from_monday());
    today + Days::new(days_ahead)
}

/// Start and end of `slot` in the week starting at `monday`.
pub fn slot_window(monday: NaiveDate, slot: &TimeSlot) -> (NaiveDateTime, NaiveDateTime) {
    let date = monday + Days::new(u64::from(slot.day()));
    let midnight = date.and_time(NaiveTime::default());

    (midnight + TimeDelta::hours(i64::from(slot.start_hour())), midnight + TimeDelta::hours(i64::from(slot.end_hour())))
}

pub fn format_timestamp(timestamp: &NaiveDateTime) -> String {
    timestamp.format(TIMESTAMP_FORMAT).to_string()
}

/// Parses a `YYYY-MM-DD` reference date.
pub fn parse_reference_date(raw: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").map_err(|_| Error::InvalidReferenceDate(raw.to_string()))
}
