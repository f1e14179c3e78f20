use chrono::Weekday;
use std::fmt;

/// Number of scheduling days per week, Monday through Friday.
pub const SCHEDULING_DAYS: u8 = 5;

/// Start hour of each daily slot, indexed by slot index.
pub const SLOT_START_HOURS: [u32; 3] = [9, 11, 14];

/// Every slot spans the same number of hours.
pub const SLOT_DURATION_HOURS: u32 = 2;

/// One fixed recurring weekly window: a weekday (0 = Monday .. 4 = Friday) and a slot of that day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimeSlot {
    day: u8,
    slot_index: u8,
}

impl TimeSlot {
    /// Returns `None` if the day or slot index lies outside the weekly grid.
    pub fn new(day: u8, slot_index: u8) -> Option<Self> {
        if day < SCHEDULING_DAYS && (slot_index as usize) < SLOT_START_HOURS.len() {
            Some(TimeSlot { day, slot_index })
        } else {
            None
        }
    }

    pub fn day(&self) -> u8 {
        self.day
    }

    pub fn slot_index(&self) -> u8 {
        self.slot_index
    }

    pub fn weekday(&self) -> Weekday {
        match self.day {
            0 => Weekday::Mon,
            1 => Weekday::Tue,
            2 => Weekday::Wed,
            3 => Weekday::Thu,
            _ => Weekday::Fri,
        }
    }

    pub fn start_hour(&self) -> u32 {
        SLOT_START_HOURS[self.slot_index as usize]
    }

    pub fn end_hour(&self) -> u32 {
        self.start_hour() + SLOT_DURATION_HOURS
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:02}:00-{:02}:00", self.weekday(), self.start_hour(), self.end_hour())
    }
}

/// The fixed weekly grid of 15 slots in canonical search order:
/// day 0..4, and within each day slot 0..2.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotGrid {
    slots: Vec<TimeSlot>,
}

impl SlotGrid {
    pub fn weekly() -> Self {
        let slots_per_day = SLOT_START_HOURS.len() as u8;
        let mut slots = Vec::with_capacity(SCHEDULING_DAYS as usize * SLOT_START_HOURS.len());

        for day in 0..SCHEDULING_DAYS {
            for slot_index in 0..slots_per_day {
                slots.push(TimeSlot { day, slot_index });
            }
        }

        SlotGrid { slots }
    }

    pub fn iter(&self) -> impl Iterator<Item = &TimeSlot> {
        self.slots.iter()
    }
}
