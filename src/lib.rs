use std::path::Path;

use crate::api::scheduling_dto::{input_dto::SchedulingInputDto, output_dto::ScheduleOutputDto};
use crate::domain::allocation::engine::AllocationEngine;
use crate::domain::booking_emitter::{BookingEmitter, DEFAULT_CREATED_BY_USER_ID};
use crate::domain::catalog::snapshot::SchedulingSnapshot;
use crate::domain::clock::Clock;
use crate::domain::schedule::calendar::next_scheduling_monday;
use crate::error::Result;
use crate::loader::parser::{parse_json_str, read_input};

pub mod api;
pub mod domain;
pub mod error;
pub mod loader;
pub mod logger;

/// Caller supplied settings of a scheduling run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SchedulerConfig {
    /// Creator id stamped on every proposed booking, overwritten by the calling system.
    pub created_by_user_id: i64,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        SchedulerConfig { created_by_user_id: DEFAULT_CREATED_BY_USER_ID }
    }
}

/// Runs one scheduling pass over a JSON input document.
///
/// Input errors are returned before the allocation starts. Scheduling shortfalls are not
/// errors; they show up as missing bookings (and `unscheduled_sections`) in the document.
pub fn run_from_str(input: &str, clock: &dyn Clock, config: &SchedulerConfig) -> Result<ScheduleOutputDto> {
    let snapshot = SchedulingSnapshot::try_from(parse_json_str::<SchedulingInputDto>(input)?)?;
    log::info!("Input parsed successfully.");

    let outcome = AllocationEngine::new(&snapshot.catalog).allocate(&snapshot.sections);

    let monday = next_scheduling_monday(clock.today());
    log::debug!("Scheduling {} sessions for the week starting {}.", outcome.placed_sessions(), monday);

    Ok(BookingEmitter::new(monday, config.created_by_user_id).emit(&outcome))
}

/// Same as [`run_from_str`], reading the document from `file_path` or stdin.
pub fn run_from_input(file_path: Option<&Path>, clock: &dyn Clock, config: &SchedulerConfig) -> Result<ScheduleOutputDto> {
    let input = read_input(file_path)?;
    run_from_str(&input, clock, config)
}
