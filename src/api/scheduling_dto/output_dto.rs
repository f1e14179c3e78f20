use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct BookingDto {
    pub lab_id: i64,
    pub section_id: i64,
    /// Supervising faculty member; `null` when no faculty was assigned.
    pub user_id: Option<i64>,
    pub start_time: String,
    pub end_time: String,
    pub purpose: String,
    pub status: String,
    pub created_by_user_id: i64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct UnscheduledSectionDto {
    pub section_id: i64,
    pub requested_sessions: i64,
    pub scheduled_sessions: i64,
}

/// Result document of a successful run. `message` is only present when no bookings were produced.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct ScheduleOutputDto {
    pub proposed_bookings: Vec<BookingDto>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub unscheduled_sections: Vec<UnscheduledSectionDto>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ErrorDto {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}
