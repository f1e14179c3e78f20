use serde::{Deserialize, Deserializer, Serialize};

/// Whole input snapshot handed to a scheduling run.
///
/// Missing or `null` top-level lists are treated as empty; missing fields inside a record
/// are rejected, except for the ones carrying a default below.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct SchedulingInputDto {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub labs: Vec<LabDto>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub courses: Vec<CourseDto>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub sections: Vec<SectionDto>,
    #[serde(default)]
    pub faculty_users: Option<Vec<FacultyDto>>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct LabDto {
    pub lab_id: i64,
    pub name: String,
    pub capacity: i64,
    #[serde(rename = "type", default = "default_lab_type")]
    pub lab_type: String,
    #[serde(default = "default_is_available")]
    pub is_available: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct CourseDto {
    pub course_id: i64,
    pub name: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct SectionDto {
    pub section_id: i64,
    pub course_id: i64,
    pub name: String,
    pub course_name: String,
    /// Expected enrollment of the section.
    #[serde(default = "default_expected_enrollment")]
    pub capacity: i64,
    #[serde(default = "default_labs_per_week")]
    pub labs_per_week: i64,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct FacultyDto {
    pub user_id: i64,
    pub full_name: String,
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

fn default_lab_type() -> String {
    "General".to_string()
}

fn default_is_available() -> bool {
    true
}

fn default_expected_enrollment() -> i64 {
    30
}

fn default_labs_per_week() -> i64 {
    1
}
