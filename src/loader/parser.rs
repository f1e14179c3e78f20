use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fs;
use std::io::Read;
use std::path::Path;

use crate::error::{Error, Result};

/// Reads the whole input document, from `file_path` if given, otherwise from stdin.
///
/// Errors: `Error::IoError` if the source cannot be read.
pub fn read_input(file_path: Option<&Path>) -> Result<String> {
    match file_path {
        Some(path) => Ok(fs::read_to_string(path)?),
        None => {
            let mut data = String::new();
            std::io::stdin().read_to_string(&mut data)?;
            Ok(data)
        }
    }
}

/// Parses a JSON document into a given type `T`.
///
/// Parsing happens in two steps so the caller can tell the failures apart:
/// - `Error::ParseError` if the text is not JSON at all.
/// - `Error::InvalidInput` if it is JSON but does not have the shape of `T`
///   (missing required fields, wrong types).
pub fn parse_json_str<T: DeserializeOwned>(data: &str) -> Result<T> {
    let document: Value = serde_json::from_str(data).map_err(Error::ParseError)?;

    let parsed_data: T = serde_json::from_value(document).map_err(Error::InvalidInput)?;

    Ok(parsed_data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::scheduling_dto::input_dto::SchedulingInputDto;

    #[test]
    fn defaults_are_filled_in() {
        let dto: SchedulingInputDto = parse_json_str(
            r#"{
                "labs": [{"lab_id": 1, "name": "L1", "capacity": 30}],
                "courses": [{"course_id": 5, "name": "Physics"}],
                "sections": [{"section_id": 2, "course_id": 5, "name": "A", "course_name": "Physics"}]
            }"#,
        )
        .unwrap();

        assert_eq!(dto.labs[0].lab_type, "General");
        assert!(dto.labs[0].is_available);
        assert_eq!(dto.sections[0].capacity, 30);
        assert_eq!(dto.sections[0].labs_per_week, 1);
        assert!(dto.faculty_users.is_none());
    }

    #[test]
    fn missing_lists_are_empty() {
        let dto: SchedulingInputDto = parse_json_str("{}").unwrap();
        assert!(dto.labs.is_empty());
        assert!(dto.sections.is_empty());
    }

    #[test]
    fn null_lists_are_empty() {
        let dto: SchedulingInputDto =
            parse_json_str(r#"{"labs": null, "courses": null, "sections": null, "faculty_users": null}"#).unwrap();
        assert!(dto.labs.is_empty());
        assert!(dto.courses.is_empty());
        assert!(dto.sections.is_empty());
        assert!(dto.faculty_users.is_none());
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let result = parse_json_str::<SchedulingInputDto>(r#"{"labs": ["#);
        assert!(matches!(result, Err(Error::ParseError(_))));
    }

    #[test]
    fn missing_required_field_is_invalid_input() {
        let result = parse_json_str::<SchedulingInputDto>(r#"{"labs": [{"lab_id": 1, "capacity": 30}]}"#);
        match result {
            Err(Error::InvalidInput(e)) => assert!(e.to_string().contains("name")),
            other => panic!("Expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn missing_file_is_io_error() {
        let result = read_input(Some(Path::new("non_existent_file.json")));
        assert!(matches!(result, Err(Error::IoError(_))));
    }
}
