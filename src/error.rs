use thiserror::Error;

use crate::api::scheduling_dto::output_dto::ErrorDto;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Input could not be read: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse input JSON: {0}")]
    ParseError(serde_json::Error),

    #[error("Error processing input data fields: {0}")]
    InvalidInput(serde_json::Error),

    #[error("Input data failed validation: {0}")]
    ValidationError(String),

    #[error("Invalid reference date '{0}', expected YYYY-MM-DD")]
    InvalidReferenceDate(String),
}

impl Error {
    /// Short headline used in the `error` field of the error document.
    pub fn title(&self) -> &'static str {
        match self {
            Error::IoError(_) => "Failed to read input",
            Error::ParseError(_) => "Failed to parse input JSON",
            Error::InvalidInput(_) | Error::ValidationError(_) => "Error processing input data fields",
            Error::InvalidReferenceDate(_) => "Invalid reference date",
        }
    }

    /// Builds the `{ "error": ..., "details": ... }` document reported to the caller
    /// when a run is rejected before scheduling starts.
    pub fn to_error_document(&self) -> ErrorDto {
        let details = match self {
            Error::IoError(e) => e.to_string(),
            Error::ParseError(e) | Error::InvalidInput(e) => e.to_string(),
            Error::ValidationError(msg) => msg.clone(),
            Error::InvalidReferenceDate(raw) => format!("'{}' is not a calendar date in YYYY-MM-DD format", raw),
        };

        ErrorDto { error: self.title().to_string(), details: Some(details) }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
