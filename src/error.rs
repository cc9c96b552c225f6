use thiserror::Error;

/// Errors that can occur while loading canvas settings
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Failed to read settings file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Invalid settings data: {0}")]
    ParseError(#[from] serde_json::Error),
}

/// Errors produced when the translate offset fields hold something that is not a number
#[derive(Debug, Error, PartialEq)]
pub enum OffsetInputError {
    #[error("Offset field '{field}' is not a number: {value:?}")]
    InvalidNumber { field: &'static str, value: String },
}
