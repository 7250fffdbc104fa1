//! Error types for the practice runner
//!
//! Failures are not recovered anywhere in the crate: they bubble up with `?`
//! to `main`, which prints them and exits non-zero. Reading that message is
//! part of the exercise.

use std::io;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the practice runner
#[derive(Error, Debug)]
pub enum Error {
    // === Exercise Errors ===
    #[error("division by zero: cannot average an empty sequence")]
    DivisionByZero,

    #[error("index {index} out of range for sequence of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("user record is missing required field '{field}'")]
    MissingField { field: String },

    #[error("user record is invalid: {0}")]
    InvalidRecord(String),

    // === Scenario Errors ===
    #[error("Unknown scenario {0}. Use 'debug-practice list' to see scenarios 1-6")]
    InvalidScenario(u8),

    // === Configuration Errors ===
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid configuration file: {0}")]
    ConfigParse(String),

    // === IO Errors ===
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to read file '{path}': {error}")]
    FileRead { path: String, error: String },
}

impl Error {
    /// Create a missing field error
    pub fn missing_field(field: &str) -> Self {
        Self::MissingField {
            field: field.to_string(),
        }
    }
}
