//! Error types for input handling

use thiserror::Error;

/// Reasons a submission is refused before it reaches the engine
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InputError {
    /// A form field could not be read as a number
    #[error("Invalid number in field '{field}': {value:?}")]
    InvalidNumber { field: &'static str, value: String },

    /// Duration must be a whole, non-negative number of years
    #[error("Duration must be a whole number of years, got {value}")]
    InvalidDuration { value: f64 },

    /// NaN or infinite value supplied
    #[error("Non-finite value in field '{field}'")]
    NonFinite { field: &'static str },

    /// Zero (or missing) initial capital
    #[error("Initial capital is required")]
    MissingCapital,

    /// Zero (or missing) duration
    #[error("Duration is required")]
    MissingDuration,

    /// Duration beyond what a submission may project
    #[error("Duration of {years} years exceeds the maximum of {max} years")]
    DurationTooLong { years: f64, max: u32 },
}

impl InputError {
    /// Create an invalid number error.
    pub fn invalid_number(field: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidNumber {
            field,
            value: value.into(),
        }
    }
}

/// Errors raised while loading a batch of submissions
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A row parsed but failed the submission guard
    #[error("Row '{id}': {source}")]
    InvalidRow {
        id: String,
        #[source]
        source: InputError,
    },
}
