//! Error types for the rate grid.
//!
//! Only conditions the caller has to act on are errors. Missing rate records,
//! empty rate sets and paging past a boundary all have defined outputs and
//! never surface here.

use chrono::NaiveDate;

/// Result type for grid operations
pub type GridResult<T> = Result<T, GridError>;

/// Error type for grid operations
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GridError {
    /// The requested date range ends before it starts.
    /// Bounds are never swapped on the caller's behalf.
    #[error("Invalid date range: start {start} is after end {end}")]
    InvalidRange { start: NaiveDate, end: NaiveDate },

    /// Configuration file could not be read, parsed or validated.
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// The comparison payload is not a usable document.
    #[error("Payload error: {message}")]
    Payload { message: String },
}

impl GridError {
    pub fn configuration(message: impl Into<String>) -> Self {
        GridError::Configuration {
            message: message.into(),
        }
    }

    pub fn payload(message: impl Into<String>) -> Self {
        GridError::Payload {
            message: message.into(),
        }
    }

    /// Whether the error comes from caller input rather than setup.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            GridError::InvalidRange { .. } | GridError::Payload { .. }
        )
    }
}
