//! Error types for everything around the projection engine
//!
//! The engine itself is total and never fails. Loading scenarios, exporting
//! results and checking inputs against UI bounds can.

use thiserror::Error;

/// Result type alias for projector operations
pub type Result<T> = std::result::Result<T, ProjectorError>;

/// Main error type for projector operations
#[derive(Error, Debug)]
pub enum ProjectorError {
    /// Filesystem or stream failure
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed delimited text
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// Malformed JSON
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// Input lies outside the range a slider allows
    #[error("{field} = {value} is outside [{min}, {max}]")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    /// Input does not land on a slider step
    #[error("{field} = {value} is not a multiple of step {step}")]
    OffStep {
        field: &'static str,
        value: f64,
        step: f64,
    },

    /// Scenario file content that parses but makes no sense
    #[error("invalid scenario: {0}")]
    InvalidScenario(String),
}

impl ProjectorError {
    /// Create an invalid scenario error
    pub fn invalid_scenario(msg: impl Into<String>) -> Self {
        Self::InvalidScenario(msg.into())
    }
}
