//! Error types for SmartAgroX services.

use thiserror::Error;

/// Result type alias using AgroError.
pub type AgroResult<T> = Result<T, AgroError>;

/// Failure taxonomy for index generation.
///
/// Both variants surface the same way at the HTTP boundary; the split only
/// exists so logs and tests can tell bad input from a failed computation.
#[derive(Debug, Error, PartialEq)]
pub enum AgroError {
    /// Malformed input, e.g. a date that is not `YYYY-MM-DD`.
    #[error("{0}")]
    InputParse(String),

    /// Anything that went wrong while generating data.
    #[error("{0}")]
    Computation(String),
}

impl AgroError {
    pub fn input(message: impl Into<String>) -> Self {
        AgroError::InputParse(message.into())
    }

    pub fn computation(message: impl Into<String>) -> Self {
        AgroError::Computation(message.into())
    }

    /// Short label for log fields and metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            AgroError::InputParse(_) => "input_parse",
            AgroError::Computation(_) => "computation",
        }
    }
}
