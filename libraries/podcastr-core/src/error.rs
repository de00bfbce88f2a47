/// Core error types for Podcastr
use thiserror::Error;

/// Result type alias using `CoreError`
pub type Result<T> = std::result::Result<T, CoreError>;

/// Core error type for Podcastr
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Duration could not be coerced to whole seconds
    #[error("Invalid duration: {0}")]
    InvalidDuration(String),

    /// Publication date could not be parsed
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    /// Episode id was empty
    #[error("Episode id cannot be empty")]
    EmptyId,
}

impl CoreError {
    /// Create an invalid duration error
    pub fn invalid_duration(value: impl std::fmt::Display) -> Self {
        Self::InvalidDuration(value.to_string())
    }

    /// Create an invalid date error
    pub fn invalid_date(value: impl Into<String>) -> Self {
        Self::InvalidDate(value.into())
    }
}
