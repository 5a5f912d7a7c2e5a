use std::result::Result as StdResult;

use thiserror::Error;

/// Errors raised while building or parsing quarterseed domain values
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("Invalid quarter: {0}")]
    InvalidQuarter(String),

    #[error("Invalid quarter range: {start} is after {end}")]
    InvalidRange { start: String, end: String },

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = StdResult<T, CoreError>;
