use std::result::Result as StdResult;

use thiserror::Error;

/// Errors raised while validating domain values.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = StdResult<T, CoreError>;
