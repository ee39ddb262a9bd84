//! Typed error enum for the service layer.

use content_tracker_core::CoreError;
use content_tracker_storage::StorageError;
use thiserror::Error;

/// Failure of a tracker operation.
#[derive(Debug, Error)]
pub enum TrackerError {
    /// Caller provided invalid input (blank title, unknown category, day < 1).
    /// Raised before any storage access.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The store could not be read or written.
    #[error("storage unavailable: {0}")]
    StorageUnavailable(#[from] StorageError),
}

impl TrackerError {
    /// Whether this error is likely transient (worth retrying).
    pub fn is_transient(&self) -> bool {
        match self {
            Self::StorageUnavailable(e) => e.is_transient(),
            Self::InvalidArgument(_) => false,
        }
    }

    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }
}

impl From<CoreError> for TrackerError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::InvalidInput(msg) | CoreError::InvalidConfig(msg) => {
                Self::InvalidArgument(msg)
            },
        }
    }
}
