//! Typed error enum for the storage layer.
//!
//! Lets callers match on specific failure modes (pool exhaustion, busy
//! database, failed migration) instead of downcasting opaque boxes.

use rusqlite::ErrorCode;
use thiserror::Error;

/// Storage-layer error with variants covering every expected failure mode.
#[derive(Debug, Error)]
pub enum StorageError {
    /// No connection could be checked out of the pool.
    #[error("connection pool error: {0}")]
    Pool(#[from] r2d2::Error),

    /// SQL / constraint / I/O failure reported by SQLite.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// Migration failure.
    #[error("migration error: {0}")]
    Migration(String),

    /// The blocking task running the query panicked or was cancelled.
    #[error("blocking task failed: {0}")]
    Blocking(String),
}

impl StorageError {
    /// Whether this error is likely transient (worth retrying).
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Pool(_) => true,
            Self::Database(rusqlite::Error::SqliteFailure(err, _)) => {
                matches!(err.code, ErrorCode::DatabaseBusy | ErrorCode::DatabaseLocked)
            },
            _ => false,
        }
    }
}
