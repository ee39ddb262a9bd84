//! Storage layer for content-tracker
//!
//! SQLite-based ideas log behind an r2d2 connection pool, with versioned
//! migrations and an async facade for the service layer.

pub mod error;
mod migrations;
mod sqlite_async;
mod storage;
#[cfg(test)]
mod tests;
pub mod traits;
mod types;

pub use error::StorageError;
pub use migrations::SCHEMA_VERSION;
pub use storage::{Storage, StorageOptions};
pub use traits::EntryStore;
pub use types::ReplaceOutcome;
