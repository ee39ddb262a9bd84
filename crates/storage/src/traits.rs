//! Async storage trait consumed by the service layer.

use async_trait::async_trait;
use chrono::NaiveDate;
use content_tracker_core::{DaySnapshot, Entry, NewEntry, TrackerStats};

use crate::error::StorageError;
use crate::types::ReplaceOutcome;

/// Persistence operations behind the sequence tracker.
#[async_trait]
pub trait EntryStore: Send + Sync {
    /// Historical maximum and today's day for a category, from one snapshot.
    async fn day_snapshot(&self, category: &str, today: NaiveDate)
    -> Result<DaySnapshot, StorageError>;

    /// Atomically replace every entry for the entry's category and date with `entry`.
    async fn replace_entry_for_day(&self, entry: &NewEntry) -> Result<ReplaceOutcome, StorageError>;

    /// Whether any stored title normalizes to the same key as `title`.
    async fn title_exists(&self, title: &str) -> Result<bool, StorageError>;

    /// Entries newest first, optionally filtered by category.
    async fn list_entries(
        &self,
        category: Option<&str>,
        limit: Option<usize>,
    ) -> Result<Vec<Entry>, StorageError>;

    /// Entries held for one category on one date.
    async fn entries_on(&self, category: &str, date: NaiveDate) -> Result<Vec<Entry>, StorageError>;

    /// Aggregate statistics.
    async fn get_stats(&self) -> Result<TrackerStats, StorageError>;
}
