use std::sync::Arc;

use content_tracker_core::{Category, CategorySet, Clock, Entry, NewEntry, TrackerStats};
use content_tracker_storage::{EntryStore, StorageError};

use crate::error::TrackerError;

/// Result of [`SequenceTracker::log_idea`] once its arguments are valid.
#[derive(Debug)]
pub enum LogOutcome {
    /// The entry is stored; `replaced` same-day rows were overwritten.
    Logged { id: i64, replaced: usize },
    /// The write did not happen and nothing changed.
    Failed { reason: StorageError },
}

impl LogOutcome {
    #[must_use]
    pub const fn is_logged(&self) -> bool {
        matches!(self, Self::Logged { .. })
    }

    #[must_use]
    pub const fn failure(&self) -> Option<&StorageError> {
        match self {
            Self::Logged { .. } => None,
            Self::Failed { reason } => Some(reason),
        }
    }
}

/// Per-category continuation-day counter over an [`EntryStore`].
pub struct SequenceTracker {
    store: Arc<dyn EntryStore>,
    clock: Arc<dyn Clock>,
    categories: CategorySet,
}

impl SequenceTracker {
    #[must_use]
    pub fn new(store: Arc<dyn EntryStore>, clock: Arc<dyn Clock>, categories: CategorySet) -> Self {
        Self { store, clock, categories }
    }

    #[must_use]
    pub const fn categories(&self) -> &CategorySet {
        &self.categories
    }

    fn resolve(&self, category: &str) -> Result<Category, TrackerError> {
        Ok(self.categories.resolve(category)?)
    }

    /// Last day number used for `category` before today.
    ///
    /// Calling it again after logging today's entry returns the same value, so
    /// a regeneration on the same day reuses the same day number.
    pub async fn get_current_day(&self, category: &str) -> Result<u32, TrackerError> {
        let category = self.resolve(category)?;
        let today = self.clock.today();
        let snapshot = self.store.day_snapshot(category.as_str(), today).await?;
        Ok(snapshot.current_day())
    }

    /// Current day for every configured category, in configuration order.
    pub async fn current_days(&self) -> Result<Vec<(Category, u32)>, TrackerError> {
        let today = self.clock.today();
        let mut days = Vec::with_capacity(self.categories.len());
        for category in self.categories.iter() {
            let snapshot = self.store.day_snapshot(category.as_str(), today).await?;
            days.push((category.clone(), snapshot.current_day()));
        }
        Ok(days)
    }

    /// Record `title` as today's entry for `category`, replacing any entry
    /// already logged for that category today.
    ///
    /// Invalid arguments are rejected with `Err` before storage is touched.
    /// Storage failures come back as [`LogOutcome::Failed`].
    pub async fn log_idea(
        &self,
        title: &str,
        category: &str,
        sequence_day: i64,
    ) -> Result<LogOutcome, TrackerError> {
        let category = self.resolve(category)?;
        if sequence_day < 1 {
            return Err(TrackerError::InvalidArgument(format!(
                "sequence day must be a positive integer, got {sequence_day}"
            )));
        }
        let day = u32::try_from(sequence_day).map_err(|_| {
            TrackerError::InvalidArgument(format!("sequence day {sequence_day} is out of range"))
        })?;
        let entry = NewEntry::new(title, category, day, self.clock.now(), self.clock.today())?;

        match self.store.replace_entry_for_day(&entry).await {
            Ok(outcome) => {
                tracing::info!(
                    id = outcome.id,
                    category = %entry.category(),
                    sequence_day = day,
                    replaced = outcome.replaced,
                    "Logged idea"
                );
                Ok(LogOutcome::Logged { id: outcome.id, replaced: outcome.replaced })
            },
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    category = %entry.category(),
                    sequence_day = day,
                    "Failed to log idea, previous entry for today kept"
                );
                Ok(LogOutcome::Failed { reason: e })
            },
        }
    }

    /// Whether an entry with this title exists in any category on any date.
    /// Comparison ignores case and surrounding whitespace.
    pub async fn check_for_duplication(&self, title: &str) -> Result<bool, TrackerError> {
        if title.trim().is_empty() {
            return Err(TrackerError::InvalidArgument("title cannot be empty".to_owned()));
        }
        Ok(self.store.title_exists(title).await?)
    }

    pub async fn stats(&self) -> Result<TrackerStats, TrackerError> {
        Ok(self.store.get_stats().await?)
    }

    /// Entries newest first; a category filter must name a configured category.
    pub async fn list_entries(
        &self,
        category: Option<&str>,
        limit: Option<usize>,
    ) -> Result<Vec<Entry>, TrackerError> {
        let category = category.map(|c| self.resolve(c)).transpose()?;
        Ok(self.store.list_entries(category.as_ref().map(Category::as_str), limit).await?)
    }

    /// Rows held for `category` on the clock's current date.
    pub async fn entries_today(&self, category: &str) -> Result<Vec<Entry>, TrackerError> {
        let category = self.resolve(category)?;
        Ok(self.store.entries_on(category.as_str(), self.clock.today()).await?)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;
    use chrono::NaiveDate;
    use content_tracker_core::{DaySnapshot, ManualClock};
    use content_tracker_storage::ReplaceOutcome;

    use super::*;

    /// Store whose every call fails, counting how often it was reached.
    #[derive(Default)]
    struct OfflineStore {
        calls: AtomicUsize,
    }

    impl OfflineStore {
        fn offline(&self) -> StorageError {
            self.calls.fetch_add(1, Ordering::SeqCst);
            StorageError::Blocking("store offline".to_owned())
        }
    }

    #[async_trait]
    impl EntryStore for OfflineStore {
        async fn day_snapshot(
            &self,
            _category: &str,
            _today: NaiveDate,
        ) -> Result<DaySnapshot, StorageError> {
            Err(self.offline())
        }

        async fn replace_entry_for_day(
            &self,
            _entry: &NewEntry,
        ) -> Result<ReplaceOutcome, StorageError> {
            Err(self.offline())
        }

        async fn title_exists(&self, _title: &str) -> Result<bool, StorageError> {
            Err(self.offline())
        }

        async fn list_entries(
            &self,
            _category: Option<&str>,
            _limit: Option<usize>,
        ) -> Result<Vec<Entry>, StorageError> {
            Err(self.offline())
        }

        async fn entries_on(
            &self,
            _category: &str,
            _date: NaiveDate,
        ) -> Result<Vec<Entry>, StorageError> {
            Err(self.offline())
        }

        async fn get_stats(&self) -> Result<TrackerStats, StorageError> {
            Err(self.offline())
        }
    }

    fn offline_tracker() -> (SequenceTracker, Arc<OfflineStore>) {
        let store = Arc::new(OfflineStore::default());
        let clock = Arc::new(ManualClock::new(NaiveDate::from_ymd_opt(2026, 3, 14).unwrap()));
        let tracker = SequenceTracker::new(store.clone(), clock, CategorySet::default());
        (tracker, store)
    }

    #[tokio::test]
    async fn failed_write_is_an_outcome_not_an_error() {
        let (tracker, store) = offline_tracker();
        let outcome = tracker.log_idea("Idea", "MMO", 1).await.unwrap();
        assert!(!outcome.is_logged());
        assert!(matches!(outcome.failure(), Some(StorageError::Blocking(_))));
        assert_eq!(store.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn invalid_arguments_never_reach_storage() {
        let (tracker, store) = offline_tracker();

        let cases = [
            ("", "MMO", 1),
            ("   ", "MMO", 1),
            ("Idea", "MMO", 0),
            ("Idea", "MMO", -3),
            ("Idea", "", 1),
            ("Idea", "Cooking", 1),
        ];
        for (title, category, day) in cases {
            let err = tracker.log_idea(title, category, day).await.unwrap_err();
            assert!(err.is_invalid_argument(), "{title:?}/{category:?}/{day}: {err}");
        }
        assert!(tracker.get_current_day("Cooking").await.unwrap_err().is_invalid_argument());
        assert!(tracker.check_for_duplication("  ").await.unwrap_err().is_invalid_argument());
        assert_eq!(store.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn read_failures_propagate() {
        let (tracker, _store) = offline_tracker();
        assert!(matches!(
            tracker.get_current_day("MMO").await,
            Err(TrackerError::StorageUnavailable(_))
        ));
        assert!(matches!(
            tracker.check_for_duplication("Idea").await,
            Err(TrackerError::StorageUnavailable(_))
        ));
    }

    #[tokio::test]
    async fn day_beyond_u32_is_rejected() {
        let (tracker, _store) = offline_tracker();
        let err = tracker.log_idea("Idea", "MMO", i64::from(u32::MAX) + 1).await.unwrap_err();
        assert!(err.is_invalid_argument());
    }
}
