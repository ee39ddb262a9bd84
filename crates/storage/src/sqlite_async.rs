//! Async trait implementation for SQLite `Storage` via `spawn_blocking`.

use async_trait::async_trait;
use chrono::NaiveDate;
use content_tracker_core::{DaySnapshot, Entry, NewEntry, TrackerStats};

use crate::Storage;
use crate::error::StorageError;
use crate::traits::EntryStore;
use crate::types::ReplaceOutcome;

/// Helper: run a blocking closure on the tokio blocking pool.
async fn blocking<F, T>(f: F) -> Result<T, StorageError>
where
    F: FnOnce() -> Result<T, StorageError> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| StorageError::Blocking(format!("spawn_blocking join error: {e}")))?
}

/// Body-generating macro for async-to-blocking delegation.
///
/// Each argument is annotated with a capture kind:
/// - `@ref arg`: `.clone()` a `&T`, pass as `&arg`
/// - `@str arg`: `.to_owned()` a `&str`, pass as `&arg`
/// - `@opt_str arg`: `.map(ToOwned::to_owned)` an `Option<&str>`, pass as `arg.as_deref()`
/// - `@val arg`: move directly (Copy/owned types)
macro_rules! delegate {
    ($self:ident, $method:ident $(, @$kind:ident $arg:ident)*) => {{
        let s = $self.clone();
        $(delegate!(@capture $kind $arg);)*
        blocking(move || s.$method($(delegate!(@pass $kind $arg)),*)).await
    }};
    (@capture ref $arg:ident) => { let $arg = $arg.clone(); };
    (@capture str $arg:ident) => { let $arg = $arg.to_owned(); };
    (@capture opt_str $arg:ident) => { let $arg = $arg.map(ToOwned::to_owned); };
    (@capture val $arg:ident) => { };
    (@pass ref $arg:ident) => { &$arg };
    (@pass str $arg:ident) => { &$arg };
    (@pass opt_str $arg:ident) => { $arg.as_deref() };
    (@pass val $arg:ident) => { $arg };
}

#[async_trait]
impl EntryStore for Storage {
    async fn day_snapshot(
        &self,
        category: &str,
        today: NaiveDate,
    ) -> Result<DaySnapshot, StorageError> {
        delegate!(self, day_snapshot, @str category, @val today)
    }

    async fn replace_entry_for_day(&self, entry: &NewEntry) -> Result<ReplaceOutcome, StorageError> {
        delegate!(self, replace_entry_for_day, @ref entry)
    }

    async fn title_exists(&self, title: &str) -> Result<bool, StorageError> {
        delegate!(self, title_exists, @str title)
    }

    async fn list_entries(
        &self,
        category: Option<&str>,
        limit: Option<usize>,
    ) -> Result<Vec<Entry>, StorageError> {
        delegate!(self, list_entries, @opt_str category, @val limit)
    }

    async fn entries_on(&self, category: &str, date: NaiveDate) -> Result<Vec<Entry>, StorageError> {
        delegate!(self, entries_on, @str category, @val date)
    }

    async fn get_stats(&self) -> Result<TrackerStats, StorageError> {
        delegate!(self, get_stats)
    }
}
