use chrono::{NaiveDate, NaiveTime, TimeZone as _, Utc};
use content_tracker_core::{DaySnapshot, Entry, NewEntry, normalize_title};
use rusqlite::types::Type;
use rusqlite::{TransactionBehavior, params};

use super::{
    Storage, day_from_sql, get_conn, invalid_column, log_row_error, parse_entry_date,
    parse_timestamp,
};
use crate::error::StorageError;
use crate::types::ReplaceOutcome;

const ENTRY_COLUMNS: &str = "id, title, category, sequence_day, created_at, entry_date";

impl Storage {
    /// Read what is known about `category` relative to `today`.
    ///
    /// Both aggregates are taken inside one read transaction, so a concurrent
    /// replace is seen either entirely or not at all.
    ///
    /// # Errors
    /// Returns error if the database cannot be read.
    pub fn day_snapshot(&self, category: &str, today: NaiveDate) -> Result<DaySnapshot, StorageError> {
        let mut conn = get_conn(&self.pool)?;
        let tx = conn.transaction()?;
        let today = today.to_string();

        let historical_max: Option<i64> = tx.query_row(
            "SELECT MAX(sequence_day) FROM ideas_log WHERE category = ?1 AND entry_date != ?2",
            params![category, today],
            |row| row.get(0),
        )?;
        let todays_day: Option<i64> = tx.query_row(
            "SELECT MAX(sequence_day) FROM ideas_log WHERE category = ?1 AND entry_date = ?2",
            params![category, today],
            |row| row.get(0),
        )?;
        tx.commit()?;

        Ok(DaySnapshot {
            historical_max: day_from_sql(0, historical_max.unwrap_or(0))?,
            today: todays_day.map(|day| day_from_sql(0, day)).transpose()?,
        })
    }

    /// Make `entry` the only row for its category on its date.
    ///
    /// Delete and insert run in one `BEGIN IMMEDIATE` transaction; if the
    /// insert fails the delete is rolled back with it.
    ///
    /// # Errors
    /// Returns error if the transaction cannot be started or committed, or either statement fails.
    pub fn replace_entry_for_day(&self, entry: &NewEntry) -> Result<ReplaceOutcome, StorageError> {
        let mut conn = get_conn(&self.pool)?;
        let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;
        let entry_date = entry.entry_date().to_string();

        let replaced = tx.execute(
            "DELETE FROM ideas_log WHERE category = ?1 AND entry_date = ?2",
            params![entry.category().as_str(), entry_date],
        )?;
        tx.execute(
            "INSERT INTO ideas_log (title, title_key, category, sequence_day, created_at, entry_date)
               VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                entry.title(),
                entry.title_key(),
                entry.category().as_str(),
                entry.sequence_day(),
                entry.created_at().to_rfc3339(),
                entry_date,
            ],
        )?;
        let id = tx.last_insert_rowid();
        tx.commit()?;

        if replaced > 0 {
            tracing::info!(
                category = %entry.category(),
                entry_date = %entry.entry_date(),
                replaced,
                "Overwrote same-day entries"
            );
        }
        tracing::debug!(id, category = %entry.category(), sequence_day = entry.sequence_day(), "Entry logged");

        Ok(ReplaceOutcome { id, replaced })
    }

    /// Whether any entry, in any category on any date, has this title.
    ///
    /// # Errors
    /// Returns error if the database cannot be read.
    pub fn title_exists(&self, title: &str) -> Result<bool, StorageError> {
        let conn = get_conn(&self.pool)?;
        let exists = conn.query_row(
            "SELECT EXISTS(SELECT 1 FROM ideas_log WHERE title_key = ?1)",
            params![normalize_title(title)],
            |row| row.get(0),
        )?;
        Ok(exists)
    }

    /// List entries, newest first. With a category the order is by day, then write time.
    ///
    /// # Errors
    /// Returns error if the database cannot be read.
    pub fn list_entries(
        &self,
        category: Option<&str>,
        limit: Option<usize>,
    ) -> Result<Vec<Entry>, StorageError> {
        let conn = get_conn(&self.pool)?;
        // SQLite treats a negative LIMIT as "no limit"
        let limit = limit.map_or(-1, |l| i64::try_from(l).unwrap_or(i64::MAX));

        if let Some(category) = category {
            let mut stmt = conn.prepare(&format!(
                "SELECT {ENTRY_COLUMNS} FROM ideas_log WHERE category = ?1
                   ORDER BY sequence_day DESC, created_at DESC, id DESC LIMIT ?2"
            ))?;
            let entries: Vec<Entry> = stmt
                .query_map(params![category, limit], Self::row_to_entry)?
                .filter_map(log_row_error)
                .collect();
            return Ok(entries);
        }

        let mut stmt = conn.prepare(&format!(
            "SELECT {ENTRY_COLUMNS} FROM ideas_log ORDER BY created_at DESC, id DESC LIMIT ?1"
        ))?;
        let entries: Vec<Entry> =
            stmt.query_map(params![limit], Self::row_to_entry)?.filter_map(log_row_error).collect();
        Ok(entries)
    }

    /// Entries held for one category on one date.
    ///
    /// # Errors
    /// Returns error if the database cannot be read.
    pub fn entries_on(&self, category: &str, date: NaiveDate) -> Result<Vec<Entry>, StorageError> {
        let conn = get_conn(&self.pool)?;
        let mut stmt = conn.prepare(&format!(
            "SELECT {ENTRY_COLUMNS} FROM ideas_log WHERE category = ?1 AND entry_date = ?2 ORDER BY id"
        ))?;
        let entries: Vec<Entry> = stmt
            .query_map(params![category, date.to_string()], Self::row_to_entry)?
            .filter_map(log_row_error)
            .collect();
        Ok(entries)
    }

    pub(crate) fn row_to_entry(row: &rusqlite::Row<'_>) -> rusqlite::Result<Entry> {
        let entry_date_str: Option<String> = row.get(5)?;
        let entry_date = entry_date_str.as_deref().and_then(parse_entry_date).ok_or_else(|| {
            invalid_column(5, Type::Text, format!("invalid entry_date: {entry_date_str:?}"))
        })?;

        // legacy rows may lack a readable timestamp; fall back to the start of their day
        let created_at_str: Option<String> = row.get(4)?;
        let created_at = created_at_str.as_deref().and_then(parse_timestamp).unwrap_or_else(|| {
            Utc.from_utc_datetime(&entry_date.and_time(NaiveTime::default()))
        });

        Ok(Entry {
            id: row.get(0)?,
            title: row.get(1)?,
            category: row.get(2)?,
            sequence_day: day_from_sql(3, row.get(3)?)?,
            created_at,
            entry_date,
        })
    }
}
