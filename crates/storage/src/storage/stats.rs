use chrono::{DateTime, Utc};
use content_tracker_core::{CategoryStats, TrackerStats};

use super::{Storage, day_from_sql, get_conn, log_row_error, parse_timestamp};
use crate::error::StorageError;

impl Storage {
    /// Aggregate counts for reporting. An empty log yields `TrackerStats::default()`.
    ///
    /// # Errors
    /// Returns error if database query fails.
    pub fn get_stats(&self) -> Result<TrackerStats, StorageError> {
        let mut conn = get_conn(&self.pool)?;
        let tx = conn.transaction()?;

        let total_entries: i64 =
            tx.query_row("SELECT COUNT(*) FROM ideas_log", [], |row| row.get(0))?;

        let categories: Vec<CategoryStats> = {
            let mut stmt = tx.prepare(
                "SELECT category, COUNT(*), MAX(sequence_day)
                   FROM ideas_log
                  GROUP BY category
                  ORDER BY COUNT(*) DESC, category",
            )?;
            let rows = stmt
                .query_map([], |row| {
                    let count: i64 = row.get(1)?;
                    Ok(CategoryStats {
                        category: row.get(0)?,
                        count: u64::try_from(count).unwrap_or(0),
                        max_day: day_from_sql(2, row.get(2)?)?,
                    })
                })?
                .filter_map(log_row_error)
                .collect();
            rows
        };

        // stored timestamps mix formats, so they are compared after parsing
        let (first_entry_at, latest_entry_at) = {
            let mut stmt = tx.prepare(
                "SELECT created_at FROM ideas_log WHERE created_at IS NOT NULL AND created_at != ''",
            )?;
            let bounds = stmt
                .query_map([], |row| row.get::<_, String>(0))?
                .filter_map(log_row_error)
                .filter_map(|raw| parse_timestamp(&raw))
                .fold(None, |bounds: Option<(DateTime<Utc>, DateTime<Utc>)>, ts| match bounds {
                    Some((first, latest)) => Some((first.min(ts), latest.max(ts))),
                    None => Some((ts, ts)),
                });
            (bounds.map(|(first, _)| first), bounds.map(|(_, latest)| latest))
        };
        tx.commit()?;

        Ok(TrackerStats {
            total_entries: u64::try_from(total_entries).unwrap_or(0),
            categories,
            first_entry_at,
            latest_entry_at,
        })
    }

    /// Number of rows in the ideas log.
    ///
    /// # Errors
    /// Returns error if database query fails.
    pub fn count_entries(&self) -> Result<u64, StorageError> {
        let conn = get_conn(&self.pool)?;
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM ideas_log", [], |row| row.get(0))?;
        Ok(u64::try_from(count).unwrap_or(0))
    }
}
