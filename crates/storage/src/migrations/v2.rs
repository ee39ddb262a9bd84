//! Migration v2: calendar date column with backfill

use chrono::NaiveDate;
use rusqlite::{Connection, params};

use super::column_helpers::{add_column_if_not_exists, rename_column_if_exists};

/// Legacy rows take the date of their `created_at`; rows whose timestamp is
/// missing or unreadable take `today`.
const BACKFILL_SQL: &str = "
UPDATE ideas_log
   SET entry_date = COALESCE(date(created_at), ?1)
 WHERE entry_date IS NULL OR entry_date = ''
";

pub(super) fn apply(conn: &Connection, today: NaiveDate) -> Result<usize, rusqlite::Error> {
    if rename_column_if_exists(conn, "ideas_log", "generation_date", "entry_date")? {
        tracing::info!("Renamed legacy column generation_date -> entry_date");
    }
    add_column_if_not_exists(conn, "ideas_log", "entry_date", "TEXT")?;
    conn.execute(BACKFILL_SQL, params![today.to_string()])
}
