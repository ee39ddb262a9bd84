//! Migration v3: normalized title key with backfill

use content_tracker_core::normalize_title;
use rusqlite::{Connection, params};

use super::column_helpers::add_column_if_not_exists;

pub(super) fn apply(conn: &Connection) -> Result<usize, rusqlite::Error> {
    add_column_if_not_exists(conn, "ideas_log", "title_key", "TEXT")?;

    let pending: Vec<(i64, String)> = {
        let mut stmt = conn.prepare("SELECT id, title FROM ideas_log WHERE title_key IS NULL")?;
        let rows = stmt.query_map([], |row| Ok((row.get(0)?, row.get(1)?)))?;
        rows.collect::<Result<_, _>>()?
    };

    let mut update = conn.prepare("UPDATE ideas_log SET title_key = ?1 WHERE id = ?2")?;
    for (id, title) in &pending {
        update.execute(params![normalize_title(title), id])?;
    }
    Ok(pending.len())
}
