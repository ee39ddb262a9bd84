//! Migration v1: ideas log table

use rusqlite::Connection;

use super::column_helpers::{column_exists, table_exists, table_sql};

pub(super) const SQL: &str = "
CREATE TABLE IF NOT EXISTS ideas_log (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    category TEXT NOT NULL,
    sequence_day INTEGER NOT NULL CHECK (sequence_day > 0),
    created_at TEXT NOT NULL
);
";

/// Target of a legacy rebuild: the v1 table plus the v2 `entry_date`
/// column, so a legacy date survives the copy.
const REBUILD_SQL: &str = "
CREATE TABLE ideas_log_rebuild (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    category TEXT NOT NULL,
    sequence_day INTEGER NOT NULL CHECK (sequence_day > 0),
    created_at TEXT NOT NULL,
    entry_date TEXT
);
";

pub(super) fn apply(conn: &Connection) -> Result<(), rusqlite::Error> {
    if table_exists(conn, "ideas_log")? && is_legacy_table(conn)? {
        let copied = rebuild_legacy_table(conn)?;
        tracing::info!(rows = copied, "Rebuilt legacy ideas_log table");
    }
    conn.execute_batch(SQL)
}

/// Tables written before versioning used `niche` and `continuation_day` and
/// pinned the category list in a CHECK constraint.
fn is_legacy_table(conn: &Connection) -> Result<bool, rusqlite::Error> {
    if column_exists(conn, "ideas_log", "niche")?
        || column_exists(conn, "ideas_log", "continuation_day")?
    {
        return Ok(true);
    }
    let compact: String = table_sql(conn, "ideas_log")?
        .unwrap_or_default()
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_lowercase();
    Ok(compact.contains("categoryin("))
}

/// Copy every row, keeping its id, into a table without the category CHECK,
/// then swap it in. SQLite cannot drop a CHECK constraint in place.
fn rebuild_legacy_table(conn: &Connection) -> Result<usize, rusqlite::Error> {
    let has = |column: &str| column_exists(conn, "ideas_log", column);

    let category = if has("category")? { "category" } else { "niche" };
    let sequence_day = if has("sequence_day")? { "sequence_day" } else { "continuation_day" };
    let created_at = if has("created_at")? { "COALESCE(created_at, '')" } else { "''" };
    let entry_date = if has("entry_date")? {
        "entry_date"
    } else if has("generation_date")? {
        "generation_date"
    } else {
        "NULL"
    };

    conn.execute_batch(REBUILD_SQL)?;
    let copied = conn.execute(
        &format!(
            "INSERT INTO ideas_log_rebuild (id, title, category, sequence_day, created_at, entry_date)
             SELECT id, title, {category}, {sequence_day}, {created_at}, {entry_date} FROM ideas_log"
        ),
        [],
    )?;
    conn.execute_batch(
        "DROP TABLE ideas_log;
         ALTER TABLE ideas_log_rebuild RENAME TO ideas_log;",
    )?;
    Ok(copied)
}
