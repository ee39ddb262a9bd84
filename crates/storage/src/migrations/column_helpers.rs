use rusqlite::{Connection, OptionalExtension as _};

pub fn table_exists(conn: &Connection, table: &str) -> Result<bool, rusqlite::Error> {
    conn.query_row(
        "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = ?1)",
        [table],
        |row| row.get(0),
    )
}

/// `CREATE TABLE` statement SQLite stored for `table`.
pub fn table_sql(conn: &Connection, table: &str) -> Result<Option<String>, rusqlite::Error> {
    conn.query_row(
        "SELECT sql FROM sqlite_master WHERE type = 'table' AND name = ?1",
        [table],
        |row| row.get(0),
    )
    .optional()
}

pub fn column_exists(conn: &Connection, table: &str, column: &str) -> Result<bool, rusqlite::Error> {
    let sql = format!("PRAGMA table_info({table})");
    let mut stmt = conn.prepare(&sql)?;
    let names = stmt.query_map([], |row| row.get::<_, String>(1))?;
    for name in names {
        if name? == column {
            return Ok(true);
        }
    }
    Ok(false)
}

pub fn add_column_if_not_exists(
    conn: &Connection,
    table: &str,
    column: &str,
    col_type: &str,
) -> Result<bool, rusqlite::Error> {
    if column_exists(conn, table, column)? {
        return Ok(false);
    }
    let sql = format!("ALTER TABLE {table} ADD COLUMN {column} {col_type}");
    conn.execute(&sql, [])?;
    Ok(true)
}

/// Rename `from` to `to` when only the old name is present.
pub fn rename_column_if_exists(
    conn: &Connection,
    table: &str,
    from: &str,
    to: &str,
) -> Result<bool, rusqlite::Error> {
    if !column_exists(conn, table, from)? || column_exists(conn, table, to)? {
        return Ok(false);
    }
    let sql = format!("ALTER TABLE {table} RENAME COLUMN {from} TO {to}");
    conn.execute(&sql, [])?;
    Ok(true)
}
