//! `SQLite` storage implementation
//!
//! All methods are synchronous; the async facade lives in `sqlite_async`.

mod entries;
mod stats;

use std::io::{Error as IoError, ErrorKind};
use std::path::Path;
use std::time::Duration;

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone as _, Utc};
use content_tracker_core::constants::{DEFAULT_BUSY_TIMEOUT_MS, DEFAULT_POOL_SIZE};
use r2d2::{Pool, PooledConnection};
use r2d2_sqlite::SqliteConnectionManager;
use rusqlite::Connection;
use rusqlite::types::Type;

use crate::error::StorageError;
use crate::migrations;

/// Type alias for pooled connection
pub(crate) type PooledConn = PooledConnection<SqliteConnectionManager>;

/// Connection pool settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StorageOptions {
    pub pool_size: u32,
    pub busy_timeout_ms: u32,
}

impl Default for StorageOptions {
    fn default() -> Self {
        Self { pool_size: DEFAULT_POOL_SIZE, busy_timeout_ms: DEFAULT_BUSY_TIMEOUT_MS }
    }
}

/// Main storage struct wrapping `SQLite` connection pool
#[derive(Clone, Debug)]
pub struct Storage {
    pub(crate) pool: Pool<SqliteConnectionManager>,
}

/// Get a connection from the pool
pub(crate) fn get_conn(pool: &Pool<SqliteConnectionManager>) -> Result<PooledConn, StorageError> {
    Ok(pool.get()?)
}

/// Log row read errors and filter them out
pub(crate) fn log_row_error<T>(result: rusqlite::Result<T>) -> Option<T> {
    match result {
        Ok(v) => Some(v),
        Err(e) => {
            tracing::warn!("Row read error: {}", e);
            None
        },
    }
}

/// Parse a stored timestamp.
///
/// Rows written by this crate hold RFC 3339. Legacy rows hold either SQLite's
/// `CURRENT_TIMESTAMP` format, which is UTC, or a naive ISO timestamp taken
/// from the writer's local clock.
pub(crate) fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f") {
        return Some(Utc.from_utc_datetime(&naive));
    }
    let naive = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f").ok()?;
    // a time skipped by a DST jump has no local reading; fall back to UTC
    Some(
        Local
            .from_local_datetime(&naive)
            .earliest()
            .map_or_else(|| Utc.from_utc_datetime(&naive), |dt| dt.with_timezone(&Utc)),
    )
}

pub(crate) fn parse_entry_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

/// Convert a stored day number, rejecting values outside `u32`.
pub(crate) fn day_from_sql(idx: usize, value: i64) -> rusqlite::Result<u32> {
    u32::try_from(value)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Integer, Box::new(e)))
}

pub(crate) fn invalid_column(idx: usize, ty: Type, message: String) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(
        idx,
        ty,
        Box::new(IoError::new(ErrorKind::InvalidData, message)),
    )
}

/// Custom connection initializer for concurrency settings
fn init_connection(conn: &mut Connection, busy_timeout_ms: u32) -> Result<(), rusqlite::Error> {
    conn.busy_timeout(Duration::from_millis(u64::from(busy_timeout_ms)))?;
    let _mode: String =
        conn.pragma_update_and_check(None, "journal_mode", "WAL", |row| row.get(0))?;
    conn.pragma_update(None, "synchronous", "NORMAL")?;
    Ok(())
}

impl Storage {
    /// Open (creating if needed) the database at `db_path` with default pool settings.
    ///
    /// Migrations run before the handle is returned; `today` backfills the
    /// calendar date of legacy rows.
    ///
    /// # Errors
    /// Returns error if the pool cannot be built or a migration fails.
    pub fn new(db_path: &Path, today: NaiveDate) -> Result<Self, StorageError> {
        Self::with_options(db_path, today, StorageOptions::default())
    }

    /// # Errors
    /// Returns error if the pool cannot be built or a migration fails.
    pub fn with_options(
        db_path: &Path,
        today: NaiveDate,
        options: StorageOptions,
    ) -> Result<Self, StorageError> {
        let busy_timeout_ms = options.busy_timeout_ms;
        let manager = SqliteConnectionManager::file(db_path)
            .with_init(move |conn| init_connection(conn, busy_timeout_ms));

        let pool_size = options.pool_size.max(1);
        let pool = Pool::builder().max_size(pool_size).build(manager)?;

        let storage = Self { pool };
        let version = storage.setup(today)?;

        tracing::info!(
            pool_size = pool_size,
            schema_version = version,
            path = %db_path.display(),
            "Storage initialized with connection pool"
        );

        Ok(storage)
    }

    /// Ensure the schema exists and is current. Safe to call on every startup.
    ///
    /// # Errors
    /// Returns error if a migration fails; nothing is applied in that case.
    pub fn setup(&self, today: NaiveDate) -> Result<i32, StorageError> {
        let mut conn = get_conn(&self.pool)?;
        migrations::run_migrations(&mut conn, today)
    }

    /// Current `user_version` of the database.
    ///
    /// # Errors
    /// Returns error if the pragma cannot be read.
    pub fn schema_version(&self) -> Result<i32, StorageError> {
        let conn = get_conn(&self.pool)?;
        Ok(migrations::schema_version(&conn)?)
    }
}
