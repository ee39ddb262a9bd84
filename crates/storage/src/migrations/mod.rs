#![allow(
    clippy::redundant_pub_crate,
    reason = "migrations module is private, pub(crate) is intentional"
)]

mod column_helpers;
mod v1;
mod v2;
mod v3;
mod v4;

use chrono::NaiveDate;
use rusqlite::{Connection, TransactionBehavior};

use crate::error::StorageError;

pub const SCHEMA_VERSION: i32 = 4;

pub(crate) fn schema_version(conn: &Connection) -> Result<i32, rusqlite::Error> {
    conn.pragma_query_value(None, "user_version", |row| row.get(0))
}

/// Bring the schema up to [`SCHEMA_VERSION`].
///
/// All steps and the version bump share one transaction: the database either
/// ends at the target version or is left untouched. Every step tolerates
/// being re-run, so databases created before versioning (version 0 with the
/// table already present) upgrade in place. `today` fills `entry_date` for
/// legacy rows whose `created_at` carries no usable date.
pub(crate) fn run_migrations(conn: &mut Connection, today: NaiveDate) -> Result<i32, StorageError> {
    let current_version = schema_version(conn)?;

    tracing::info!("Database schema version: {} (target: {})", current_version, SCHEMA_VERSION);

    if current_version > SCHEMA_VERSION {
        return Err(StorageError::Migration(format!(
            "database schema version {current_version} is newer than supported version {SCHEMA_VERSION}"
        )));
    }
    if current_version == SCHEMA_VERSION {
        return Ok(current_version);
    }

    let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;
    // another process may have migrated between the read above and the lock
    let current_version = schema_version(&tx)?;

    if current_version < 1i32 {
        tracing::info!("Running migration v1: ideas_log table");
        v1::apply(&tx)?;
    }

    if current_version < 2i32 {
        tracing::info!("Running migration v2: entry_date column");
        let backfilled = v2::apply(&tx, today)?;
        if backfilled > 0 {
            tracing::info!(rows = backfilled, "Backfilled entry_date for legacy rows");
        }
    }

    if current_version < 3i32 {
        tracing::info!("Running migration v3: title_key column");
        let backfilled = v3::apply(&tx)?;
        if backfilled > 0 {
            tracing::info!(rows = backfilled, "Backfilled title_key for legacy rows");
        }
    }

    if current_version < 4i32 {
        tracing::info!("Running migration v4: lookup indexes");
        tx.execute_batch(v4::SQL)?;
    }

    tx.pragma_update(None, "user_version", SCHEMA_VERSION)?;
    tx.commit()?;
    tracing::info!("Database schema up to date (version {})", SCHEMA_VERSION);

    Ok(SCHEMA_VERSION)
}
