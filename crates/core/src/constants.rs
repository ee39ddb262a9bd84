//! Shared constants for content-tracker.

/// Categories tracked when `CONTENT_TRACKER_CATEGORIES` is not set.
pub const DEFAULT_CATEGORIES: &[&str] = &["MMO", "AI/Tech", "Faceless"];

/// File name of the tracker database inside the data directory.
pub const DB_FILE_NAME: &str = "content_tracker.db";

/// Directory created under the platform data dir.
pub const DATA_DIR_NAME: &str = "content-tracker";

/// Default r2d2 pool size for the SQLite storage.
pub const DEFAULT_POOL_SIZE: u32 = 4;

/// Default SQLite busy timeout in milliseconds.
pub const DEFAULT_BUSY_TIMEOUT_MS: u32 = 5000;

/// Environment variable overriding the database path.
pub const ENV_DB_PATH: &str = "CONTENT_TRACKER_DB";

/// Environment variable for the connection pool size.
pub const ENV_POOL_SIZE: &str = "CONTENT_TRACKER_DB_POOL_SIZE";

/// Environment variable for the SQLite busy timeout.
pub const ENV_BUSY_TIMEOUT_MS: &str = "CONTENT_TRACKER_BUSY_TIMEOUT_MS";

/// Environment variable holding the comma-separated category set.
pub const ENV_CATEGORIES: &str = "CONTENT_TRACKER_CATEGORIES";
