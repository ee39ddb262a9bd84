//! Tracker configuration read from the environment.

use std::path::PathBuf;

use crate::category::CategorySet;
use crate::constants::{
    DATA_DIR_NAME, DB_FILE_NAME, DEFAULT_BUSY_TIMEOUT_MS, DEFAULT_POOL_SIZE, ENV_BUSY_TIMEOUT_MS,
    ENV_CATEGORIES, ENV_DB_PATH, ENV_POOL_SIZE,
};
use crate::env_config::parse_with_default;
use crate::error::CoreError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackerConfig {
    pub db_path: PathBuf,
    pub pool_size: u32,
    pub busy_timeout_ms: u32,
    pub categories: CategorySet,
}

impl TrackerConfig {
    /// # Errors
    /// Returns `CoreError::InvalidConfig` if `CONTENT_TRACKER_CATEGORIES` holds no names.
    pub fn from_env() -> Result<Self, CoreError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build from an arbitrary variable lookup.
    ///
    /// # Errors
    /// Returns `CoreError::InvalidConfig` if the category list is set but empty.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, CoreError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let db_path = lookup(ENV_DB_PATH)
            .filter(|p| !p.trim().is_empty())
            .map_or_else(Self::default_db_path, PathBuf::from);

        let pool_size =
            parse_with_default(ENV_POOL_SIZE, lookup(ENV_POOL_SIZE).as_deref(), DEFAULT_POOL_SIZE)
                .max(1);
        let busy_timeout_ms = parse_with_default(
            ENV_BUSY_TIMEOUT_MS,
            lookup(ENV_BUSY_TIMEOUT_MS).as_deref(),
            DEFAULT_BUSY_TIMEOUT_MS,
        );

        let categories = match lookup(ENV_CATEGORIES) {
            Some(raw) => CategorySet::parse_list(&raw)?,
            None => CategorySet::default(),
        };

        Ok(Self { db_path, pool_size, busy_timeout_ms, categories })
    }

    /// `<data_local_dir>/content-tracker/content_tracker.db`, or the working
    /// directory when the platform has no data dir.
    #[must_use]
    pub fn default_db_path() -> PathBuf {
        dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(DATA_DIR_NAME)
            .join(DB_FILE_NAME)
    }

    /// Same settings, different database file.
    #[must_use]
    pub fn with_db_path(mut self, db_path: PathBuf) -> Self {
        self.db_path = db_path;
        self
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> =
            pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_set() {
        let config = TrackerConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.pool_size, DEFAULT_POOL_SIZE);
        assert_eq!(config.busy_timeout_ms, DEFAULT_BUSY_TIMEOUT_MS);
        assert_eq!(config.categories, CategorySet::default());
        assert!(config.db_path.ends_with(DB_FILE_NAME));
    }

    #[test]
    fn reads_overrides() {
        let config = TrackerConfig::from_lookup(lookup_from(&[
            (ENV_DB_PATH, "/tmp/ideas.db"),
            (ENV_POOL_SIZE, "2"),
            (ENV_BUSY_TIMEOUT_MS, "250"),
            (ENV_CATEGORIES, "Travel,Food"),
        ]))
        .unwrap();
        assert_eq!(config.db_path, PathBuf::from("/tmp/ideas.db"));
        assert_eq!(config.pool_size, 2);
        assert_eq!(config.busy_timeout_ms, 250);
        assert_eq!(config.categories.names(), vec!["Travel", "Food"]);
    }

    #[test]
    fn invalid_numbers_fall_back_and_pool_is_at_least_one() {
        let config = TrackerConfig::from_lookup(lookup_from(&[
            (ENV_POOL_SIZE, "0"),
            (ENV_BUSY_TIMEOUT_MS, "soon"),
        ]))
        .unwrap();
        assert_eq!(config.pool_size, 1);
        assert_eq!(config.busy_timeout_ms, DEFAULT_BUSY_TIMEOUT_MS);
    }

    #[test]
    fn empty_category_list_is_rejected() {
        let result = TrackerConfig::from_lookup(lookup_from(&[(ENV_CATEGORIES, ",")]));
        assert!(matches!(result, Err(CoreError::InvalidConfig(_))));
    }
}
