//! Logged content ideas.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use unicode_normalization::UnicodeNormalization as _;

use crate::category::Category;
use crate::error::CoreError;

/// Normalize a title into its duplicate-detection key.
///
/// NFKC, then trimmed and lowercased, so "Hello World" and " hello world "
/// share a key regardless of category or date.
#[must_use]
pub fn normalize_title(title: &str) -> String {
    let composed: String = title.nfkc().collect();
    composed.trim().to_lowercase()
}

/// A row of the ideas log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub id: i64,
    pub title: String,
    pub category: String,
    pub sequence_day: u32,
    pub created_at: DateTime<Utc>,
    pub entry_date: NaiveDate,
}

/// A validated entry waiting to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEntry {
    title: String,
    title_key: String,
    category: Category,
    sequence_day: u32,
    created_at: DateTime<Utc>,
    entry_date: NaiveDate,
}

impl NewEntry {
    /// # Errors
    /// Returns `CoreError::InvalidInput` if the title is blank or `sequence_day` is zero.
    pub fn new(
        title: &str,
        category: Category,
        sequence_day: u32,
        created_at: DateTime<Utc>,
        entry_date: NaiveDate,
    ) -> Result<Self, CoreError> {
        let title = validate_title(title)?;
        if sequence_day < 1 {
            return Err(CoreError::InvalidInput("sequence day must be a positive integer".to_owned()));
        }
        Ok(Self {
            title_key: normalize_title(&title),
            title,
            category,
            sequence_day,
            created_at,
            entry_date,
        })
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn title_key(&self) -> &str {
        &self.title_key
    }

    #[must_use]
    pub const fn category(&self) -> &Category {
        &self.category
    }

    #[must_use]
    pub const fn sequence_day(&self) -> u32 {
        self.sequence_day
    }

    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    #[must_use]
    pub const fn entry_date(&self) -> NaiveDate {
        self.entry_date
    }
}

/// Trim a title, rejecting blank input.
///
/// # Errors
/// Returns `CoreError::InvalidInput` if nothing remains after trimming.
pub(crate) fn validate_title(title: &str) -> Result<String, CoreError> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err(CoreError::InvalidInput("title cannot be empty".to_owned()));
    }
    Ok(trimmed.to_owned())
}
