use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Per-category aggregate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryStats {
    pub category: String,
    pub count: u64,
    pub max_day: u32,
}

/// Aggregate view of the ideas log. `Default` is the empty-store answer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackerStats {
    pub total_entries: u64,
    /// Ordered by entry count, highest first.
    pub categories: Vec<CategoryStats>,
    pub first_entry_at: Option<DateTime<Utc>>,
    pub latest_entry_at: Option<DateTime<Utc>>,
}

impl TrackerStats {
    /// Highest day logged for `category`, 0 when it was never logged.
    #[must_use]
    pub fn max_day(&self, category: &str) -> u32 {
        self.categories.iter().find(|c| c.category == category).map_or(0, |c| c.max_day)
    }

    /// Entry count for `category`, 0 when it was never logged.
    #[must_use]
    pub fn count(&self, category: &str) -> u64 {
        self.categories.iter().find(|c| c.category == category).map_or(0, |c| c.count)
    }
}
