//! Storage types shared across modules

use serde::{Deserialize, Serialize};

/// Result of writing today's entry for a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplaceOutcome {
    /// Row id assigned to the new entry.
    pub id: i64,
    /// Number of same-day rows the write removed.
    pub replaced: usize,
}
