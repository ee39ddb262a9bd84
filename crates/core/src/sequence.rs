//! The continuation-day rule.

use serde::{Deserialize, Serialize};

/// What storage knows about one category at the moment of a read.
///
/// Both fields must come from the same snapshot of the log.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaySnapshot {
    /// Highest `sequence_day` logged on any date other than today; 0 if none.
    pub historical_max: u32,
    /// `sequence_day` of today's entry, if the category was already logged today.
    pub today: Option<u32>,
}

impl DaySnapshot {
    /// The last completed day for the category.
    ///
    /// Callers write at `current_day() + 1`. When today already holds an entry
    /// its day number is taken, so one less is reported and a same-day
    /// regeneration lands on the same number instead of advancing.
    #[must_use]
    pub const fn current_day(&self) -> u32 {
        match self.today {
            Some(day) => day.saturating_sub(1),
            None => self.historical_max,
        }
    }
}
