//! Time source used for "today" and write timestamps.

use std::fmt;
use std::sync::{Mutex, PoisonError};

use chrono::{DateTime, Duration, Local, NaiveDate, NaiveDateTime, NaiveTime, TimeZone as _, Utc};

/// Supplies the current instant and the caller's calendar date.
pub trait Clock: Send + Sync + fmt::Debug {
    /// Timestamp stored as `created_at`.
    fn now(&self) -> DateTime<Utc>;

    /// Calendar date used for same-day comparisons.
    fn today(&self) -> NaiveDate;
}

/// Wall clock; "today" is the local calendar date.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// A clock that only moves when told to.
#[derive(Debug)]
pub struct ManualClock {
    current: Mutex<NaiveDateTime>,
}

impl ManualClock {
    /// Start at midnight of `date`.
    #[must_use]
    pub fn new(date: NaiveDate) -> Self {
        Self::at(date.and_time(NaiveTime::default()))
    }

    #[must_use]
    pub const fn at(datetime: NaiveDateTime) -> Self {
        Self { current: Mutex::new(datetime) }
    }

    /// Move forward (or back, for negative values) by whole days.
    pub fn advance_days(&self, days: i64) {
        self.advance(Duration::days(days));
    }

    pub fn advance(&self, delta: Duration) {
        let mut current = self.current.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(next) = current.checked_add_signed(delta) {
            *current = next;
        }
    }

    /// Jump to midnight of `date`.
    pub fn set_date(&self, date: NaiveDate) {
        let mut current = self.current.lock().unwrap_or_else(PoisonError::into_inner);
        *current = date.and_time(NaiveTime::default());
    }

    fn current(&self) -> NaiveDateTime {
        *self.current.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        Utc.from_utc_datetime(&self.current())
    }

    fn today(&self) -> NaiveDate {
        self.current().date()
    }
}
