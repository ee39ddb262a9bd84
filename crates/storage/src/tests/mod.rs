//! Test utilities and module declarations for storage tests.

use crate::Storage;
use chrono::{NaiveDate, TimeZone as _, Utc};
use content_tracker_core::{CategorySet, NewEntry};
use tempfile::TempDir;

pub fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn test_today() -> NaiveDate {
    day(2026, 3, 14)
}

#[expect(clippy::unwrap_used, reason = "test code")]
pub fn create_test_storage() -> (Storage, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("test.db");
    let storage = Storage::new(&db_path, test_today()).unwrap();
    (storage, temp_dir)
}

#[expect(clippy::unwrap_used, reason = "test code")]
pub fn new_entry(title: &str, category: &str, sequence_day: u32, date: NaiveDate) -> NewEntry {
    let category = CategorySet::default().resolve(category).unwrap();
    let created_at = Utc.from_utc_datetime(&date.and_hms_opt(9, 30, 0).unwrap());
    NewEntry::new(title, category, sequence_day, created_at, date).unwrap()
}

mod stats_tests;
