use chrono::{TimeZone as _, Utc};
use content_tracker_core::TrackerStats;

use super::{create_test_storage, day, new_entry};

#[test]
fn empty_store_reports_defaults() {
    let (storage, _dir) = create_test_storage();
    let stats = storage.get_stats().unwrap();
    assert_eq!(stats, TrackerStats::default());
    assert_eq!(stats.max_day("MMO"), 0);
}

#[test]
fn stats_break_down_by_category() {
    let (storage, _dir) = create_test_storage();
    storage.replace_entry_for_day(&new_entry("M1", "MMO", 1, day(2026, 3, 10))).unwrap();
    storage.replace_entry_for_day(&new_entry("M2", "MMO", 2, day(2026, 3, 11))).unwrap();
    storage.replace_entry_for_day(&new_entry("F1", "Faceless", 6, day(2026, 3, 12))).unwrap();

    let stats = storage.get_stats().unwrap();
    assert_eq!(stats.total_entries, 3);
    assert_eq!(stats.categories[0].category, "MMO");
    assert_eq!(stats.count("MMO"), 2);
    assert_eq!(stats.max_day("MMO"), 2);
    assert_eq!(stats.max_day("Faceless"), 6);
    assert_eq!(
        stats.first_entry_at,
        Some(Utc.from_utc_datetime(&day(2026, 3, 10).and_hms_opt(9, 30, 0).unwrap()))
    );
    assert_eq!(
        stats.latest_entry_at,
        Some(Utc.from_utc_datetime(&day(2026, 3, 12).and_hms_opt(9, 30, 0).unwrap()))
    );
}

#[test]
fn first_and_latest_compare_timestamps_not_text() {
    let (storage, _dir) = create_test_storage();
    // new row at 09:30 UTC
    storage.replace_entry_for_day(&new_entry("Morning", "MMO", 1, day(2026, 3, 10))).unwrap();
    // legacy CURRENT_TIMESTAMP row later the same day
    {
        let conn = storage.pool.get().unwrap();
        conn.execute(
            "INSERT INTO ideas_log (title, title_key, category, sequence_day, created_at, entry_date)
               VALUES ('Late', 'late', 'Faceless', 1, '2026-03-10 23:00:00', '2026-03-10')",
            [],
        )
        .unwrap();
    }

    let stats = storage.get_stats().unwrap();
    assert_eq!(
        stats.first_entry_at,
        Some(Utc.from_utc_datetime(&day(2026, 3, 10).and_hms_opt(9, 30, 0).unwrap()))
    );
    assert_eq!(
        stats.latest_entry_at,
        Some(Utc.from_utc_datetime(&day(2026, 3, 10).and_hms_opt(23, 0, 0).unwrap()))
    );
}
