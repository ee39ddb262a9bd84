use anyhow::Result;
use content_tracker_core::TrackerConfig;
use serde::Serialize;
use serde_json::json;

use super::print_json;
use crate::open_tracker;

#[derive(Serialize)]
struct CurrentDay<'a> {
    category: &'a str,
    current_day: u32,
}

pub(crate) async fn run_current_day(config: &TrackerConfig, category: Option<&str>) -> Result<()> {
    let tracker = open_tracker(config)?;
    if let Some(category) = category {
        let current_day = tracker.get_current_day(category).await?;
        return print_json(&CurrentDay { category, current_day });
    }

    let days = tracker.current_days().await?;
    let rows: Vec<CurrentDay<'_>> = days
        .iter()
        .map(|(category, day)| CurrentDay { category: category.as_str(), current_day: *day })
        .collect();
    print_json(&rows)
}

pub(crate) async fn run_check(config: &TrackerConfig, title: &str) -> Result<()> {
    let tracker = open_tracker(config)?;
    let duplicate = tracker.check_for_duplication(title).await?;
    print_json(&json!({ "title": title, "duplicate": duplicate }))
}

pub(crate) async fn run_list(
    config: &TrackerConfig,
    category: Option<&str>,
    limit: Option<usize>,
) -> Result<()> {
    let tracker = open_tracker(config)?;
    let entries = tracker.list_entries(category, limit).await?;
    print_json(&entries)
}

pub(crate) async fn run_stats(config: &TrackerConfig) -> Result<()> {
    let tracker = open_tracker(config)?;
    let stats = tracker.stats().await?;
    print_json(&stats)
}
