use std::path::Path;

use anyhow::{Context as _, Result, bail};
use content_tracker_core::TrackerConfig;
use content_tracker_service::{BatchLogger, CandidateIdea, LogOutcome};
use serde_json::json;

use super::print_json;
use crate::open_tracker;

pub(crate) async fn run_log(
    config: &TrackerConfig,
    category: &str,
    day: i64,
    title: &str,
) -> Result<()> {
    let tracker = open_tracker(config)?;
    match tracker.log_idea(title, category, day).await? {
        LogOutcome::Logged { id, replaced } => print_json(&json!({
            "logged": true,
            "id": id,
            "title": title.trim(),
            "category": category.trim(),
            "sequence_day": day,
            "replaced": replaced,
        })),
        LogOutcome::Failed { reason } => {
            print_json(&json!({ "logged": false, "error": reason.to_string() }))?;
            bail!("idea was not logged: {reason}");
        },
    }
}

pub(crate) async fn run_import(config: &TrackerConfig, file: &Path) -> Result<()> {
    let raw = std::fs::read_to_string(file)
        .with_context(|| format!("reading candidate file {}", file.display()))?;
    let candidates = CandidateIdea::parse_batch(&raw)
        .with_context(|| format!("parsing candidate file {}", file.display()))?;
    tracing::debug!(file = %file.display(), candidates = candidates.len(), "Loaded candidate batch");

    let tracker = open_tracker(config)?;
    let report = BatchLogger::new(&tracker).log_batch(&candidates).await?;
    print_json(&report)
}
