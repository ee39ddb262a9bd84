use anyhow::Result;
use content_tracker_core::{SystemClock, TrackerConfig};
use serde_json::json;

use super::print_json;
use crate::open_storage;

pub(crate) fn run_setup(config: &TrackerConfig) -> Result<()> {
    let storage = open_storage(config, &SystemClock)?;
    let version = storage.schema_version()?;
    print_json(&json!({
        "db_path": config.db_path.display().to_string(),
        "schema_version": version,
    }))
}
