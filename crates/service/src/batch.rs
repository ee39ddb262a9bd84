//! Per-run logging of a generated idea batch.

use std::collections::{HashMap, HashSet};

use content_tracker_core::normalize_title;
use serde::{Deserialize, Serialize};
use tracing::Instrument as _;
use uuid::Uuid;

use crate::error::TrackerError;
use crate::sequence_tracker::{LogOutcome, SequenceTracker};

/// One idea as produced by the generator. Fields other than the title and
/// category are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateIdea {
    pub title: String,
    #[serde(alias = "niche")]
    pub category: String,
}

impl CandidateIdea {
    #[must_use]
    pub fn new(title: impl Into<String>, category: impl Into<String>) -> Self {
        Self { title: title.into(), category: category.into() }
    }

    /// Parse a JSON array of candidates.
    ///
    /// # Errors
    /// Returns error if `raw` is not an array of objects with `title` and `category`.
    pub fn parse_batch(raw: &str) -> Result<Vec<Self>, serde_json::Error> {
        serde_json::from_str(raw)
    }
}

/// A candidate that made it into the log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggedIdea {
    pub id: i64,
    pub title: String,
    pub category: String,
    pub sequence_day: u32,
    pub replaced: usize,
}

/// What happened to each candidate of one run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchReport {
    pub run_id: Uuid,
    pub logged: Vec<LoggedIdea>,
    pub duplicates: usize,
    pub skipped: usize,
    pub errors: usize,
}

impl BatchReport {
    fn new(run_id: Uuid) -> Self {
        Self { run_id, logged: Vec::new(), duplicates: 0, skipped: 0, errors: 0 }
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.logged.len() + self.duplicates + self.skipped + self.errors
    }
}

/// Logs a batch the way the generation run does: every accepted candidate of
/// a category takes the next day number, counting from the category's current
/// day when the run started.
pub struct BatchLogger<'a> {
    tracker: &'a SequenceTracker,
}

impl<'a> BatchLogger<'a> {
    #[must_use]
    pub const fn new(tracker: &'a SequenceTracker) -> Self {
        Self { tracker }
    }

    /// # Errors
    /// Returns error only if a category's starting day cannot be read.
    /// Per-candidate failures are counted in the report.
    pub async fn log_batch(&self, candidates: &[CandidateIdea]) -> Result<BatchReport, TrackerError> {
        let run_id = Uuid::new_v4();
        let span = tracing::info_span!("log_batch", %run_id, candidates = candidates.len());
        self.run(run_id, candidates).instrument(span).await
    }

    async fn run(&self, run_id: Uuid, candidates: &[CandidateIdea]) -> Result<BatchReport, TrackerError> {
        let mut report = BatchReport::new(run_id);
        let mut counters: HashMap<String, u32> = HashMap::new();
        let mut seen: HashSet<String> = HashSet::new();

        for candidate in candidates {
            let title = candidate.title.trim();
            let category = match self.tracker.categories().resolve(&candidate.category) {
                Ok(category) if !title.is_empty() => category,
                _ => {
                    tracing::debug!(
                        title = %candidate.title,
                        category = %candidate.category,
                        "Skipping candidate without title or known category"
                    );
                    report.skipped += 1;
                    continue;
                },
            };

            let current = match counters.get(category.as_str()) {
                Some(&day) => day,
                None => {
                    let day = self.tracker.get_current_day(category.as_str()).await?;
                    counters.insert(category.as_str().to_owned(), day);
                    day
                },
            };

            let key = normalize_title(title);
            let duplicate = if seen.contains(&key) {
                true
            } else {
                match self.tracker.check_for_duplication(title).await {
                    Ok(found) => found,
                    Err(e) => {
                        tracing::warn!(error = %e, title, "Duplicate check failed, candidate not logged");
                        report.errors += 1;
                        continue;
                    },
                }
            };
            if duplicate {
                tracing::debug!(title, "Skipping duplicate title");
                report.duplicates += 1;
                continue;
            }

            let next = current.saturating_add(1);
            match self.tracker.log_idea(title, category.as_str(), i64::from(next)).await? {
                LogOutcome::Logged { id, replaced } => {
                    counters.insert(category.as_str().to_owned(), next);
                    seen.insert(key);
                    report.logged.push(LoggedIdea {
                        id,
                        title: title.to_owned(),
                        category: category.as_str().to_owned(),
                        sequence_day: next,
                        replaced,
                    });
                },
                LogOutcome::Failed { .. } => report.errors += 1,
            }
        }

        tracing::info!(
            logged = report.logged.len(),
            duplicates = report.duplicates,
            skipped = report.skipped,
            errors = report.errors,
            "Batch logged"
        );
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_batch_ignores_extra_fields() {
        let raw = r#"[
            {"title": "Morning", "category": "MMO", "time_slot": "Morning", "video_script": "..."},
            {"title": "Legacy", "niche": "Faceless"}
        ]"#;
        let batch = CandidateIdea::parse_batch(raw).unwrap();
        assert_eq!(
            batch,
            vec![CandidateIdea::new("Morning", "MMO"), CandidateIdea::new("Legacy", "Faceless")]
        );
    }

    #[test]
    fn parse_batch_rejects_missing_title() {
        assert!(CandidateIdea::parse_batch(r#"[{"category": "MMO"}]"#).is_err());
    }
}
