use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A single planned renderer invocation. `format` is what the renderer is
/// asked to produce and what `output`'s suffix was derived from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderJob {
    pub input: PathBuf,
    pub output: PathBuf,
    pub format: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RenderStatus {
    Succeeded,
    /// Non-zero exit. `code` is `None` when the renderer was killed by a signal.
    Failed { code: Option<i32> },
    /// The renderer could not be launched at all.
    SpawnFailed { reason: String },
    /// Dry run.
    Skipped,
}

impl RenderStatus {
    pub fn is_failure(&self) -> bool {
        matches!(
            self,
            RenderStatus::Failed { .. } | RenderStatus::SpawnFailed { .. }
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderOutcome {
    pub job: RenderJob,
    #[serde(flatten)]
    pub status: RenderStatus,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RenderReport {
    pub directory: PathBuf,
    pub outcomes: Vec<RenderOutcome>,
}

impl RenderReport {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
            outcomes: Vec::new(),
        }
    }

    pub fn record(&mut self, job: RenderJob, status: RenderStatus) {
        self.outcomes.push(RenderOutcome { job, status });
    }

    /// Number of matching entries considered, dry-run entries included.
    pub fn attempted(&self) -> usize {
        self.outcomes.len()
    }

    pub fn succeeded(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| o.status == RenderStatus::Succeeded)
            .count()
    }

    pub fn failed(&self) -> usize {
        self.failures().count()
    }

    pub fn failures(&self) -> impl Iterator<Item = &RenderOutcome> {
        self.outcomes.iter().filter(|o| o.status.is_failure())
    }

    pub fn is_clean(&self) -> bool {
        self.failed() == 0
    }
}
