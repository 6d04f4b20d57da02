use std::path::PathBuf;

use serde::Serialize;

/// Record issues kept in a [`RunResult`]; later ones are only counted.
pub const MAX_RECORDED_ISSUES: usize = 1_000;

/// Outcome of one `standardize` run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RunResult {
    pub input_file: PathBuf,
    pub output_file: PathBuf,
    pub batches: usize,
    pub records_read: usize,
    pub records_written: usize,
    pub records_skipped: usize,
    pub records_kept_with_errors: usize,
    pub duration_ms: u128,
    pub issues: Vec<RecordIssue>,
}

impl RunResult {
    /// Records skipped or kept with errors, recorded in `issues` or not.
    pub fn error_count(&self) -> usize {
        self.records_skipped + self.records_kept_with_errors
    }

    pub fn has_errors(&self) -> bool {
        self.error_count() > 0
    }
}

/// A record that could not be standardized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecordIssue {
    pub row: usize,
    pub column: String,
    pub action: IssueAction,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueAction {
    Skipped,
    Kept,
}
