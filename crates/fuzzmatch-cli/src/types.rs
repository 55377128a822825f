use std::path::PathBuf;
use std::time::Duration;

use fuzzmatch_engine::{MatchOptions, SearchHit};
use fuzzmatch_model::{MatchWarning, MatchingOutcome, MatchingStats};
use fuzzmatch_report::{DatasetLabel, ReportFormat, ReportSummary};

/// Inputs of one `match` invocation.
#[derive(Debug, Clone)]
pub struct MatchRequest {
    pub source_file: PathBuf,
    pub target_file: PathBuf,
    pub source_column: String,
    pub target_column: String,
    pub extra_source_columns: Vec<String>,
    pub extra_target_columns: Vec<String>,
    pub options: MatchOptions,
    pub format: ReportFormat,
    /// `None` skips report writing.
    pub output_dir: Option<PathBuf>,
}

#[derive(Debug)]
pub struct MatchRun {
    pub outcome: MatchingOutcome,
    pub stats: MatchingStats,
    pub source: DatasetLabel,
    pub target: DatasetLabel,
    pub threshold: f64,
    pub output_dir: Option<PathBuf>,
    pub report: Option<ReportSummary>,
    pub elapsed: Duration,
}

impl MatchRun {
    pub fn written_files(&self) -> Vec<PathBuf> {
        match (&self.output_dir, &self.report) {
            (Some(dir), Some(report)) => fuzzmatch_report::written_paths(dir, report),
            _ => Vec::new(),
        }
    }
}

#[derive(Debug)]
pub struct SearchRun {
    pub query: String,
    pub algorithm: String,
    pub fallback: Option<MatchWarning>,
    pub candidates: usize,
    pub hits: Vec<SearchHit>,
}

/// Header listing for `fuzzmatch columns`.
#[derive(Debug)]
pub struct ColumnListing {
    pub file_name: String,
    pub format: String,
    pub rows: usize,
    pub columns: Vec<ColumnSummary>,
}

#[derive(Debug)]
pub struct ColumnSummary {
    pub name: String,
    pub non_blank: usize,
    /// First non-blank value.
    pub sample: Option<String>,
}
