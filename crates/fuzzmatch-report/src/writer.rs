//! Writes report tables and the JSON summary into an output directory.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use fuzzmatch_model::{MatchWarning, MatchingOutcome, MatchingStats};

use crate::error::{ReportError, Result};
use crate::tables::{
    DatasetLabel, ReportFormat, Table, matches_table, statistics_table, unmatched_table,
};

pub const MATCHES_FILE: &str = "matches.csv";
pub const STATISTICS_FILE: &str = "statistics.csv";
pub const UNMATCHED_SOURCE_FILE: &str = "unmatched_source.csv";
pub const UNMATCHED_TARGET_FILE: &str = "unmatched_target.csv";
pub const SUMMARY_FILE: &str = "summary.json";

/// Everything needed to render the reports for one matching run.
#[derive(Debug, Clone)]
pub struct ReportRequest<'a> {
    pub outcome: &'a MatchingOutcome,
    pub stats: &'a MatchingStats,
    pub source: &'a DatasetLabel,
    pub target: &'a DatasetLabel,
    pub threshold: f64,
    pub format: ReportFormat,
}

/// Contents of `summary.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportSummary {
    pub generated_at: DateTime<Utc>,
    pub algorithm: String,
    pub threshold: f64,
    pub format: ReportFormat,
    pub source_file: String,
    pub source_column: String,
    pub target_file: String,
    pub target_column: String,
    pub source_items: usize,
    pub target_items: usize,
    pub unmatched_sources: usize,
    pub unmatched_targets: usize,
    pub stats: MatchingStats,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<MatchWarning>,
    /// Report files written next to the summary, in write order.
    pub files: Vec<String>,
}

/// Writes `table` as CSV to `path`, replacing any existing file.
pub fn write_table(path: &Path, table: &Table) -> Result<()> {
    let csv_error = |source| ReportError::Csv {
        path: path.to_path_buf(),
        source,
    };
    let mut writer = csv::WriterBuilder::new()
        .has_headers(true)
        .quote_style(csv::QuoteStyle::Necessary)
        .from_path(path)
        .map_err(csv_error)?;
    writer.write_record(&table.headers).map_err(csv_error)?;
    for row in &table.rows {
        writer.write_record(row).map_err(csv_error)?;
    }
    writer.flush().map_err(|source| ReportError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(())
}

/// Writes every report for `request` into `output_dir`, creating it if needed.
///
/// `matches.csv` and `summary.json` are always written; `statistics.csv` only
/// in detailed format; the unmatched files only when they would have rows.
pub fn write_reports(output_dir: &Path, request: &ReportRequest<'_>) -> Result<ReportSummary> {
    fs::create_dir_all(output_dir).map_err(|source| ReportError::CreateDir {
        path: output_dir.to_path_buf(),
        source,
    })?;

    let outcome = request.outcome;
    let mut files = Vec::new();
    let mut emit = |name: &str, table: &Table| -> Result<()> {
        let path = output_dir.join(name);
        write_table(&path, table)?;
        tracing::debug!(path = %path.display(), rows = table.rows.len(), "wrote report");
        files.push(name.to_string());
        Ok(())
    };

    emit(
        MATCHES_FILE,
        &matches_table(&outcome.matches, request.source, request.target, request.format),
    )?;
    if request.format == ReportFormat::Detailed {
        emit(STATISTICS_FILE, &statistics_table(request.stats))?;
    }
    let unmatched_sources = unmatched_table(&outcome.unmatched_sources, request.source);
    if !unmatched_sources.is_empty() {
        emit(UNMATCHED_SOURCE_FILE, &unmatched_sources)?;
    }
    let unmatched_targets = unmatched_table(&outcome.unmatched_targets, request.target);
    if !unmatched_targets.is_empty() {
        emit(UNMATCHED_TARGET_FILE, &unmatched_targets)?;
    }

    let summary = ReportSummary {
        generated_at: Utc::now(),
        algorithm: outcome.algorithm.clone(),
        threshold: request.threshold,
        format: request.format,
        source_file: request.source.file_name.clone(),
        source_column: request.source.column.clone(),
        target_file: request.target.file_name.clone(),
        target_column: request.target.column.clone(),
        source_items: outcome.source_count(),
        target_items: outcome.target_count(),
        unmatched_sources: outcome.unmatched_sources.len(),
        unmatched_targets: outcome.unmatched_targets.len(),
        stats: *request.stats,
        warnings: outcome.warnings.clone(),
        files,
    };
    write_summary(&output_dir.join(SUMMARY_FILE), &summary)?;
    tracing::info!(
        output_dir = %output_dir.display(),
        files = summary.files.len() + 1,
        "reports written"
    );
    Ok(summary)
}

fn write_summary(path: &Path, summary: &ReportSummary) -> Result<()> {
    let json = serde_json::to_string_pretty(summary).map_err(|source| ReportError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    fs::write(path, json).map_err(|source| ReportError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Paths of the files listed in `summary`, plus the summary itself.
pub fn written_paths(output_dir: &Path, summary: &ReportSummary) -> Vec<PathBuf> {
    summary
        .files
        .iter()
        .map(String::as_str)
        .chain(std::iter::once(SUMMARY_FILE))
        .map(|name| output_dir.join(name))
        .collect()
}
