//! File-to-report pipeline behind the CLI subcommands.
//!
//! Everything here returns data; printing is left to the binary.

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{debug, info, info_span, trace, warn};

use fuzzmatch_engine::{MatchEngine, matching_stats, rank};
use fuzzmatch_ingest::{DataTable, read_table};
use fuzzmatch_report::{DatasetLabel, ExtraColumn, ReportRequest, write_reports};
use fuzzmatch_similarity::AlgorithmRegistry;

use crate::logging::redact_value;
use crate::types::{ColumnListing, ColumnSummary, MatchRequest, MatchRun, SearchRun};

/// Values of one column plus the label used for it in reports.
#[derive(Debug, Clone)]
pub struct LoadedColumn {
    pub values: Vec<String>,
    pub label: DatasetLabel,
}

pub fn load_table(path: &Path) -> Result<DataTable> {
    let table = read_table(path).with_context(|| format!("read {}", path.display()))?;
    info!(
        path = %path.display(),
        format = %table.format,
        rows = table.row_count(),
        columns = table.headers.len(),
        "loaded table"
    );
    Ok(table)
}

/// Pulls `column` and any `extras` out of `table`.
///
/// Extra columns keep the row positions of the matched column so reports can
/// look them up by the row index of each item.
pub fn select_columns(table: &DataTable, column: &str, extras: &[String]) -> Result<LoadedColumn> {
    let values = table
        .column_values(column)
        .with_context(|| format!("select column in {}", table.file_name()))?;
    let header = table.column_name(column)?.to_string();
    if let Some(first) = values.iter().find(|value| !value.trim().is_empty()) {
        trace!(column = %header, first = redact_value(first), "first value");
    }

    let mut label = DatasetLabel::new(table.file_name(), header);
    for extra in extras {
        let name = table
            .column_name(extra)
            .with_context(|| format!("select extra column in {}", table.file_name()))?
            .to_string();
        let extra_values = table.column_values(extra)?;
        label = label.with_extra_column(ExtraColumn::new(name, extra_values));
    }
    Ok(LoadedColumn { values, label })
}

pub fn load_column(path: &Path, column: &str, extras: &[String]) -> Result<LoadedColumn> {
    let table = load_table(path)?;
    select_columns(&table, column, extras)
}

/// Loads both files, runs the engine and writes reports when an output
/// directory is set.
pub fn run_match(engine: &MatchEngine, request: &MatchRequest) -> Result<MatchRun> {
    let span = info_span!(
        "match",
        algorithm = %request.options.algorithm,
        threshold = request.options.threshold
    );
    let _guard = span.enter();
    let start = Instant::now();

    let source = load_column(
        &request.source_file,
        &request.source_column,
        &request.extra_source_columns,
    )
    .context("load source")?;
    let target = load_column(
        &request.target_file,
        &request.target_column,
        &request.extra_target_columns,
    )
    .context("load target")?;

    let outcome = engine
        .run(&source.values, &target.values, &request.options)
        .context("match values")?;
    let stats = matching_stats(&outcome.matches, outcome.source_count());
    debug!(
        matches = stats.total_matches,
        percentage = stats.match_percentage,
        average = stats.average_score,
        "computed statistics"
    );

    let report = match &request.output_dir {
        Some(dir) => {
            let report_request = ReportRequest {
                outcome: &outcome,
                stats: &stats,
                source: &source.label,
                target: &target.label,
                threshold: request.options.threshold,
                format: request.format,
            };
            let summary = write_reports(dir, &report_request)
                .with_context(|| format!("write reports to {}", dir.display()))?;
            Some(summary)
        }
        None => {
            info!("dry run, no reports written");
            None
        }
    };

    Ok(MatchRun {
        outcome,
        stats,
        source: source.label,
        target: target.label,
        threshold: request.options.threshold,
        output_dir: request.output_dir.clone(),
        report,
        elapsed: start.elapsed(),
    })
}

/// Ranks the values of `column` in `path` against `query`.
pub fn run_search(
    registry: &AlgorithmRegistry,
    query: &str,
    path: &Path,
    column: &str,
    algorithm: &str,
    limit: usize,
) -> Result<SearchRun> {
    let span = info_span!("search", algorithm = %algorithm, limit);
    let _guard = span.enter();

    let loaded = load_column(path, column, &[])?;
    let resolution = registry.resolve(algorithm);
    if let Some(warning) = &resolution.fallback {
        warn!(requested = %algorithm, fallback = %resolution.algorithm.id(), "{}", warning.message());
    }
    debug!(query = redact_value(query), "ranking candidates");
    let hits = rank(query, &loaded.values, resolution.algorithm.scorer(), limit);
    info!(
        candidates = loaded.values.len(),
        hits = hits.len(),
        "search finished"
    );

    Ok(SearchRun {
        query: query.trim().to_string(),
        algorithm: resolution.algorithm.id().to_string(),
        fallback: resolution.fallback,
        candidates: loaded.values.len(),
        hits,
    })
}

pub fn list_columns(path: &Path) -> Result<ColumnListing> {
    let table = load_table(path)?;
    let columns = table
        .headers
        .iter()
        .enumerate()
        .map(|(index, name)| {
            let mut non_blank = 0;
            let mut sample = None;
            for row in 0..table.row_count() {
                let Some(cell) = table.cell(row, index) else {
                    continue;
                };
                if cell.trim().is_empty() {
                    continue;
                }
                non_blank += 1;
                if sample.is_none() {
                    sample = Some(cell.to_string());
                }
            }
            ColumnSummary {
                name: name.clone(),
                non_blank,
                sample,
            }
        })
        .collect();

    Ok(ColumnListing {
        file_name: table.file_name(),
        format: table.format.to_string(),
        rows: table.row_count(),
        columns,
    })
}
