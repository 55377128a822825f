use anyhow::{Result, bail};
use tracing::info;

use fuzzmatch_cli::pipeline::{
    list_columns, run_match as run_match_pipeline, run_search as run_search_pipeline,
};
use fuzzmatch_cli::types::{MatchRequest, MatchRun};
use fuzzmatch_engine::{MatchEngine, MatchOptions};
use fuzzmatch_report::ReportFormat;
use fuzzmatch_similarity::AlgorithmRegistry;

use crate::cli::{ColumnsArgs, MatchArgs, SearchArgs};
use crate::summary::{print_algorithms, print_columns, print_search};

pub fn run_match(args: &MatchArgs) -> Result<MatchRun> {
    let request = MatchRequest {
        source_file: args.source_file.clone(),
        target_file: args.target_file.clone(),
        source_column: args.source_column.clone(),
        target_column: args.target_column.clone(),
        extra_source_columns: args.extra_source_columns.clone(),
        extra_target_columns: args.extra_target_columns.clone(),
        options: MatchOptions::new(&args.algorithm)
            .with_threshold(args.threshold)
            .with_max_results(args.max_results),
        format: if args.simple {
            ReportFormat::Simple
        } else {
            ReportFormat::Detailed
        },
        output_dir: (!args.dry_run).then(|| args.output_dir.clone()),
    };
    let engine = MatchEngine::new();
    let run = run_match_pipeline(&engine, &request)?;
    info!(
        matches = run.stats.total_matches,
        elapsed_ms = run.elapsed.as_millis(),
        "match finished"
    );
    Ok(run)
}

pub fn run_algorithms() -> Result<()> {
    let registry = AlgorithmRegistry::builtin();
    print_algorithms(&registry);
    Ok(())
}

pub fn run_columns(args: &ColumnsArgs) -> Result<()> {
    let listing = list_columns(&args.file)?;
    print_columns(&listing);
    Ok(())
}

pub fn run_search(args: &SearchArgs) -> Result<()> {
    if args.query.trim().is_empty() {
        bail!("search query is blank");
    }
    let registry = AlgorithmRegistry::builtin();
    let run = run_search_pipeline(
        &registry,
        &args.query,
        &args.file,
        &args.column,
        &args.algorithm,
        args.limit,
    )?;
    print_search(&run);
    Ok(())
}
