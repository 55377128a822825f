use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use fuzzmatch_cli::pipeline::{list_columns, load_column, run_match, run_search};
use fuzzmatch_cli::types::MatchRequest;
use fuzzmatch_engine::{MatchEngine, MatchOptions, NoopObserver};
use fuzzmatch_model::MatchWarning;
use fuzzmatch_report::{
    MATCHES_FILE, ReportFormat, STATISTICS_FILE, SUMMARY_FILE, UNMATCHED_TARGET_FILE,
};
use fuzzmatch_similarity::AlgorithmRegistry;
use tempfile::TempDir;

fn write(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    path
}

fn fixtures(dir: &Path) -> (PathBuf, PathBuf) {
    let source = write(
        dir,
        "companies.csv",
        "Company,City\nJohn Smith,Boston\n,Nowhere\nMicrosoft Corp,Seattle\n",
    );
    let target = write(
        dir,
        "contacts.tsv",
        "Name\tRegion\nJ. Smith\tEast\nMicrosoft Corporation\tWest\nQ\tSouth\n",
    );
    (source, target)
}

fn request(
    source: PathBuf,
    target: PathBuf,
    algorithm: &str,
    output: Option<PathBuf>,
) -> MatchRequest {
    MatchRequest {
        source_file: source,
        target_file: target,
        source_column: "company".to_string(),
        target_column: "Name".to_string(),
        extra_source_columns: vec!["City".to_string()],
        extra_target_columns: vec!["Region".to_string()],
        options: MatchOptions::new(algorithm),
        format: ReportFormat::Detailed,
        output_dir: output,
    }
}

fn quiet_engine() -> MatchEngine {
    MatchEngine::new().with_observer(Arc::new(NoopObserver))
}

#[test]
fn match_run_writes_reports_with_extra_columns() {
    let dir = TempDir::new().unwrap();
    let (source, target) = fixtures(dir.path());
    let output = dir.path().join("reports");

    let run = run_match(
        &quiet_engine(),
        &request(source, target, "jaro-winkler", Some(output.clone())),
    )
    .unwrap();

    assert_eq!(run.outcome.match_count(), 2);
    assert_eq!(run.outcome.source_count(), 2);
    assert!(run.outcome.unmatched_sources.is_empty());
    assert_eq!(run.outcome.unmatched_targets[0].value(), "Q");
    assert_eq!(run.source.column, "Company");
    assert_eq!(run.stats.match_percentage, 100.0);

    let report = run.report.as_ref().unwrap();
    assert_eq!(
        report.files,
        vec![MATCHES_FILE, STATISTICS_FILE, UNMATCHED_TARGET_FILE]
    );
    assert_eq!(run.written_files().len(), 4);
    assert!(output.join(SUMMARY_FILE).exists());

    let matches = fs::read_to_string(output.join(MATCHES_FILE)).unwrap();
    let lines: Vec<&str> = matches.lines().collect();
    assert_eq!(
        lines[0],
        "companies.csv - Company,contacts.tsv - Name,Match Score,Algorithm,\
         Source Row,Target Row,companies.csv - City,contacts.tsv - Region"
    );
    assert!(lines[1].starts_with("John Smith,J. Smith,"));
    assert!(lines[1].ends_with(",jaro-winkler,1,1,Boston,East"));
    assert!(lines[2].starts_with("Microsoft Corp,Microsoft Corporation,"));
    assert!(lines[2].ends_with(",jaro-winkler,3,2,Seattle,West"));

    let unmatched = fs::read_to_string(output.join(UNMATCHED_TARGET_FILE)).unwrap();
    assert_eq!(unmatched, "Name (Unmatched),Original Row,Region\nQ,3,South\n");
}

#[test]
fn dry_run_skips_reports() {
    let dir = TempDir::new().unwrap();
    let (source, target) = fixtures(dir.path());

    let run = run_match(&quiet_engine(), &request(source, target, "jaro-winkler", None)).unwrap();

    assert!(run.report.is_none());
    assert!(run.written_files().is_empty());
    assert_eq!(run.outcome.match_count(), 2);
    assert!(!dir.path().join("fuzzmatch-output").exists());
}

#[test]
fn unknown_algorithm_falls_back_with_warning() {
    let dir = TempDir::new().unwrap();
    let (source, target) = fixtures(dir.path());

    let run = run_match(&quiet_engine(), &request(source, target, "telepathy", None)).unwrap();

    assert_eq!(run.outcome.algorithm, "levenshtein");
    assert_eq!(
        run.outcome.warnings,
        vec![MatchWarning::UnknownAlgorithm {
            requested: "telepathy".to_string(),
            fallback: "levenshtein".to_string(),
        }]
    );
}

#[test]
fn missing_column_names_the_available_ones() {
    let dir = TempDir::new().unwrap();
    let (source, _) = fixtures(dir.path());

    let error = load_column(&source, "Employer", &[]).unwrap_err();
    let message = format!("{error:#}");
    assert!(message.contains("Employer"), "{message}");
    assert!(message.contains("Company, City"), "{message}");
}

#[test]
fn blank_target_column_is_a_request_error() {
    let dir = TempDir::new().unwrap();
    let (source, _) = fixtures(dir.path());
    let target = write(dir.path(), "blank.csv", "Name,Region\n ,East\n,West\n");
    let output = dir.path().join("never");

    let result = run_match(
        &quiet_engine(),
        &MatchRequest {
            extra_target_columns: Vec::new(),
            ..request(source, target, "levenshtein", Some(output.clone()))
        },
    );

    assert!(result.is_err());
    assert!(!output.exists());
}

#[test]
fn search_ranks_exact_value_first() {
    let dir = TempDir::new().unwrap();
    let (source, _) = fixtures(dir.path());

    let run = run_search(
        &AlgorithmRegistry::builtin(),
        "  Microsoft Corp ",
        &source,
        "Company",
        "JARO-WINKLER",
        5,
    )
    .unwrap();

    assert_eq!(run.query, "Microsoft Corp");
    assert_eq!(run.algorithm, "jaro-winkler");
    assert!(run.fallback.is_none());
    assert_eq!(run.candidates, 3);
    assert_eq!(run.hits[0].value, "Microsoft Corp");
    assert_eq!(run.hits[0].row_index, 2);
    assert_eq!(run.hits[0].score, 1.0);
}

#[test]
fn column_listing_counts_filled_cells() {
    let dir = TempDir::new().unwrap();
    let (source, _) = fixtures(dir.path());

    let listing = list_columns(&source).unwrap();

    assert_eq!(listing.file_name, "companies.csv");
    assert_eq!(listing.rows, 3);
    assert_eq!(listing.columns.len(), 2);
    assert_eq!(listing.columns[0].name, "Company");
    assert_eq!(listing.columns[0].non_blank, 2);
    assert_eq!(listing.columns[0].sample.as_deref(), Some("John Smith"));
    assert_eq!(listing.columns[1].non_blank, 3);
}
