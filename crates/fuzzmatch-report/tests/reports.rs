use std::fs;

use fuzzmatch_model::{
    MatchRecord, MatchWarning, MatchingOutcome, MatchingStats, ScoreDistribution, StringItem,
};
use fuzzmatch_report::{
    DatasetLabel, ExtraColumn, MATCHES_FILE, ReportFormat, ReportRequest, ReportSummary,
    STATISTICS_FILE, SUMMARY_FILE, UNMATCHED_SOURCE_FILE, UNMATCHED_TARGET_FILE, write_reports,
    written_paths,
};
use tempfile::TempDir;

fn outcome(unmatched_target: bool) -> MatchingOutcome {
    MatchingOutcome {
        algorithm: "levenshtein".to_string(),
        matches: vec![MatchRecord {
            source: "Acme, Inc".to_string(),
            target: "ACME Inc".to_string(),
            score: 0.9,
            algorithm: "levenshtein".to_string(),
            source_row: 0,
            target_row: 0,
        }],
        unmatched_sources: vec![StringItem::new("Globex", 1).unwrap()],
        unmatched_targets: if unmatched_target {
            vec![StringItem::new("Initech", 1).unwrap()]
        } else {
            Vec::new()
        },
        warnings: vec![MatchWarning::UnknownAlgorithm {
            requested: "magic".to_string(),
            fallback: "levenshtein".to_string(),
        }],
    }
}

fn stats() -> MatchingStats {
    MatchingStats {
        total_matches: 1,
        total_sources: 2,
        match_percentage: 50.0,
        average_score: 90.0,
        distribution: ScoreDistribution {
            excellent: 1,
            ..ScoreDistribution::default()
        },
    }
}

#[test]
fn detailed_reports_write_every_file() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("out");
    let outcome = outcome(true);
    let stats = stats();
    let source = DatasetLabel::new("left.csv", "Company").with_extra_column(ExtraColumn::new(
        "City",
        vec!["Paris".to_string(), "Rome".to_string()],
    ));
    let target = DatasetLabel::new("right.csv", "Name");
    let summary = write_reports(
        &output,
        &ReportRequest {
            outcome: &outcome,
            stats: &stats,
            source: &source,
            target: &target,
            threshold: 0.6,
            format: ReportFormat::Detailed,
        },
    )
    .unwrap();

    assert_eq!(
        summary.files,
        vec![MATCHES_FILE, STATISTICS_FILE, UNMATCHED_SOURCE_FILE, UNMATCHED_TARGET_FILE]
    );
    for path in written_paths(&output, &summary) {
        assert!(path.exists(), "{} missing", path.display());
    }

    let matches = fs::read_to_string(output.join(MATCHES_FILE)).unwrap();
    let mut lines = matches.lines();
    assert_eq!(
        lines.next(),
        Some("left.csv - Company,right.csv - Name,Match Score,Algorithm,Source Row,Target Row,left.csv - City")
    );
    assert_eq!(lines.next(), Some("\"Acme, Inc\",ACME Inc,90.00%,levenshtein,1,1,Paris"));

    let unmatched = fs::read_to_string(output.join(UNMATCHED_SOURCE_FILE)).unwrap();
    assert_eq!(unmatched, "Company (Unmatched),Original Row,City\nGlobex,2,Rome\n");

    let statistics = fs::read_to_string(output.join(STATISTICS_FILE)).unwrap();
    assert!(statistics.lines().nth(1).unwrap().starts_with("2,1,50.00%,90.00%,1,0,0,0"));
}

#[test]
fn simple_reports_skip_statistics_and_empty_unmatched() {
    let dir = TempDir::new().unwrap();
    let outcome = outcome(false);
    let stats = stats();
    let source = DatasetLabel::new("left.csv", "Company");
    let target = DatasetLabel::new("right.csv", "Name");
    let summary = write_reports(
        dir.path(),
        &ReportRequest {
            outcome: &outcome,
            stats: &stats,
            source: &source,
            target: &target,
            threshold: 0.8,
            format: ReportFormat::Simple,
        },
    )
    .unwrap();

    assert_eq!(summary.files, vec![MATCHES_FILE, UNMATCHED_SOURCE_FILE]);
    assert!(!dir.path().join(STATISTICS_FILE).exists());
    assert!(!dir.path().join(UNMATCHED_TARGET_FILE).exists());

    let matches = fs::read_to_string(dir.path().join(MATCHES_FILE)).unwrap();
    assert_eq!(
        matches,
        "Company,Name,match_score\n\"Acme, Inc\",ACME Inc,90%\n"
    );
}

#[test]
fn summary_json_round_trips() {
    let dir = TempDir::new().unwrap();
    let outcome = outcome(true);
    let stats = stats();
    let source = DatasetLabel::new("left.csv", "Company");
    let target = DatasetLabel::new("right.csv", "Name");
    let written = write_reports(
        dir.path(),
        &ReportRequest {
            outcome: &outcome,
            stats: &stats,
            source: &source,
            target: &target,
            threshold: 0.6,
            format: ReportFormat::Detailed,
        },
    )
    .unwrap();

    let json = fs::read_to_string(dir.path().join(SUMMARY_FILE)).unwrap();
    let parsed: ReportSummary = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, written);
    assert_eq!(parsed.source_items, 2);
    assert_eq!(parsed.target_items, 2);
    assert_eq!(parsed.warnings.len(), 1);

    let raw: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(raw["format"], "detailed");
    assert_eq!(raw["stats"]["distribution"]["excellent"], 1);
}
