//! Report generation for matching outcomes.
//!
//! Reports are plain CSV files (matches, statistics, unmatched items per side)
//! plus a `summary.json` describing the run.

pub mod error;
pub mod tables;
pub mod writer;

pub use error::{ReportError, Result};
pub use tables::{
    DatasetLabel, ExtraColumn, ReportFormat, Table, format_percent, format_whole_percent,
    matches_table, statistics_table, unmatched_table,
};
pub use writer::{
    MATCHES_FILE, ReportRequest, ReportSummary, STATISTICS_FILE, SUMMARY_FILE,
    UNMATCHED_SOURCE_FILE, UNMATCHED_TARGET_FILE, write_reports, write_table, written_paths,
};
