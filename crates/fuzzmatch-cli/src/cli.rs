//! CLI argument definitions for fuzzmatch.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use fuzzmatch_engine::{DEFAULT_MAX_RESULTS, DEFAULT_SEARCH_LIMIT, DEFAULT_THRESHOLD};
use fuzzmatch_similarity::DEFAULT_ALGORITHM;

#[derive(Parser)]
#[command(
    name = "fuzzmatch",
    version,
    about = "Fuzzy-match the values of two columns from CSV/TSV files",
    long_about = "Fuzzy-match the values of one column in a source file against one column \
                  in a target file.\n\n\
                  Each source value claims its best-scoring unclaimed target value above the \
                  threshold. Results are written as CSV reports plus a JSON summary."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Allow cell values in log output (redacted otherwise).
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Match a column of one file against a column of another and write reports.
    Match(MatchArgs),

    /// List the available similarity algorithms.
    Algorithms,

    /// Show the columns of a CSV/TSV file.
    Columns(ColumnsArgs),

    /// Rank the values of one column against a single query.
    Search(SearchArgs),
}

#[derive(Parser)]
pub struct MatchArgs {
    /// File whose values look for a match.
    #[arg(value_name = "SOURCE_FILE")]
    pub source_file: PathBuf,

    /// File whose values can be claimed by a source value.
    #[arg(value_name = "TARGET_FILE")]
    pub target_file: PathBuf,

    /// Column to match in the source file.
    #[arg(long = "source-column", short = 's', value_name = "COLUMN")]
    pub source_column: String,

    /// Column to match in the target file.
    #[arg(long = "target-column", short = 't', value_name = "COLUMN")]
    pub target_column: String,

    /// Similarity algorithm id (see `fuzzmatch algorithms`).
    #[arg(long, short = 'a', default_value = DEFAULT_ALGORITHM)]
    pub algorithm: String,

    /// Minimum score, between 0 and 1, for a pair to count as a match.
    #[arg(long, default_value_t = DEFAULT_THRESHOLD)]
    pub threshold: f64,

    /// Stop after this many matches.
    #[arg(long = "max-results", default_value_t = DEFAULT_MAX_RESULTS)]
    pub max_results: usize,

    /// Directory for the report files.
    #[arg(long = "output-dir", short = 'o', default_value = "fuzzmatch-output")]
    pub output_dir: PathBuf,

    /// Write the compact report layout (no statistics file).
    #[arg(long)]
    pub simple: bool,

    /// Additional source column to copy into the reports (repeatable).
    #[arg(long = "extra-source-column", value_name = "COLUMN")]
    pub extra_source_columns: Vec<String>,

    /// Additional target column to copy into the reports (repeatable).
    #[arg(long = "extra-target-column", value_name = "COLUMN")]
    pub extra_target_columns: Vec<String>,

    /// Number of matches to preview in the terminal.
    #[arg(long, default_value_t = 10)]
    pub top: usize,

    /// Run the matching without writing any files.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

#[derive(Parser)]
pub struct ColumnsArgs {
    /// CSV or TSV file to inspect.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
}

#[derive(Parser)]
pub struct SearchArgs {
    /// Text to look for.
    #[arg(value_name = "QUERY")]
    pub query: String,

    /// CSV or TSV file to search.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Column holding the candidate values.
    #[arg(long, short = 'c', value_name = "COLUMN")]
    pub column: String,

    /// Similarity algorithm id.
    #[arg(long, short = 'a', default_value = DEFAULT_ALGORITHM)]
    pub algorithm: String,

    /// Maximum number of hits to show.
    #[arg(long, short = 'n', default_value_t = DEFAULT_SEARCH_LIMIT)]
    pub limit: usize,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
