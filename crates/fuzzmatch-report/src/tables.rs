//! In-memory report tables: one header row plus string rows.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use fuzzmatch_model::{MatchRecord, MatchingStats, StringItem};

/// Layout of `matches.csv`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// File-qualified headers, two-decimal scores, row numbers and statistics.
    #[default]
    Detailed,
    /// Bare column headers and whole-percent scores.
    Simple,
}

impl ReportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Detailed => "detailed",
            Self::Simple => "simple",
        }
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "detailed" => Ok(Self::Detailed),
            "simple" => Ok(Self::Simple),
            other => Err(format!("unknown report format '{other}'")),
        }
    }
}

/// A context column copied into the reports next to the matched value.
///
/// `values` is indexed by the same row positions as the matched column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtraColumn {
    pub name: String,
    pub values: Vec<String>,
}

impl ExtraColumn {
    pub fn new(name: impl Into<String>, values: Vec<String>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }

    fn value(&self, row: usize) -> &str {
        self.values.get(row).map(String::as_str).unwrap_or("")
    }
}

/// One side of the comparison as it should be labelled in reports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetLabel {
    pub file_name: String,
    pub column: String,
    pub extra_columns: Vec<ExtraColumn>,
}

impl DatasetLabel {
    pub fn new(file_name: impl Into<String>, column: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            column: column.into(),
            extra_columns: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_extra_column(mut self, column: ExtraColumn) -> Self {
        self.extra_columns.push(column);
        self
    }

    fn qualified(&self, column: &str) -> String {
        format!("{} - {}", self.file_name, column)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Score as a percentage with two decimals, e.g. `87.50%`.
pub fn format_percent(score: f64) -> String {
    format!("{:.2}%", score * 100.0)
}

/// Score as a whole percentage, e.g. `88%`.
pub fn format_whole_percent(score: f64) -> String {
    format!("{:.0}%", (score * 100.0).round())
}

pub fn matches_table(
    matches: &[MatchRecord],
    source: &DatasetLabel,
    target: &DatasetLabel,
    format: ReportFormat,
) -> Table {
    let mut headers = match format {
        ReportFormat::Detailed => vec![
            source.qualified(&source.column),
            target.qualified(&target.column),
            "Match Score".to_string(),
            "Algorithm".to_string(),
            "Source Row".to_string(),
            "Target Row".to_string(),
        ],
        ReportFormat::Simple => vec![
            source.column.clone(),
            target.column.clone(),
            "match_score".to_string(),
        ],
    };
    for extra in &source.extra_columns {
        headers.push(match format {
            ReportFormat::Detailed => source.qualified(&extra.name),
            ReportFormat::Simple => format!("{} (File1)", extra.name),
        });
    }
    for extra in &target.extra_columns {
        headers.push(match format {
            ReportFormat::Detailed => target.qualified(&extra.name),
            ReportFormat::Simple => format!("{} (File2)", extra.name),
        });
    }

    let rows = matches
        .iter()
        .map(|record| {
            let mut row = match format {
                ReportFormat::Detailed => vec![
                    record.source.clone(),
                    record.target.clone(),
                    format_percent(record.score),
                    record.algorithm.clone(),
                    (record.source_row + 1).to_string(),
                    (record.target_row + 1).to_string(),
                ],
                ReportFormat::Simple => vec![
                    record.source.clone(),
                    record.target.clone(),
                    format_whole_percent(record.score),
                ],
            };
            row.extend(
                source
                    .extra_columns
                    .iter()
                    .map(|extra| extra.value(record.source_row).to_string()),
            );
            row.extend(
                target
                    .extra_columns
                    .iter()
                    .map(|extra| extra.value(record.target_row).to_string()),
            );
            row
        })
        .collect();

    Table { headers, rows }
}

pub fn unmatched_table(items: &[StringItem], dataset: &DatasetLabel) -> Table {
    let mut headers = vec![
        format!("{} (Unmatched)", dataset.column),
        "Original Row".to_string(),
    ];
    headers.extend(dataset.extra_columns.iter().map(|extra| extra.name.clone()));

    let rows = items
        .iter()
        .map(|item| {
            let mut row = vec![item.value().to_string(), (item.row_index() + 1).to_string()];
            row.extend(
                dataset
                    .extra_columns
                    .iter()
                    .map(|extra| extra.value(item.row_index()).to_string()),
            );
            row
        })
        .collect();

    Table { headers, rows }
}

pub fn statistics_table(stats: &MatchingStats) -> Table {
    let headers = [
        "Total Source Items",
        "Total Matches Found",
        "Match Percentage",
        "Average Match Score",
        "Excellent Matches (90%+)",
        "Good Matches (70-89%)",
        "Fair Matches (50-69%)",
        "Poor Matches (<50%)",
    ]
    .into_iter()
    .map(str::to_string)
    .collect();
    let row = vec![
        stats.total_sources.to_string(),
        stats.total_matches.to_string(),
        format!("{:.2}%", stats.match_percentage),
        format!("{:.2}%", stats.average_score),
        stats.distribution.excellent.to_string(),
        stats.distribution.good.to_string(),
        stats.distribution.fair.to_string(),
        stats.distribution.poor.to_string(),
    ];
    Table {
        headers,
        rows: vec![row],
    }
}
