//! Error types for reading input tables.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading a delimited file.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    #[error("input file not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("file {path} is {size} bytes, above the {max_size} byte limit")]
    FileTooLarge {
        path: PathBuf,
        size: u64,
        max_size: u64,
    },

    /// Only `.csv`, `.tsv` and `.tab` files are accepted.
    #[error("unsupported file type '{extension}' for {path} (expected .csv, .tsv or .tab)")]
    UnsupportedFormat { path: PathBuf, extension: String },

    // === Parsing Errors ===
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// The file has no non-blank rows.
    #[error("file is empty: {path}")]
    EmptyFile { path: PathBuf },

    /// The first row contains no column names.
    #[error("no header row found in {path}")]
    NoHeader { path: PathBuf },

    // === Column Errors ===
    #[error("column '{column}' not found in {path}; available columns: {}", available.join(", "))]
    ColumnNotFound {
        column: String,
        path: PathBuf,
        available: Vec<String>,
    },
}

/// Result type for ingest operations.
pub type Result<T> = std::result::Result<T, IngestError>;
