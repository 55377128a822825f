//! Header + rows view of a delimited file.

use std::fs::File;
use std::path::{Path, PathBuf};

use csv::ReaderBuilder;

use crate::error::{IngestError, Result};
use crate::format::DelimitedFormat;

/// Maximum input size accepted by [`read_table`] (500 MB).
pub const MAX_FILE_SIZE: u64 = 500 * 1024 * 1024;

/// A loaded file: one header row plus data rows padded to the header width.
///
/// Fully blank lines are dropped, so `rows[i]` is the i-th non-blank data row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataTable {
    pub path: PathBuf,
    pub format: DelimitedFormat,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    trimmed.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

fn io_error(path: &Path, source: std::io::Error) -> IngestError {
    if source.kind() == std::io::ErrorKind::NotFound {
        IngestError::FileNotFound {
            path: path.to_path_buf(),
        }
    } else {
        IngestError::FileRead {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Rejects missing files and files above `max_size` bytes.
pub fn check_file_size(path: &Path, max_size: u64) -> Result<()> {
    let metadata = std::fs::metadata(path).map_err(|e| io_error(path, e))?;
    if metadata.len() > max_size {
        return Err(IngestError::FileTooLarge {
            path: path.to_path_buf(),
            size: metadata.len(),
            max_size,
        });
    }
    Ok(())
}

/// Reads a `.csv`, `.tsv` or `.tab` file. The first non-blank row is the header.
pub fn read_table(path: &Path) -> Result<DataTable> {
    let format = DelimitedFormat::from_path(path)?;
    check_file_size(path, MAX_FILE_SIZE)?;

    let file = File::open(path).map_err(|e| io_error(path, e))?;
    let mut reader = ReaderBuilder::new()
        .delimiter(format.delimiter())
        .has_headers(false)
        .flexible(true)
        .from_reader(file);

    let mut raw_rows: Vec<Vec<String>> = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|source| IngestError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        let row: Vec<String> = record.iter().map(normalize_cell).collect();
        if row.iter().all(String::is_empty) {
            continue;
        }
        raw_rows.push(row);
    }

    let mut raw_rows = raw_rows.into_iter();
    let Some(header_row) = raw_rows.next() else {
        return Err(IngestError::EmptyFile {
            path: path.to_path_buf(),
        });
    };
    let headers: Vec<String> = header_row.iter().map(|value| normalize_header(value)).collect();
    if headers.iter().all(String::is_empty) {
        return Err(IngestError::NoHeader {
            path: path.to_path_buf(),
        });
    }

    let rows: Vec<Vec<String>> = raw_rows
        .map(|mut row| {
            row.resize(headers.len(), String::new());
            row
        })
        .collect();

    tracing::debug!(
        path = %path.display(),
        %format,
        columns = headers.len(),
        rows = rows.len(),
        "loaded table"
    );

    Ok(DataTable {
        path: path.to_path_buf(),
        format,
        headers,
        rows,
    })
}

impl DataTable {
    /// File name without directories, used to label report columns.
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Index of `name`: exact header match first, then case-insensitive.
    pub fn column_index(&self, name: &str) -> Result<usize> {
        let wanted = name.trim();
        self.headers
            .iter()
            .position(|header| header == wanted)
            .or_else(|| {
                let lowered = wanted.to_lowercase();
                self.headers
                    .iter()
                    .position(|header| header.to_lowercase() == lowered)
            })
            .ok_or_else(|| IngestError::ColumnNotFound {
                column: name.to_string(),
                path: self.path.clone(),
                available: self.headers.clone(),
            })
    }

    /// Header text of the column `name` resolves to.
    pub fn column_name(&self, name: &str) -> Result<&str> {
        let idx = self.column_index(name)?;
        Ok(self.headers[idx].as_str())
    }

    /// Every value of column `name`, one per data row, blanks included.
    pub fn column_values(&self, name: &str) -> Result<Vec<String>> {
        let idx = self.column_index(name)?;
        Ok(self.rows.iter().map(|row| row[idx].clone()).collect())
    }

    /// Cell at data row `row` of column `column`, if both exist.
    pub fn cell(&self, row: usize, column: usize) -> Option<&str> {
        self.rows
            .get(row)
            .and_then(|values| values.get(column))
            .map(String::as_str)
    }
}

/// Reads `path` and returns the values of `column`.
pub fn read_column(path: &Path, column: &str) -> Result<Vec<String>> {
    read_table(path)?.column_values(column)
}
