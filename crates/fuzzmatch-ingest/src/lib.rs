//! Input side of fuzzmatch: loads CSV/TSV files and pulls out the columns to
//! match, keeping row positions so results can be joined back.

pub mod error;
pub mod format;
pub mod table;

pub use error::{IngestError, Result};
pub use format::DelimitedFormat;
pub use table::{DataTable, MAX_FILE_SIZE, check_file_size, read_column, read_table};
