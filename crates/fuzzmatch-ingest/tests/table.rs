use std::fs;
use std::path::PathBuf;

use fuzzmatch_ingest::{DelimitedFormat, IngestError, check_file_size, read_column, read_table};
use tempfile::TempDir;

fn temp_file(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).expect("write file");
    path
}

#[test]
fn reads_csv_with_bom_and_padding() {
    let dir = TempDir::new().unwrap();
    let path = temp_file(
        &dir,
        "companies.csv",
        "\u{feff}Company Name , City\nAcme Corp,Springfield\n\n,,\nGlobex\n",
    );
    let table = read_table(&path).expect("read csv");
    assert_eq!(table.format, DelimitedFormat::Csv);
    assert_eq!(table.headers, vec!["Company Name", "City"]);
    assert_eq!(table.row_count(), 2);
    assert_eq!(table.rows[1], vec!["Globex", ""]);
    assert_eq!(table.file_name(), "companies.csv");
}

#[test]
fn reads_tab_separated_files() {
    let dir = TempDir::new().unwrap();
    let path = temp_file(&dir, "people.tsv", "name\tcity\nSmith, John\tParis\n");
    let values = read_column(&path, "name").expect("read column");
    assert_eq!(values, vec!["Smith, John"]);
}

#[test]
fn column_lookup_prefers_exact_then_ignores_case() {
    let dir = TempDir::new().unwrap();
    let path = temp_file(&dir, "mixed.csv", "Name,name,City\nA,b,c\n");
    let table = read_table(&path).unwrap();
    assert_eq!(table.column_index("name").unwrap(), 1);
    assert_eq!(table.column_index("Name").unwrap(), 0);
    assert_eq!(table.column_index("CITY").unwrap(), 2);
    assert_eq!(table.column_name("city").unwrap(), "City");
}

#[test]
fn unknown_column_lists_available_columns() {
    let dir = TempDir::new().unwrap();
    let path = temp_file(&dir, "a.csv", "id,name\n1,x\n");
    let err = read_column(&path, "email").unwrap_err();
    match &err {
        IngestError::ColumnNotFound {
            column, available, ..
        } => {
            assert_eq!(column, "email");
            assert_eq!(available, &vec!["id".to_string(), "name".to_string()]);
        }
        other => panic!("unexpected error {other:?}"),
    }
    assert!(err.to_string().contains("available columns: id, name"));
}

#[test]
fn blank_cells_are_kept_as_empty_values() {
    let dir = TempDir::new().unwrap();
    let path = temp_file(&dir, "gaps.csv", "id,name\n1,\n2,Bob\n");
    assert_eq!(read_column(&path, "name").unwrap(), vec!["", "Bob"]);
}

#[test]
fn blank_files_are_rejected() {
    let dir = TempDir::new().unwrap();
    let empty = temp_file(&dir, "empty.csv", "\n\n");
    assert!(matches!(read_table(&empty), Err(IngestError::EmptyFile { .. })));
}

#[test]
fn missing_file_and_bad_extension_are_reported() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nope.csv");
    assert!(matches!(read_table(&missing), Err(IngestError::FileNotFound { .. })));

    let sheet = temp_file(&dir, "data.xlsx", "binary");
    assert!(matches!(
        read_table(&sheet),
        Err(IngestError::UnsupportedFormat { .. })
    ));
}

#[test]
fn size_limit_is_enforced() {
    let dir = TempDir::new().unwrap();
    let path = temp_file(&dir, "big.csv", "a\n1234567890\n");
    assert!(check_file_size(&path, 1024).is_ok());
    assert!(matches!(
        check_file_size(&path, 4),
        Err(IngestError::FileTooLarge { max_size: 4, .. })
    ));
}
