use std::path::{Path, PathBuf};

use qsv_preamble::source::Source;
use qsv_preamble::{Bom, DataStart, MemorySource, PreambleError, Preprocessor};

fn data_path(name: &str) -> PathBuf {
    Path::new(file!()).parent().unwrap().join("data").join(name)
}

#[test]
fn test_bom_and_preamble() {
    let start = Preprocessor::new()
        .skip(2)
        .comment("#")
        .locate_path(data_path("bom-preamble.csv"))
        .unwrap();
    assert_eq!(
        start,
        DataStart {
            offset: 80,
            bom: Some(Bom::Utf8),
            skipped_rows: 4,
            remaining_bytes: 100,
            remaining_lines: 5,
            is_utf8: true,
        }
    );

    let source = MemorySource::from_path(data_path("bom-preamble.csv")).unwrap();
    assert!(start.data(source.bytes()).starts_with(b"branch,quarter,visitors\r\n"));
}

#[test]
fn test_csv_reader_sees_remaining_records() {
    let mut reader = Preprocessor::new()
        .skip(2)
        .comment("#")
        .open_path(data_path("bom-preamble.csv"))
        .unwrap();
    assert_eq!(reader.headers().unwrap(), vec!["branch", "quarter", "visitors"]);
    let branches = reader
        .records()
        .map(|record| record.unwrap()[0].to_string())
        .collect::<Vec<_>>();
    assert_eq!(branches, vec!["Central", "Eastside", "Westside"]);
}

#[test]
fn test_quoted_preamble() {
    let source = MemorySource::from_path(data_path("quoted-preamble.csv")).unwrap();
    let start = Preprocessor::new().skip(2).locate_source(&source);
    assert_eq!(start.bom, None);
    assert_eq!(start.skipped_rows, 4);
    assert_eq!(start.data(source.bytes()), b"id,name\n1,\"Ann\"\n2,\"Bob\"\n");

    let mut reader = Preprocessor::new().skip(2).open_reader(source.bytes());
    assert_eq!(reader.headers().unwrap(), vec!["id", "name"]);
    let names = reader
        .records()
        .map(|record| record.unwrap()[1].to_string())
        .collect::<Vec<_>>();
    assert_eq!(names, vec!["Ann", "Bob"]);
}

#[test]
fn test_keep_blank_rows() {
    let source = MemorySource::from_path(data_path("quoted-preamble.csv")).unwrap();
    let start = Preprocessor::new()
        .skip(2)
        .skip_empty_rows(false)
        .locate_source(&source);
    assert_eq!(start.skipped_rows, 2);
    assert!(start.data(source.bytes()).starts_with(b"\n\nid,name\n"));
}

#[test]
fn test_no_header_row() {
    let data = b"skip me\n1,2\n3,4\n";
    let mut reader = Preprocessor::new()
        .skip(1)
        .has_header_row(false)
        .open_reader(data);
    assert_eq!(reader.records().count(), 2);
}

#[test]
fn test_utf16_bom_data_is_not_utf8() {
    let data = b"\xFF\xFEa\x00\n\x00\xFF";
    let start = Preprocessor::new().locate(data);
    assert_eq!(start.bom, Some(Bom::Utf16Le));
    assert_eq!(start.offset, 2);
    assert!(!start.is_utf8);
}

#[test]
fn test_empty_input() {
    let start = Preprocessor::new().skip(3).comment("#").locate(b"");
    assert_eq!(start.offset, 0);
    assert_eq!(start.bom, None);
    assert_eq!(start.skipped_rows, 0);
    assert_eq!(start.remaining_lines, 0);
}

#[test]
fn test_missing_file() {
    match Preprocessor::new().locate_path(data_path("missing.csv")) {
        Err(PreambleError::Io(_)) => {}
        other => panic!("expected an I/O error, got {:?}", other),
    }
}
