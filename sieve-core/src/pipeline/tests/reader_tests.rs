use crate::pipeline::errors::{ReadError, TokenError};
use crate::pipeline::reader::{FileReader, NumberReader, SkippedToken, read_numbers};
use pretty_assertions::assert_eq;
use std::fs;
use std::io::Cursor;
use std::path::Path;
use tempfile::tempdir;

fn read_str(input: &str) -> crate::pipeline::NumberBatch {
    read_numbers(Cursor::new(input.as_bytes()), Path::new("inline")).unwrap()
}

#[test]
fn reads_numbers_in_file_order() {
    // Arrange
    let input = "1 2 3\n4\n\n  5   6\n";

    // Act
    let batch = read_str(input);

    // Assert
    assert_eq!(batch.numbers, vec![1, 2, 3, 4, 5, 6]);
    assert!(batch.skipped.is_empty());
}

#[test]
fn skips_invalid_tokens_with_position() {
    let batch = read_str("2 3 x 4\n5 -2\n");

    assert_eq!(batch.numbers, vec![2, 3, 4, 5, -2]);
    assert_eq!(
        batch.skipped,
        vec![SkippedToken {
            token: "x".to_string(),
            line: 1,
            reason: TokenError::Invalid,
        }]
    );
}

#[test]
fn out_of_range_tokens_are_distinguished() {
    let batch = read_str("2147483647 2147483648 -2147483648 -2147483649");

    assert_eq!(batch.numbers, vec![i32::MAX, i32::MIN]);
    let reasons: Vec<TokenError> = batch.skipped.iter().map(|s| s.reason).collect();
    assert_eq!(reasons, vec![TokenError::OutOfRange, TokenError::OutOfRange]);
}

#[test]
fn partially_numeric_tokens_are_invalid() {
    let batch = read_str("12abc +7 3.5");

    assert_eq!(batch.numbers, vec![7]);
    assert_eq!(batch.skipped.len(), 2);
    assert!(batch.skipped.iter().all(|s| s.reason == TokenError::Invalid));
}

#[test]
fn handles_missing_trailing_newline_and_crlf() {
    let batch = read_str("1 2\r\n3");

    assert_eq!(batch.numbers, vec![1, 2, 3]);
}

#[test]
fn non_utf8_bytes_only_spoil_their_token() {
    let input: &[u8] = b"1 \xff\xfe 2\n";

    let batch = read_numbers(Cursor::new(input), Path::new("inline")).unwrap();

    assert_eq!(batch.numbers, vec![1, 2]);
    assert_eq!(batch.skipped.len(), 1);
}

#[test]
fn file_reader_reads_from_disk() {
    // Arrange
    let dir = tempdir().unwrap();
    let path = dir.path().join("numbers.txt");
    fs::write(&path, "10 -3\n7\n").unwrap();

    // Act
    let batch = FileReader.read(&path).unwrap();

    // Assert
    assert_eq!(batch.numbers, vec![10, -3, 7]);
}

#[test]
fn file_reader_fails_on_missing_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("missing.txt");

    let err = FileReader.read(&path).unwrap_err();

    match err {
        ReadError::Open { path: p, .. } => assert_eq!(p, path),
        other => panic!("Expected Open error, got {:?}", other),
    }
}
