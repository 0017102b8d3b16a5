use std::fs;

use super::*;
use tempfile::TempDir;

#[test]
fn empty_content_has_zero_lines() {
    assert_eq!(count_lines(b""), 0);
}

#[test]
fn single_newline_is_one_line() {
    assert_eq!(count_lines(b"\n"), 1);
}

#[test]
fn trailing_newline_counts_newlines_exactly() {
    assert_eq!(count_lines(b"a\nb\nc\n"), 3);
}

#[test]
fn missing_trailing_newline_adds_one_line() {
    assert_eq!(count_lines(b"a\nb\nc"), 3);
    assert_eq!(count_lines(b"no newline at all"), 1);
}

#[test]
fn blank_lines_are_counted() {
    assert_eq!(count_lines(b"\n\n\n"), 3);
    assert_eq!(count_lines(b"\n\nx"), 3);
}

#[test]
fn crlf_endings_count_by_lf_byte() {
    assert_eq!(count_lines(b"a\r\nb\r\n"), 2);
    assert_eq!(count_lines(b"a\r\nb"), 2);
}

#[test]
fn lone_carriage_returns_are_not_terminators() {
    assert_eq!(count_lines(b"a\rb\rc"), 1);
}

#[test]
fn invalid_utf8_is_counted_bytewise() {
    assert_eq!(count_lines(&[0xff, 0xfe, b'\n', 0x80]), 2);
}

#[test]
fn large_content_matches_naive_count() {
    let content = "line\n".repeat(10_000) + "tail";
    assert_eq!(count_lines(content.as_bytes()), 10_001);
}

#[test]
fn count_file_reads_from_disk() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("a.ts");
    fs::write(&path, "const a = 1;\nconst b = 2;\n").unwrap();

    let counter = LineCounter::new();
    assert_eq!(counter.count_file(&path).unwrap(), 2);
}

#[test]
fn count_file_empty_file_is_zero() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("empty.ts");
    fs::write(&path, "").unwrap();

    assert_eq!(LineCounter::new().count_file(&path).unwrap(), 0);
}

#[test]
fn count_file_missing_file_is_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("gone.ts");

    let err = LineCounter::new().count_file(&path).unwrap_err();
    assert_eq!(err.kind(), std::io::ErrorKind::NotFound);
}

#[test]
fn count_file_directory_is_error() {
    let temp_dir = TempDir::new().unwrap();
    assert!(LineCounter::new().count_file(temp_dir.path()).is_err());
}
