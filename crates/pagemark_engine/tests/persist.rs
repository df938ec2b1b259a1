use std::fs;

use pagemark_engine::{ensure_output_dir, MarkdownWriter};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

#[test]
fn creates_missing_output_dir() {
    let temp = TempDir::new().unwrap();
    let new_dir = temp.path().join("out");
    assert!(!new_dir.exists());
    ensure_output_dir(&new_dir).unwrap();
    assert!(new_dir.is_dir());
}

#[test]
fn rejects_file_where_directory_expected() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("not-a-dir");
    fs::write(&file_path, "x").unwrap();
    assert!(ensure_output_dir(&file_path).is_err());
}

#[test]
fn written_content_round_trips_byte_for_byte() {
    let temp = TempDir::new().unwrap();
    let writer = MarkdownWriter::new(temp.path().to_path_buf());

    // No trailing newline: the writer must not add or remove one.
    let content = "# Title\n\nBody text without trailing newline";
    let path = writer.write("doc.md", content).unwrap();

    assert_eq!(fs::read_to_string(path).unwrap(), content);
}

#[test]
fn existing_file_is_silently_overwritten() {
    let temp = TempDir::new().unwrap();
    let writer = MarkdownWriter::new(temp.path().to_path_buf());

    writer.write("doc.md", "old content, much longer").unwrap();
    let path = writer.write("doc.md", "new").unwrap();

    assert_eq!(fs::read_to_string(path).unwrap(), "new");
}
