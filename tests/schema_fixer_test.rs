//! Integration tests for the schema de-duplicator

use repo_janitor_rs::prelude::*;
use std::fs;
use tempfile::TempDir;

const SCHEMA: &str = r#"generator client {
  provider = "prisma-client-js"
}

// Expense Tracking
model Expense {
  id        String   @id @default(cuid())
  amount    Float
  createdAt DateTime @default(now())
}

model Student {
  id   String @id
  name String
}

// Finance
model Expense {
  id     String @id
  amount Float
}
"#;

const FIXED: &str = r#"generator client {
  provider = "prisma-client-js"
}


model Student {
  id   String @id
  name String
}

// Finance
model Expense {
  id     String @id
  amount Float
}
"#;

#[test]
fn test_fix_schema_file_rewrites_in_place() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("schema.prisma");
    fs::write(&path, SCHEMA).unwrap();

    let dedup = fix_schema_file(&path).unwrap();
    assert_eq!(dedup.blocks_removed, 1);
    assert_eq!(dedup.lines_removed, 6);
    assert_eq!(fs::read_to_string(&path).unwrap(), FIXED);
}

#[test]
fn test_three_line_marked_block_removed_exactly() {
    let input = "a\nb\n// Expense Tracking\nmodel Expense {\n}\nc\n";
    let dedup = remove_marked_blocks(input).unwrap();
    assert_eq!(dedup.text, "a\nb\nc\n");
}

#[test]
fn test_unmarked_block_leaves_file_identical() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("schema.prisma");
    fs::write(&path, FIXED).unwrap();

    let dedup = fix_schema_file(&path).unwrap();
    assert!(!dedup.changed());
    assert_eq!(fs::read_to_string(&path).unwrap(), FIXED);
}

#[test]
fn test_second_run_is_noop() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("schema.prisma");
    fs::write(&path, SCHEMA).unwrap();

    fix_schema_file(&path).unwrap();
    let after_first = fs::read(&path).unwrap();
    let second = fix_schema_file(&path).unwrap();

    assert!(!second.changed());
    assert_eq!(fs::read(&path).unwrap(), after_first);
}

#[test]
fn test_unterminated_block_leaves_file_untouched() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("schema.prisma");
    let content = "model A {\n}\n// Expense Tracking\nmodel Expense {\n  id String\n";
    fs::write(&path, content).unwrap();

    let err = fix_schema_file(&path).unwrap_err();
    assert!(matches!(err, SchemaError::UnterminatedBlock { line: 4 }));
    assert_eq!(fs::read_to_string(&path).unwrap(), content);
}

#[test]
fn test_missing_file_is_read_error() {
    let temp_dir = TempDir::new().unwrap();
    let err = fix_schema_file(&temp_dir.path().join("absent.prisma")).unwrap_err();
    assert!(matches!(err, SchemaError::Read { .. }));
}

#[test]
fn test_non_utf8_file_is_read_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("schema.prisma");
    fs::write(&path, b"model A {\xff\xfe}\n").unwrap();

    let err = fix_schema_file(&path).unwrap_err();
    assert!(matches!(err, SchemaError::Read { .. }));
    assert_eq!(fs::read(&path).unwrap(), b"model A {\xff\xfe}\n");
}
