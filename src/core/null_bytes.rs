//! Null-byte detection

use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Outcome of inspecting a single candidate file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "error", rename_all = "snake_case")]
pub enum FileInspection {
    Clean,
    NullByte,
    ReadError(String),
}

impl FileInspection {
    pub fn has_null_byte(&self) -> bool {
        matches!(self, FileInspection::NullByte)
    }

    pub fn is_read_error(&self) -> bool {
        matches!(self, FileInspection::ReadError(_))
    }
}

/// Check whether a byte slice contains a zero byte anywhere
pub fn contains_null_byte(bytes: &[u8]) -> bool {
    bytes.contains(&0)
}

fn read_all(path: &Path) -> std::io::Result<Vec<u8>> {
    let mut file = File::open(path)?;
    let mut buffer = Vec::new();
    file.read_to_end(&mut buffer)?;
    Ok(buffer)
}

/// Inspect a file for null bytes
///
/// The whole file is read as raw bytes. Read failures are returned as
/// [`FileInspection::ReadError`] so a single bad file never aborts a scan.
///
/// # Arguments
/// * `path` - Path to the file
pub fn inspect_file(path: &Path) -> FileInspection {
    match read_all(path) {
        Ok(buffer) if contains_null_byte(&buffer) => FileInspection::NullByte,
        Ok(_) => FileInspection::Clean,
        Err(e) => {
            tracing::debug!("Failed to read {}: {}", path.display(), e);
            FileInspection::ReadError(e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    #[test]
    fn test_contains_null_byte() {
        assert!(contains_null_byte(b"\0"));
        assert!(contains_null_byte(b"abc\0def"));
        assert!(contains_null_byte(b"trailing\0"));
        assert!(!contains_null_byte(b"plain text"));
        assert!(!contains_null_byte(b""));
    }

    #[test]
    fn test_inspect_clean_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(b"export const x = 1;\n").unwrap();
        temp_file.flush().unwrap();

        assert_eq!(inspect_file(temp_file.path()), FileInspection::Clean);
    }

    #[test]
    fn test_inspect_file_with_null_byte() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(b"{\"a\": 1}\0\0").unwrap();
        temp_file.flush().unwrap();

        assert_eq!(inspect_file(temp_file.path()), FileInspection::NullByte);
    }

    #[test]
    fn test_inspect_empty_file() {
        let temp_file = NamedTempFile::new().unwrap();
        assert_eq!(inspect_file(temp_file.path()), FileInspection::Clean);
    }

    #[test]
    fn test_inspect_missing_file_is_read_error() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("gone.ts");

        let inspection = inspect_file(&missing);
        assert!(inspection.is_read_error());
        assert!(!inspection.has_null_byte());
    }

    #[test]
    fn test_inspect_directory_is_read_error() {
        let temp_dir = TempDir::new().unwrap();
        assert!(inspect_file(temp_dir.path()).is_read_error());
    }
}
