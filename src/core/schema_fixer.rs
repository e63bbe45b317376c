//! Removal of the marked duplicate `model Expense` block from a Prisma schema

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

const MARKER_COMMENT: &str = "// Expense Tracking";
const BLOCK_OPEN: &str = "model Expense {";
const BLOCK_CLOSE: &str = "}";

/// Errors raised while de-duplicating a schema
#[derive(Error, Debug)]
pub enum SchemaError {
    /// A marked block was opened but no closing brace followed before end of input
    #[error("marked `model Expense` block opened at line {line} is never closed")]
    UnterminatedBlock { line: usize },

    #[error("failed to read schema {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write schema {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Line-by-line removal state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockState {
    Outside,
    InsideBlock { opened_at: usize },
}

/// Result of a de-duplication pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dedup {
    pub text: String,
    pub blocks_removed: usize,
    pub lines_removed: usize,
}

impl Dedup {
    pub fn changed(&self) -> bool {
        self.blocks_removed > 0
    }
}

/// Remove every marker-preceded `model Expense { ... }` block
///
/// Lines keep their original terminators, so retained content is
/// byte-for-byte identical. Comparison is on trimmed text.
pub fn remove_marked_blocks(text: &str) -> Result<Dedup, SchemaError> {
    let mut kept: Vec<&str> = Vec::new();
    let mut state = BlockState::Outside;
    let mut previous: Option<&str> = None;
    let mut blocks_removed = 0;
    let mut lines_removed = 0;

    for (idx, line) in text.split_inclusive('\n').enumerate() {
        let trimmed = line.trim();

        state = match state {
            BlockState::Outside => {
                let marked = trimmed == BLOCK_OPEN
                    && previous.map(str::trim) == Some(MARKER_COMMENT);
                if marked {
                    // The marker was retained before the block was confirmed.
                    kept.pop();
                    lines_removed += 2;
                    BlockState::InsideBlock { opened_at: idx + 1 }
                } else {
                    kept.push(line);
                    BlockState::Outside
                }
            }
            BlockState::InsideBlock { opened_at } => {
                lines_removed += 1;
                if trimmed == BLOCK_CLOSE {
                    blocks_removed += 1;
                    BlockState::Outside
                } else {
                    BlockState::InsideBlock { opened_at }
                }
            }
        };

        previous = Some(line);
    }

    if let BlockState::InsideBlock { opened_at } = state {
        return Err(SchemaError::UnterminatedBlock { line: opened_at });
    }

    Ok(Dedup {
        text: kept.concat(),
        blocks_removed,
        lines_removed,
    })
}

/// Rewrite a schema file in place with the marked block removed
///
/// The file is only written after the full read and transform succeed.
/// No backup is made.
///
/// # Arguments
/// * `path` - Path to the schema file
pub fn fix_schema_file(path: &Path) -> Result<Dedup, SchemaError> {
    let original = fs::read_to_string(path).map_err(|source| SchemaError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let dedup = remove_marked_blocks(&original)?;
    tracing::info!(
        "Removed {} block(s), {} line(s) from {}",
        dedup.blocks_removed,
        dedup.lines_removed,
        path.display()
    );

    fs::write(path, &dedup.text).map_err(|source| SchemaError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(dedup)
}
