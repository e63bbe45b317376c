//! Candidate file collection and scanning

use anyhow::{Context, Result};
use indicatif::{ParallelProgressIterator, ProgressBar};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

use crate::core::null_bytes::{inspect_file, FileInspection};

/// Directory names never descended into, at any depth
pub const EXCLUDED_DIRS: &[&str] = &["node_modules", ".next", ".git"];

/// File name suffixes that make a file eligible for inspection
pub const CANDIDATE_EXTENSIONS: &[&str] = &[".tsx", ".ts", ".js", ".json", ".prisma", ".css"];

/// Result of scanning a single candidate file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanResult {
    pub path: PathBuf,
    pub inspection: FileInspection,
}

pub fn is_excluded_dir(name: &str) -> bool {
    EXCLUDED_DIRS.contains(&name)
}

/// Case-sensitive suffix match against [`CANDIDATE_EXTENSIONS`]
pub fn is_candidate_file(name: &str) -> bool {
    CANDIDATE_EXTENSIONS.iter().any(|ext| name.ends_with(ext))
}

fn is_pruned(entry: &DirEntry) -> bool {
    entry.depth() > 0
        && entry.file_type().is_dir()
        && is_excluded_dir(&entry.file_name().to_string_lossy())
}

fn is_candidate_entry(entry: &DirEntry) -> bool {
    if entry.file_type().is_dir() {
        return false;
    }
    // Links to directories are listed as directories by a plain walk.
    if entry.path_is_symlink() && entry.path().is_dir() {
        return false;
    }
    is_candidate_file(&entry.file_name().to_string_lossy())
}

/// Collect all candidate files under a directory
///
/// Excluded directories are pruned before descent, so nothing below them is
/// visited. An unreadable root is an error; anything unreadable below it is
/// logged and skipped.
///
/// # Arguments
/// * `dir` - Root directory to walk
///
/// # Returns
/// Candidate file paths in walk order
pub fn collect_candidate_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    let walker = WalkDir::new(dir)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| {
            let pruned = is_pruned(e);
            if pruned {
                tracing::debug!("Skipping {}", e.path().display());
            }
            !pruned
        });

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) if err.depth() == 0 => {
                return Err(err).with_context(|| format!("Failed to walk {}", dir.display()));
            }
            Err(err) => {
                tracing::warn!("Skipping unreadable entry: {}", err);
                continue;
            }
        };
        if is_candidate_entry(&entry) {
            files.push(entry.into_path());
        }
    }

    Ok(files)
}

/// Inspect files on the rayon pool, keeping input order
///
/// A file that cannot be read yields a [`FileInspection::ReadError`] result
/// and does not affect the others.
pub fn inspect_files_with_progress(paths: &[PathBuf], progress: ProgressBar) -> Vec<ScanResult> {
    paths
        .par_iter()
        .progress_with(progress)
        .map(|path| ScanResult {
            path: path.clone(),
            inspection: inspect_file(path),
        })
        .collect()
}

pub fn inspect_files(paths: &[PathBuf]) -> Vec<ScanResult> {
    inspect_files_with_progress(paths, ProgressBar::hidden())
}

/// Walk `dir` and inspect every candidate file
pub fn scan_directory(dir: &Path) -> Result<Vec<ScanResult>> {
    let files = collect_candidate_files(dir)?;
    tracing::debug!("Found {} candidate file(s) under {}", files.len(), dir.display());
    Ok(inspect_files(&files))
}
