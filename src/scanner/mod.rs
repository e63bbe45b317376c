//! File scanning and collection functionality

pub mod file_scanner;

pub use file_scanner::{
    collect_candidate_files, inspect_files, inspect_files_with_progress, is_candidate_file,
    is_excluded_dir, scan_directory, ScanResult, CANDIDATE_EXTENSIONS, EXCLUDED_DIRS,
};
