//! Repo Janitor Library
//!
//! Maintenance helpers for a web project checkout: a parallel null-byte scanner
//! and a one-shot de-duplicator for a marked Prisma model block.

pub mod core;
pub mod logging;
pub mod scanner;
pub mod reporting;

pub use crate::core::null_bytes;
pub use crate::core::schema_fixer;
pub use crate::scanner::file_scanner;
pub use crate::reporting::report_writer;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::core::null_bytes::{contains_null_byte, inspect_file, FileInspection};
    pub use crate::core::schema_fixer::{
        fix_schema_file, remove_marked_blocks, BlockState, Dedup, SchemaError,
    };
    pub use crate::scanner::file_scanner::{
        collect_candidate_files, inspect_files, is_candidate_file, is_excluded_dir,
        scan_directory, ScanResult,
    };
    pub use crate::reporting::report_writer::{
        format_result_line, print_results, write_json_report, write_report,
    };
}
