//! Content inspection and text rewriting

pub mod null_bytes;
pub mod schema_fixer;

pub use null_bytes::{contains_null_byte, inspect_file, FileInspection};
pub use schema_fixer::{fix_schema_file, remove_marked_blocks, BlockState, Dedup, SchemaError};
