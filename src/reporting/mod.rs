//! Terminal and file reporting

pub mod report_writer;

pub use report_writer::{format_result_line, print_results, write_json_report, write_report};
