//! Report writing functionality

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::core::null_bytes::FileInspection;
use crate::scanner::file_scanner::ScanResult;

/// Terminal line for a scan result, `None` for clean files
pub fn format_result_line(result: &ScanResult) -> Option<String> {
    match &result.inspection {
        FileInspection::Clean => None,
        FileInspection::NullByte => Some(format!("NULL BYTE FOUND: {}", result.path.display())),
        FileInspection::ReadError(e) => {
            Some(format!("Error reading {}: {}", result.path.display(), e))
        }
    }
}

/// Print one line per match or read error to `out`, in result order
pub fn print_results<W: Write>(out: &mut W, results: &[ScanResult]) -> Result<()> {
    for line in results.iter().filter_map(format_result_line) {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}

/// Write scan results to a plain-text report file
///
/// # Arguments
/// * `output_path` - Path to output file
/// * `results` - Scan results to write
pub fn write_report(output_path: &Path, results: &[ScanResult]) -> Result<()> {
    let file = File::create(output_path)
        .with_context(|| format!("Failed to create report {}", output_path.display()))?;
    let mut file = BufWriter::new(file);

    let now = std::time::SystemTime::now();
    writeln!(file, "Null Byte Scan Report")?;
    writeln!(file, "=====================")?;
    writeln!(file, "Generated: {:?}", now)?;
    writeln!(file)?;

    let null_count = results.iter().filter(|r| r.inspection.has_null_byte()).count();
    let error_count = results.iter().filter(|r| r.inspection.is_read_error()).count();

    writeln!(file, "Summary Statistics:")?;
    writeln!(file, "-------------------")?;
    writeln!(file, "  Files inspected: {}", results.len())?;
    writeln!(file, "  Files with null bytes: {}", null_count)?;
    writeln!(file, "  Read errors: {}", error_count)?;
    writeln!(file)?;

    if null_count > 0 {
        writeln!(file, "Files With Null Bytes:")?;
        writeln!(file, "----------------------")?;
        for result in results.iter().filter(|r| r.inspection.has_null_byte()) {
            writeln!(file, "  {}", result.path.display())?;
        }
        writeln!(file)?;
    }

    if error_count > 0 {
        writeln!(file, "Read Errors:")?;
        writeln!(file, "------------")?;
        for result in results {
            if let FileInspection::ReadError(e) = &result.inspection {
                writeln!(file, "  {}: {}", result.path.display(), e)?;
            }
        }
        writeln!(file)?;
    }

    file.flush()?;
    Ok(())
}

/// Write scan results as pretty-printed JSON
pub fn write_json_report(output_path: &Path, results: &[ScanResult]) -> Result<()> {
    let file = File::create(output_path)
        .with_context(|| format!("Failed to create report {}", output_path.display()))?;
    serde_json::to_writer_pretty(BufWriter::new(file), results)
        .context("Failed to write JSON report")?;
    Ok(())
}
