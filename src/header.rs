//! ICARTT header preamble parsing.
//!
//! The first line of an ICARTT file starts with the number of header lines,
//! counting the first line itself and the column-label row. The data table
//! therefore starts `header_lines - 1` lines into the file.

use crate::constants::FIELD_DELIMITER;
use crate::error::{IctError, Result};
use crate::models::IctHeader;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::debug;

/// Extract the header line count and data boundaries from an ICARTT file
pub fn parse_ict_header(file_path: &Path) -> Result<IctHeader> {
    let file = File::open(file_path).map_err(|e| IctError::io(file_path, e))?;
    let mut lines = BufReader::new(file).lines();

    let first_line = match lines.next() {
        Some(line) => line.map_err(|e| IctError::io(file_path, e))?,
        None => return Err(IctError::invalid_header(file_path, "file is empty")),
    };

    let header_lines = parse_header_line_count(&first_line)
        .map_err(|reason| IctError::invalid_header(file_path, reason))?;
    let format_index = parse_format_index(&first_line);

    let mut total_lines = 1;
    for line in lines {
        line.map_err(|e| IctError::io(file_path, e))?;
        total_lines += 1;
    }

    let skip_rows = header_lines - 1;
    if total_lines <= skip_rows {
        return Err(IctError::invalid_header(
            file_path,
            format!(
                "header declares {} lines but file has only {}",
                header_lines, total_lines
            ),
        ));
    }

    let header = IctHeader {
        header_lines,
        skip_rows,
        format_index,
        total_lines,
    };

    debug!(
        "Parsed header for {}: skip_rows={}, data_rows={}, format_index={:?}",
        file_path.display(),
        header.skip_rows,
        header.data_rows(),
        header.format_index
    );

    Ok(header)
}

/// Parse the leading field of the first line as the header line count
fn parse_header_line_count(first_line: &str) -> std::result::Result<usize, String> {
    let field = leading_field(first_line, 0).unwrap_or_default();

    let count = field
        .parse::<i64>()
        .map_err(|_| format!("header line count '{}' is not an integer", field))?;

    if count < 1 {
        return Err(format!("header line count must be at least 1, found {}", count));
    }

    usize::try_from(count).map_err(|_| format!("header line count {} is too large", count))
}

/// Parse the second field of the first line as the file format index
fn parse_format_index(first_line: &str) -> Option<u32> {
    leading_field(first_line, 1)?.parse().ok()
}

fn leading_field(line: &str, index: usize) -> Option<&str> {
    line.trim_end_matches(['\r', '\n'])
        .split(FIELD_DELIMITER)
        .nth(index)
        .map(str::trim)
}
