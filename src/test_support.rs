//! Helpers shared by unit tests.

use crate::date::{ScanState, scan_date_token};
use chrono::NaiveDate;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Temp directory whose own path cannot end the date scan.
///
/// The acquisition date is read from the whole path, so a random temp
/// directory name containing '2' then '0' would hide the file's date token.
pub(crate) fn scratch_dir() -> TempDir {
    for _ in 0..64 {
        let dir = TempDir::new().unwrap();
        if scan_date_token(&dir.path().to_string_lossy()).state != ScanState::Done {
            return dir;
        }
    }
    panic!("temp directory path always contains a '2' followed by a '0'");
}

/// Write an ICARTT file with a short preamble and return its path
pub(crate) fn write_ict(dir: &Path, name: &str, columns: &str, rows: &[&str]) -> PathBuf {
    let preamble = [
        "Doe, Jane",
        "Example Atmospheric Institute",
        "Aerosol Mass Spectrometer",
        "EXAMPLE-CAMPAIGN",
    ];
    let header_lines = preamble.len() + 2;

    let mut contents = format!("{}, 1001\n", header_lines);
    for line in preamble {
        contents.push_str(line);
        contents.push('\n');
    }
    contents.push_str(columns);
    contents.push('\n');
    for row in rows {
        contents.push_str(row);
        contents.push('\n');
    }

    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    path
}

/// Nanoseconds since the epoch of `seconds` after midnight on the given day
pub(crate) fn timestamp_nanos(year: i32, month: u32, day: u32, seconds: f64) -> i64 {
    let midnight = NaiveDate::from_ymd_opt(year, month, day)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
        .and_utc()
        .timestamp_nanos_opt()
        .unwrap();
    midnight + (seconds * 1e9).round() as i64
}
