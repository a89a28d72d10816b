//! Acquisition date extraction from file paths.
//!
//! ICARTT file names embed the flight date as `20YYMMDD`. The token is found
//! by scanning the whole path for a '2' followed, at some later point, by a
//! '0'. The scan stops on that '0' and backs up one character, so the token
//! is expected to start immediately before the terminating '0'.
//!
//! A path containing an unrelated "2...0" sequence ahead of the real date
//! token (for example a directory named `run2_v0`) ends the scan early and
//! the date misparses. Callers must keep such sequences out of their paths.

use crate::constants::{DATE_SCAN_TERMINATOR, DATE_SCAN_TRIGGER, DATE_TOKEN_LEN};
use crate::error::{IctError, Result};
use chrono::NaiveDate;
use std::path::Path;

/// State of the date token scan
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanState {
    /// No '2' seen yet
    Searching,
    /// A '2' has been seen; the next '0' ends the scan
    FoundTwo,
    /// Terminating '0' reached
    Done,
}

/// Result of scanning a path for the date token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateScan {
    /// Character index where the date token is expected to start
    pub offset: usize,
    pub state: ScanState,
}

/// Scan `path` for the start of its date token.
///
/// When the scan never reaches [`ScanState::Done`] the offset equals the
/// number of characters in the path, which is out of range for any token.
pub fn scan_date_token(path: &str) -> DateScan {
    let mut state = ScanState::Searching;
    let mut offset = 0usize;

    for c in path.chars() {
        if c == DATE_SCAN_TRIGGER {
            state = ScanState::FoundTwo;
        } else if state == ScanState::FoundTwo && c == DATE_SCAN_TERMINATOR {
            // offset is the index of this '0'; the token starts one before it
            offset = offset.saturating_sub(1);
            state = ScanState::Done;
            break;
        }
        offset += 1;
    }

    DateScan { offset, state }
}

/// Derive the acquisition date embedded in `path`
pub fn acquisition_date(path: &Path) -> Result<NaiveDate> {
    let path_str = path.to_string_lossy();
    let scan = scan_date_token(&path_str);

    let token: String = path_str
        .chars()
        .skip(scan.offset)
        .take(DATE_TOKEN_LEN)
        .collect();

    if token.chars().count() < DATE_TOKEN_LEN {
        return Err(IctError::acquisition_date(
            path,
            format!(
                "date token at character {} runs past the end of the path",
                scan.offset
            ),
        ));
    }

    if !token.chars().all(|c| c.is_ascii_digit()) {
        return Err(IctError::acquisition_date(
            path,
            format!("date token '{}' is not numeric", token),
        ));
    }

    // Token is 8 ASCII digits, so byte slicing is safe and parsing cannot fail
    let year: i32 = token[0..4].parse().unwrap_or_default();
    let month: u32 = token[4..6].parse().unwrap_or_default();
    let day: u32 = token[6..8].parse().unwrap_or_default();

    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
        IctError::acquisition_date(path, format!("date token '{}' is not a valid date", token))
    })
}
