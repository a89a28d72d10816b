//! Core data structures for ICARTT processing.

use serde::{Deserialize, Serialize};

/// Metadata read from the first line of an ICARTT preamble
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IctHeader {
    /// Header line count as recorded in the file (includes the column row)
    pub header_lines: usize,
    /// Lines to skip before the column-header row
    pub skip_rows: usize,
    /// ICARTT file format index (e.g. 1001), when present
    pub format_index: Option<u32>,
    pub total_lines: usize,
}

impl IctHeader {
    /// Number of data rows following the column-header row
    pub fn data_rows(&self) -> usize {
        self.total_lines.saturating_sub(self.skip_rows + 1)
    }
}
