//! Configuration for reading ICARTT files.
//!
//! Holds the format conventions the reader applies (time-column marker,
//! missing-value sentinel) and the directory the instrument reader searches.

use crate::constants::{DEFAULT_INPUT_DIRECTORY, MISSING_VALUE_SENTINEL, TIME_COLUMN_MARKER};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Global configuration for ICARTT processing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IctConfig {
    /// Columns whose name contains this substring hold seconds since midnight
    pub time_column_marker: String,

    /// Numeric value replaced by null on load (exact match only)
    pub missing_value: i64,

    /// Directory searched by the instrument reader
    pub input_directory: PathBuf,
}

impl Default for IctConfig {
    fn default() -> Self {
        Self {
            time_column_marker: TIME_COLUMN_MARKER.to_string(),
            missing_value: MISSING_VALUE_SENTINEL,
            input_directory: PathBuf::from(DEFAULT_INPUT_DIRECTORY),
        }
    }
}

impl IctConfig {
    /// Use a different time-column marker
    pub fn with_time_column_marker(mut self, marker: impl Into<String>) -> Self {
        self.time_column_marker = marker.into();
        self
    }

    /// Use a different missing-value sentinel
    pub fn with_missing_value(mut self, missing_value: i64) -> Self {
        self.missing_value = missing_value;
        self
    }

    /// Search a different directory for instrument files
    pub fn with_input_directory(mut self, directory: impl Into<PathBuf>) -> Self {
        self.input_directory = directory.into();
        self
    }

    pub(crate) fn is_time_column(&self, name: &str) -> bool {
        name.contains(self.time_column_marker.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_follow_icartt_conventions() {
        let config = IctConfig::default();
        assert_eq!(config.time_column_marker, "Time");
        assert_eq!(config.missing_value, -9999);
        assert_eq!(config.input_directory, PathBuf::from("./inputs/ict/"));
    }

    #[test]
    fn test_builder_methods() {
        let config = IctConfig::default()
            .with_time_column_marker("UTC")
            .with_missing_value(-8888)
            .with_input_directory("/campaign/ict");

        assert_eq!(config.time_column_marker, "UTC");
        assert_eq!(config.missing_value, -8888);
        assert_eq!(config.input_directory, PathBuf::from("/campaign/ict"));
    }

    #[test]
    fn test_time_column_match_is_case_sensitive_substring() {
        let config = IctConfig::default();
        assert!(config.is_time_column("Time_Start"));
        assert!(config.is_time_column("UTC_Time_Mid"));
        assert!(!config.is_time_column("time_start"));
        assert!(!config.is_time_column("NO2"));
    }
}
