//! Application constants for the ICARTT reader
//!
//! Format conventions and default values used throughout the crate.

// =============================================================================
// ICARTT Format Conventions
// =============================================================================

/// Numeric code used by ICARTT files for missing observations
pub const MISSING_VALUE_SENTINEL: i64 = -9999;

/// Column-name substring marking "seconds since midnight" columns
pub const TIME_COLUMN_MARKER: &str = "Time";

/// Field delimiter of the header preamble and the data table
pub const FIELD_DELIMITER: char = ',';

// =============================================================================
// Acquisition Date Token
// =============================================================================

/// Length of the `20YYMMDD` date token embedded in file paths
pub const DATE_TOKEN_LEN: usize = 8;

/// Character that arms the date scan
pub const DATE_SCAN_TRIGGER: char = '2';

/// Character that ends the date scan once armed
pub const DATE_SCAN_TERMINATOR: char = '0';

// =============================================================================
// Discovery Defaults
// =============================================================================

/// Directory searched for instrument files when none is given
pub const DEFAULT_INPUT_DIRECTORY: &str = "./inputs/ict/";

pub const NANOS_PER_SECOND: i64 = 1_000_000_000;
