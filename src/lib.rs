//! ICARTT Reader Library
//!
//! Reads ICARTT aircraft-campaign data files into Polars DataFrames and
//! merges the files of one instrument into a single time-ordered table.
//!
//! This library provides tools for:
//! - Locating the data table from the header line count on the first line
//! - Deriving the acquisition date from the `20YYMMDD` token in the file path
//! - Converting "Time" columns (seconds since midnight) to timestamps
//! - Normalizing column names and nulling the -9999 missing-value sentinel
//! - Discovering, stacking and filtering all files of one instrument
//!
//! ```no_run
//! use ict_reader::{read_file, read_instrument};
//!
//! let flight = read_file("./inputs/ict/AMS_20210615_R0.ict")?;
//! let campaign = read_instrument("AMS", Some(&["Org", "SO4"]), "./inputs/ict/")?;
//! # Ok::<(), ict_reader::IctError>(())
//! ```

pub mod config;
pub mod constants;
pub mod date;
pub mod error;
pub mod header;
pub mod models;
pub mod processor;
pub mod reader;
pub mod schema;

#[cfg(test)]
pub(crate) mod test_support;

pub use config::IctConfig;
pub use error::{ErrorKind, IctError, Result};
pub use models::IctHeader;
pub use processor::{InstrumentReader, read_instrument};
pub use reader::{IctReader, read_file};
