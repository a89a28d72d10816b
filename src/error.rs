//! Error handling for ICARTT reading operations.
//!
//! Every failure that concerns a file carries the offending path. Variants
//! group into three kinds (I/O, parse, schema) via [`IctError::kind`].

use polars::error::PolarsError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum IctError {
    #[error("IO error for {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Polars error: {0}")]
    Polars(#[from] PolarsError),

    #[error("Directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    #[error("No files matching pattern: {pattern}")]
    NoMatchingFiles { pattern: String },

    #[error("Invalid ICARTT header in file: {path} - {reason}")]
    InvalidHeader { path: PathBuf, reason: String },

    #[error("Failed to parse data table in file: {path} - {source}")]
    TableParsing {
        path: PathBuf,
        #[source]
        source: PolarsError,
    },

    #[error("No acquisition date in path: {path} - {reason}")]
    AcquisitionDate { path: PathBuf, reason: String },

    #[error("Time column '{column}' in file {path} is not numeric")]
    NonNumericTimeColumn { path: PathBuf, column: String },

    #[error("Subset columns not found in combined table: {}", columns.join(", "))]
    MissingColumns { columns: Vec<String> },
}

/// Coarse error taxonomy exposed to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Io,
    Parse,
    Schema,
}

impl IctError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            IctError::Io { .. }
            | IctError::DirectoryNotFound { .. }
            | IctError::NoMatchingFiles { .. } => ErrorKind::Io,
            IctError::Polars(PolarsError::IO { .. }) => ErrorKind::Io,
            IctError::Polars(PolarsError::ColumnNotFound(_)) | IctError::MissingColumns { .. } => {
                ErrorKind::Schema
            }
            IctError::Polars(_)
            | IctError::InvalidHeader { .. }
            | IctError::TableParsing { .. }
            | IctError::AcquisitionDate { .. }
            | IctError::NonNumericTimeColumn { .. } => ErrorKind::Parse,
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        IctError::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn invalid_header(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        IctError::InvalidHeader {
            path: path.into(),
            reason: reason.into(),
        }
    }

    pub(crate) fn acquisition_date(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        IctError::AcquisitionDate {
            path: path.into(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, IctError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds() {
        let io = IctError::io(
            "missing.ict",
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        );
        assert_eq!(io.kind(), ErrorKind::Io);

        let header = IctError::invalid_header("a.ict", "not an integer");
        assert_eq!(header.kind(), ErrorKind::Parse);

        let schema = IctError::MissingColumns {
            columns: vec!["NO2".to_string(), "O3".to_string()],
        };
        assert_eq!(schema.kind(), ErrorKind::Schema);
        assert_eq!(
            schema.to_string(),
            "Subset columns not found in combined table: NO2, O3"
        );
    }

    #[test]
    fn test_messages_name_the_path() {
        let err = IctError::acquisition_date("/data/AMS_R0.ict", "token out of range");
        let message = err.to_string();
        assert!(message.contains("/data/AMS_R0.ict"));
        assert!(message.contains("token out of range"));
    }
}
