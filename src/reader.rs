//! Single-file ICARTT reader.
//!
//! Reads one ICARTT file into a [`DataFrame`]:
//! 1. the first line gives the number of header lines to skip,
//! 2. the remaining comma-delimited table is parsed with per-column types
//!    inferred from content,
//! 3. the acquisition date is taken from the file path,
//! 4. spaces are stripped from column names,
//! 5. the -9999 sentinel becomes null,
//! 6. "Time" columns (seconds since midnight) become absolute timestamps.

use crate::config::IctConfig;
use crate::constants::NANOS_PER_SECOND;
use crate::date::acquisition_date;
use crate::error::{IctError, Result};
use crate::header::parse_ict_header;
use crate::models::IctHeader;
use crate::schema::{infer_column, is_numeric, sentinel_to_null};

use chrono::NaiveDate;
use polars::prelude::*;
use std::collections::HashSet;
use std::path::Path;
use tracing::debug;

/// Reader for individual ICARTT files
#[derive(Debug, Clone, Default)]
pub struct IctReader {
    config: IctConfig,
}

/// A time column, by its name in the file and its name in the frame
struct TimeColumn {
    original: String,
    name: PlSmallStr,
}

impl IctReader {
    pub fn new(config: IctConfig) -> Self {
        Self { config }
    }

    /// Read one ICARTT file into a DataFrame
    pub fn read_file(&self, file_path: &Path) -> Result<DataFrame> {
        debug!("Reading ICARTT file: {}", file_path.display());

        let table_error = |source: PolarsError| IctError::TableParsing {
            path: file_path.to_path_buf(),
            source,
        };

        let header = parse_ict_header(file_path)?;
        let raw = self.read_raw_table(file_path, &header)?;
        let date = acquisition_date(file_path)?;

        let mut seen = HashSet::with_capacity(raw.width());
        let mut columns = Vec::with_capacity(raw.width());
        let mut time_columns = Vec::new();

        for column in raw.get_columns() {
            let original = column.name().as_str();
            let name = PlSmallStr::from(original.replace(' ', ""));

            if !seen.insert(name.clone()) {
                return Err(table_error(PolarsError::Duplicate(
                    format!("column name '{}' appears twice after removing spaces", name).into(),
                )));
            }

            if self.config.is_time_column(original) {
                time_columns.push(TimeColumn {
                    original: original.to_string(),
                    name: name.clone(),
                });
            }

            let typed = infer_column(column.as_materialized_series()).map_err(table_error)?;
            columns.push(Column::from(typed.with_name(name)));
        }

        let sentinels: Vec<Expr> = columns
            .iter()
            .filter(|column| is_numeric(column.dtype()))
            .map(|column| sentinel_to_null(column.name().as_str(), self.config.missing_value))
            .collect();

        let mut frame = DataFrame::new(columns).map_err(table_error)?;
        if !sentinels.is_empty() {
            frame = frame
                .lazy()
                .with_columns(sentinels)
                .collect()
                .map_err(table_error)?;
        }

        for time_column in &time_columns {
            let seconds = frame
                .column(time_column.name.as_str())
                .map_err(table_error)?
                .as_materialized_series()
                .clone();

            if !is_numeric(seconds.dtype()) {
                return Err(IctError::NonNumericTimeColumn {
                    path: file_path.to_path_buf(),
                    column: time_column.original.clone(),
                });
            }

            let timestamps = timestamp_series(date, &seconds).map_err(table_error)?;
            frame.with_column(timestamps).map_err(table_error)?;
        }

        debug!(
            "Read {} rows x {} columns from {} (acquired {})",
            frame.height(),
            frame.width(),
            file_path.display(),
            date
        );

        Ok(frame)
    }

    /// Parse the data table with every column as text
    fn read_raw_table(&self, file_path: &Path, header: &IctHeader) -> Result<DataFrame> {
        // Comment lines are free text, so skip by line rather than by CSV record
        CsvReadOptions::default()
            .with_has_header(true)
            .with_skip_lines(header.skip_rows)
            .with_infer_schema_length(Some(0))
            .try_into_reader_with_file_path(Some(file_path.to_path_buf()))
            .and_then(|reader| reader.finish())
            .map_err(|source| IctError::TableParsing {
                path: file_path.to_path_buf(),
                source,
            })
    }
}

/// Convert seconds since midnight of `date` into a nanosecond datetime column.
///
/// Seconds that are not finite or fall outside the timestamp range are an
/// error naming the column.
fn timestamp_series(date: NaiveDate, seconds: &Series) -> PolarsResult<Series> {
    let name = seconds.name().clone();
    let out_of_range = || {
        PolarsError::ComputeError(
            format!("time column '{}' holds seconds outside the timestamp range", name).into(),
        )
    };

    let midnight = date
        .and_hms_opt(0, 0, 0)
        .and_then(|dt| dt.and_utc().timestamp_nanos_opt())
        .ok_or_else(|| {
            PolarsError::ComputeError(format!("date {} is outside the timestamp range", date).into())
        })?;

    let scaled = seconds
        .cast(&DataType::Float64)?
        .f64()?
        .apply_values(|secs| (secs * NANOS_PER_SECOND as f64).round())
        .into_series();

    // Non-finite and out-of-range offsets do not survive a strict cast
    let offsets = scaled
        .strict_cast(&DataType::Int64)
        .map_err(|_| out_of_range())?;
    let offsets = offsets.i64()?;

    for bound in [offsets.min(), offsets.max()].into_iter().flatten() {
        if midnight.checked_add(bound).is_none() {
            return Err(out_of_range());
        }
    }

    (offsets + midnight)
        .into_series()
        .cast(&DataType::Datetime(TimeUnit::Nanoseconds, None))
}

/// Read one ICARTT file with the default configuration
pub fn read_file(path: impl AsRef<Path>) -> Result<DataFrame> {
    IctReader::default().read_file(path.as_ref())
}
