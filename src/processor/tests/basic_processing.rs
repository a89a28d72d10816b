//! Basic aggregation tests

use crate::config::IctConfig;
use crate::processor::{InstrumentReader, read_instrument};
use crate::test_support::{scratch_dir, timestamp_nanos, write_ict};
use polars::prelude::*;
use std::path::PathBuf;
use tempfile::TempDir;

/// Helper to create a directory with two AMS flights and one NO2 flight
fn create_instrument_directory() -> (TempDir, PathBuf) {
    let temp_dir = scratch_dir();
    let ict_path = temp_dir.path().join("ict");
    std::fs::create_dir_all(&ict_path).unwrap();

    // Written out of order to check that reads follow sorted paths
    write_ict(
        &ict_path,
        "AMS_20210616_R0.ict",
        "Time_Start, Org, SO4",
        &["100, 3.0, 0.3", "200, 4.0, 0.4"],
    );
    write_ict(
        &ict_path,
        "AMS_20210615_R0.ict",
        "Time_Start, Org, SO4",
        &["3600, 1.0, 0.1", "3700, 2.0, -9999"],
    );
    write_ict(
        &ict_path,
        "NO2_20210615_R0.ict",
        "Time_Start, NO2",
        &["3600, 12.5"],
    );

    (temp_dir, ict_path)
}

fn time_start_nanos(df: &DataFrame) -> Vec<Option<i64>> {
    df.column("Time_Start")
        .unwrap()
        .cast(&DataType::Int64)
        .unwrap()
        .as_materialized_series()
        .i64()
        .unwrap()
        .into_iter()
        .collect()
}

#[test]
fn test_files_are_stacked_in_path_order() {
    let (_temp_dir, ict_path) = create_instrument_directory();

    let df = read_instrument("AMS", None, &ict_path).unwrap();

    assert_eq!(df.height(), 4);
    assert_eq!(
        time_start_nanos(&df),
        vec![
            Some(timestamp_nanos(2021, 6, 15, 3600.0)),
            Some(timestamp_nanos(2021, 6, 15, 3700.0)),
            Some(timestamp_nanos(2021, 6, 16, 100.0)),
            Some(timestamp_nanos(2021, 6, 16, 200.0)),
        ]
    );

    let org: Vec<Option<f64>> = df
        .column("Org")
        .unwrap()
        .as_materialized_series()
        .f64()
        .unwrap()
        .into_iter()
        .collect();
    assert_eq!(org, vec![Some(1.0), Some(2.0), Some(3.0), Some(4.0)]);
}

#[test]
fn test_other_instruments_are_ignored() {
    let (_temp_dir, ict_path) = create_instrument_directory();

    let df = InstrumentReader::default()
        .with_directory(&ict_path)
        .read_instrument("NO2")
        .unwrap();

    assert_eq!(df.height(), 1);
    assert!(df.column("Org").is_err());
}

#[test]
fn test_discover_reports_read_order() {
    let (_temp_dir, ict_path) = create_instrument_directory();

    let reader = InstrumentReader::new(IctConfig::default().with_input_directory(&ict_path));
    let files = reader.discover("AMS").unwrap();

    assert_eq!(reader.directory(), ict_path.as_path());
    assert_eq!(files.len(), 2);
    assert!(files[0].ends_with("AMS_20210615_R0.ict"));
    assert!(files[1].ends_with("AMS_20210616_R0.ict"));
}

#[test]
fn test_columns_missing_from_some_files_are_null_filled() {
    let temp_dir = scratch_dir();
    write_ict(
        temp_dir.path(),
        "CIMS_20200801_R0.ict",
        "Time_Start, HNO3",
        &["10, 1.5"],
    );
    write_ict(
        temp_dir.path(),
        "CIMS_20200802_R0.ict",
        "Time_Start, HNO3, SO2",
        &["20, 2.5, 7"],
    );

    let df = read_instrument("CIMS", None, temp_dir.path()).unwrap();

    assert_eq!(df.height(), 2);
    let so2 = df.column("SO2").unwrap();
    assert_eq!(so2.null_count(), 1);
}

#[test]
fn test_numeric_types_are_widened_across_files() {
    let temp_dir = scratch_dir();
    write_ict(
        temp_dir.path(),
        "CO_20200801_R0.ict",
        "Time_Start, CO",
        &["10, 100"],
    );
    write_ict(
        temp_dir.path(),
        "CO_20200802_R0.ict",
        "Time_Start, CO",
        &["20, 100.5"],
    );

    let df = read_instrument("CO", None, temp_dir.path()).unwrap();

    let co = df.column("CO").unwrap();
    assert_eq!(co.dtype(), &DataType::Float64);
    let values: Vec<Option<f64>> = co
        .as_materialized_series()
        .f64()
        .unwrap()
        .into_iter()
        .collect();
    assert_eq!(values, vec![Some(100.0), Some(100.5)]);
}

#[test]
fn test_read_paths_uses_given_order() {
    let (_temp_dir, ict_path) = create_instrument_directory();

    let files = vec![
        ict_path.join("AMS_20210616_R0.ict"),
        ict_path.join("AMS_20210615_R0.ict"),
    ];
    let df = InstrumentReader::default().read_paths(&files).unwrap();

    assert_eq!(
        time_start_nanos(&df)[0],
        Some(timestamp_nanos(2021, 6, 16, 100.0))
    );
}
