//! Column type inference for ICARTT data tables.
//!
//! The data table is read with every column as text, then each column is
//! classified from its content: integer if every present cell casts to an
//! integer, float if every present cell casts to a number, text otherwise.
//! Cells are trimmed before casting since ICARTT writers commonly pad values
//! after the delimiter.

use polars::prelude::*;

/// Classify a text column by its content and return it with that type.
///
/// Text columns keep their original, untrimmed cells. A column with no
/// present cells is Float64.
pub fn infer_column(raw: &Series) -> PolarsResult<Series> {
    let cells = raw.str()?;
    let trimmed = StringChunked::from_iter_options(
        raw.name().clone(),
        cells
            .into_iter()
            .map(|cell| cell.map(str::trim).filter(|cell| !cell.is_empty())),
    )
    .into_series();

    if trimmed.null_count() == trimmed.len() {
        return trimmed.cast(&DataType::Float64);
    }

    // Strict casts fail as soon as one present cell does not convert
    if let Ok(integers) = trimmed.strict_cast(&DataType::Int64) {
        return Ok(integers);
    }

    if let Ok(floats) = trimmed.strict_cast(&DataType::Float64) {
        return Ok(nan_to_null(floats.f64()?).into_series());
    }

    Ok(raw.clone())
}

/// Whether an inferred column holds numbers
pub fn is_numeric(dtype: &DataType) -> bool {
    matches!(dtype, DataType::Int64 | DataType::Float64)
}

/// Expression nulling every value of `name` exactly equal to `sentinel`
pub fn sentinel_to_null(name: &str, sentinel: i64) -> Expr {
    when(col(name).eq(lit(sentinel)))
        .then(lit(NULL))
        .otherwise(col(name))
        .alias(name)
}

fn nan_to_null(values: &Float64Chunked) -> Float64Chunked {
    values
        .into_iter()
        .map(|v| v.filter(|v| !v.is_nan()))
        .collect::<Float64Chunked>()
        .with_name(values.name().clone())
}
