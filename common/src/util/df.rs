use polars::datatypes::AnyValue;
use polars::error::{PolarsError, PolarsResult};
use polars::frame::DataFrame;

/// Reads a string cell. Null cells are `None`, non-string cells are an error.
pub fn str_at(frame: &DataFrame, column: &str, row: usize) -> PolarsResult<Option<String>> {
    match frame.column(column)?.get(row)? {
        AnyValue::Null => Ok(None),
        AnyValue::String(value) => Ok(Some(value.to_string())),
        AnyValue::StringOwned(value) => Ok(Some(value.to_string())),
        other => Err(PolarsError::ComputeError(
            format!("Expected a string in column '{}', found {}", column, other).into()
        )),
    }
}

/// Reads a numeric cell as `f64`. Null cells are `None`.
pub fn f64_at(frame: &DataFrame, column: &str, row: usize) -> PolarsResult<Option<f64>> {
    let value = frame.column(column)?.get(row)?;
    match value {
        AnyValue::Null => Ok(None),
        _ => value.extract::<f64>()
            .map(Some)
            .ok_or_else(|| PolarsError::ComputeError(format!("Column '{}' is not numeric", column).into())),
    }
}

/// Reads a numeric cell as `u32`. Null cells are `None`.
pub fn u32_at(frame: &DataFrame, column: &str, row: usize) -> PolarsResult<Option<u32>> {
    let value = frame.column(column)?.get(row)?;
    match value {
        AnyValue::Null => Ok(None),
        _ => value.extract::<u32>()
            .map(Some)
            .ok_or_else(|| PolarsError::ComputeError(format!("Column '{}' does not hold a u32", column).into())),
    }
}
