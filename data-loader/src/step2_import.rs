use common::types::trip::{derive_calendar_fields, REQUIRED_COLUMNS, TRIP_DURATION};
use polars::prelude::{col, DataType, LazyCsvReader, LazyFileListReader, LazyFrame};
use std::fmt;
use std::fmt::Display;
use std::path::Path;

/// Lazily reads a city CSV, casts the trip duration to seconds as `f64` and derives the calendar
/// columns.
///
/// The header is checked eagerly; timestamps and durations are only parsed once the returned frame
/// is collected. A duration that is not a number fails the collection instead of turning into null.
pub fn import_trips(path: &Path) -> Result<LazyFrame, ImportError> {
    let mut trips = LazyCsvReader::new(path)
        .with_has_header(true)
        .finish()?;

    let schema = trips.collect_schema()?;
    if let Some(missing) = REQUIRED_COLUMNS.iter().find(|column| !schema.contains(column)) {
        return Err(ImportError::MissingColumn(*missing));
    }

    let trips = trips.with_column(col(TRIP_DURATION).strict_cast(DataType::Float64));

    Ok(derive_calendar_fields(trips))
}

#[derive(thiserror::Error, Debug)]
pub enum ImportError {
    Polars(#[from] polars::error::PolarsError),
    MissingColumn(&'static str),
}

impl Display for ImportError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ImportError::Polars(err) => write!(f, "{}", err),
            ImportError::MissingColumn(column) => write!(f, "Missing column '{}'", column),
        }
    }
}
