use common::types::trip::{derive_calendar_fields, TripTable};
use polars::error::PolarsResult;
use polars::frame::DataFrame;
use polars::prelude::IntoLazy;

/// Turns a frame shaped like a city CSV into a table, deriving the calendar columns like loading
/// does.
pub(crate) fn trip_table(frame: DataFrame) -> PolarsResult<TripTable> {
    Ok(TripTable::new(derive_calendar_fields(frame.lazy()).collect()?))
}

/// A table with the columns of case 1, but no trips
pub(crate) fn empty_table() -> PolarsResult<TripTable> {
    Ok(TripTable::new(case_1::trip_table()?.into_frame().slice(0, 0)))
}

/// Test case 1 looks like a tiny chicago dataset (with gender and birth year):
/// - 2 trips A -> B on tuesdays in march around 17:00
/// - 1 trip B -> A on a monday morning in january
/// - One rider has no birth year recorded
pub(crate) mod case_1 {
    use super::*;
    use common::types::trip::*;
    use polars::df;

    pub(crate) fn trip_table() -> PolarsResult<TripTable> {
        super::trip_table(df!(
            START_TIME => &["2017-03-07 17:10:00", "2017-03-14 17:40:00", "2017-01-02 08:05:00"],
            TRIP_DURATION => &[3_661i64, 7_200, 600],
            START_STATION => &["A", "A", "B"],
            END_STATION => &["B", "B", "A"],
            USER_TYPE => &["Subscriber", "Subscriber", "Customer"],
            GENDER => &["Male", "Female", "Male"],
            BIRTH_YEAR => &[Some(1990.0f64), Some(1985.0), None],
        )?)
    }
}

/// Test case 2 looks like a washington dataset: no gender and no birth year columns, and
/// fractional trip durations.
/// - 1 trip C -> D of 3661 seconds
/// - 1 trip D -> C of 7200 seconds
pub(crate) mod case_2 {
    use super::*;
    use common::types::trip::*;
    use polars::df;

    pub(crate) fn trip_table() -> PolarsResult<TripTable> {
        super::trip_table(df!(
            START_TIME => &["2017-05-20 11:00:00", "2017-05-20 12:00:00"],
            TRIP_DURATION => &[3_661.0f64, 7_200.0],
            START_STATION => &["C", "D"],
            END_STATION => &["D", "C"],
            USER_TYPE => &["Subscriber", "Customer"],
        )?)
    }
}
