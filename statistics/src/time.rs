use crate::frequency::most_frequent;
use crate::{ensure_not_empty, StatisticsError};
use common::types::trip::{TripTable, DAY_OF_WEEK, MONTH, START_TIME};
use common::util::df::{str_at, u32_at};
use polars::prelude::{col, DataType, IntoLazy};

pub(crate) const HOUR: &str = "hour";

/// The most frequent times of travel
#[derive(Debug, Clone, PartialEq)]
pub struct TimeStats {
    /// Calendar month, 1 for january
    pub popular_month: u32,
    /// Lowercase weekday name
    pub popular_day: String,
    /// Hour of the day the trip started, 0-23
    pub popular_hour: u32,
}

pub fn time_stats(table: &TripTable) -> Result<TimeStats, StatisticsError> {
    ensure_not_empty(table)?;

    let trips = table.frame().clone().lazy()
        .with_column(col(START_TIME).dt().hour().cast(DataType::UInt32).alias(HOUR))
        .collect()?;

    Ok(TimeStats {
        popular_month: most_frequent(&trips, MONTH, u32_at)?,
        popular_day: most_frequent(&trips, DAY_OF_WEEK, str_at)?,
        popular_hour: most_frequent(&trips, HOUR, u32_at)?,
    })
}
