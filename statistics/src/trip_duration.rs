use crate::{ensure_not_empty, StatisticsError};
use common::types::trip::{TripTable, TRIP_DURATION};
use common::util::df::f64_at;
use common::util::duration::DurationParts;
use polars::prelude::{col, DataType, IntoLazy};

const TOTAL: &str = "total";
const MEAN: &str = "mean";

/// Total and mean trip duration, in seconds
#[derive(Debug, Clone, PartialEq)]
pub struct DurationStats {
    pub total_duration: f64,
    pub mean_duration: f64,
}

impl DurationStats {
    pub fn total_parts(&self) -> DurationParts {
        DurationParts::from_seconds(self.total_duration)
    }

    pub fn mean_parts(&self) -> DurationParts {
        DurationParts::from_seconds(self.mean_duration)
    }
}

pub fn duration_stats(table: &TripTable) -> Result<DurationStats, StatisticsError> {
    ensure_not_empty(table)?;

    let duration = col(TRIP_DURATION).strict_cast(DataType::Float64);
    let aggregates = table.frame().clone().lazy()
        .select([
            duration.clone().sum().alias(TOTAL),
            duration.mean().alias(MEAN),
        ])
        .collect()?;

    // The mean is null exactly when there is no duration at all
    let mean_duration = f64_at(&aggregates, MEAN, 0)?.ok_or(StatisticsError::NoValues(TRIP_DURATION))?;
    let total_duration = f64_at(&aggregates, TOTAL, 0)?.ok_or(StatisticsError::NoValues(TRIP_DURATION))?;

    Ok(DurationStats { total_duration, mean_duration })
}
