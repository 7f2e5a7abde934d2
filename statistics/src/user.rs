use crate::frequency::{most_frequent, value_counts, TRIPS};
use crate::{ensure_not_empty, StatisticsError};
use common::types::trip::{OptionalColumn, TripTable, BIRTH_YEAR, USER_TYPE};
use common::util::df::{f64_at, str_at, u32_at};
use log::debug;
use polars::frame::DataFrame;
use polars::prelude::{col, DataType, IntoLazy};

/// Value counts, most frequent first
pub type Counts = Vec<(String, u32)>;

#[derive(Debug, Clone, PartialEq)]
pub struct UserStats {
    pub user_types: Counts,
    /// `None` if the city does not record gender
    pub genders: Option<Counts>,
    /// `None` if the city does not record birth years, or none is known for these trips
    pub birth_years: Option<BirthYearSummary>,
}

/// Birth years as found in the data. They are stored as floats because of missing values and
/// should only be truncated for display.
#[derive(Debug, Clone, PartialEq)]
pub struct BirthYearSummary {
    pub earliest: f64,
    pub most_recent: f64,
    pub most_common: f64,
}

pub fn user_stats(table: &TripTable) -> Result<UserStats, StatisticsError> {
    ensure_not_empty(table)?;

    let genders = if table.has_column(OptionalColumn::Gender) {
        Some(counts(table.frame(), OptionalColumn::Gender.name())?)
    } else {
        debug!(target: "statistics", "No gender column, skipping gender counts");
        None
    };

    let birth_years = if table.has_column(OptionalColumn::BirthYear) {
        birth_year_summary(table)?
    } else {
        debug!(target: "statistics", "No birth year column, skipping birth year summary");
        None
    };

    Ok(UserStats {
        user_types: counts(table.frame(), USER_TYPE)?,
        genders,
        birth_years,
    })
}

fn counts(frame: &DataFrame, column: &'static str) -> Result<Counts, StatisticsError> {
    let counts = value_counts(frame, &[column])?;

    (0..counts.height())
        .map(|row| -> Result<(String, u32), StatisticsError> {
            let value = str_at(&counts, column, row)?.ok_or(StatisticsError::NoValues(column))?;
            let count = u32_at(&counts, TRIPS, row)?.ok_or(StatisticsError::NoValues(TRIPS))?;
            Ok((value, count))
        })
        .collect()
}

fn birth_year_summary(table: &TripTable) -> Result<Option<BirthYearSummary>, StatisticsError> {
    let years = table.frame().clone().lazy()
        .select([col(BIRTH_YEAR).cast(DataType::Float64)])
        .collect()?;
    let extremes = years.clone().lazy()
        .select([
            col(BIRTH_YEAR).min().alias("earliest"),
            col(BIRTH_YEAR).max().alias("most_recent"),
        ])
        .collect()?;

    let (Some(earliest), Some(most_recent)) = (
        f64_at(&extremes, "earliest", 0)?,
        f64_at(&extremes, "most_recent", 0)?,
    ) else {
        debug!(target: "statistics", "No birth years known for these trips");
        return Ok(None);
    };

    Ok(Some(BirthYearSummary {
        earliest,
        most_recent,
        most_common: most_frequent(&years, BIRTH_YEAR, f64_at)?,
    }))
}
