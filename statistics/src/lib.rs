//! Descriptive statistics over a [`TripTable`].
//!
//! Every computation is a pure function of its input table. An empty table is rejected with
//! [`StatisticsError::EmptyDataset`] by all of them alike.

pub mod errors;
mod frequency;
pub mod station;
pub mod time;
pub mod trip_duration;
pub mod user;
#[cfg(test)]
mod tests;

use common::types::trip::TripTable;
pub use errors::StatisticsError;
pub use station::{station_stats, StationStats};
pub use time::{time_stats, TimeStats};
pub use trip_duration::{duration_stats, DurationStats};
pub use user::{user_stats, BirthYearSummary, UserStats};

fn ensure_not_empty(table: &TripTable) -> Result<(), StatisticsError> {
    if table.is_empty() {
        return Err(StatisticsError::EmptyDataset);
    }
    Ok(())
}
