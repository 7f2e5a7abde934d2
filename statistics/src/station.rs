use crate::frequency::{most_frequent, value_counts};
use crate::{ensure_not_empty, StatisticsError};
use common::types::trip::{TripTable, END_STATION, START_STATION};
use common::util::df::str_at;

/// The most popular stations and trip
#[derive(Debug, Clone, PartialEq)]
pub struct StationStats {
    pub common_start_station: String,
    pub common_end_station: String,
    /// (start station, end station). A -> B and B -> A are different trips.
    pub common_trip: (String, String),
}

pub fn station_stats(table: &TripTable) -> Result<StationStats, StatisticsError> {
    ensure_not_empty(table)?;
    let trips = table.frame();

    Ok(StationStats {
        common_start_station: most_frequent(trips, START_STATION, str_at)?,
        common_end_station: most_frequent(trips, END_STATION, str_at)?,
        common_trip: most_frequent_trip(table)?,
    })
}

/// Groups on the (start, end) pair itself, so station names are never joined into one string
fn most_frequent_trip(table: &TripTable) -> Result<(String, String), StatisticsError> {
    let counts = value_counts(table.frame(), &[START_STATION, END_STATION])?;
    if counts.height() == 0 {
        return Err(StatisticsError::NoValues(START_STATION));
    }

    let start = str_at(&counts, START_STATION, 0)?.ok_or(StatisticsError::NoValues(START_STATION))?;
    let end = str_at(&counts, END_STATION, 0)?.ok_or(StatisticsError::NoValues(END_STATION))?;

    Ok((start, end))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::{case_1, case_2, empty_table, trip_table};
    use common::types::trip::{START_TIME, TRIP_DURATION, USER_TYPE};
    use polars::df;

    #[test]
    fn test_station_stats() {
        let stats = station_stats(&case_1::trip_table().unwrap()).unwrap();

        assert_eq!(stats, StationStats {
            common_start_station: "A".to_string(),
            common_end_station: "B".to_string(),
            common_trip: ("A".to_string(), "B".to_string()),
        });
    }

    #[test]
    fn test_trip_direction_matters() {
        // C -> D and D -> C are one trip each; the tie goes to the lower pair
        let stats = station_stats(&case_2::trip_table().unwrap()).unwrap();

        assert_eq!(stats.common_trip, ("C".to_string(), "D".to_string()));
    }

    #[test]
    fn test_station_ties_go_to_lowest_name() {
        // C and D start one trip each and end one trip each
        let stats = station_stats(&case_2::trip_table().unwrap()).unwrap();

        assert_eq!(stats.common_start_station, "C");
        assert_eq!(stats.common_end_station, "C");
    }

    #[test]
    fn test_station_names_with_separators() {
        // Joining these with "||" would make the first two trips look identical
        let table = trip_table(df!(
            START_TIME => &["2017-01-01 10:00:00", "2017-01-01 11:00:00", "2017-01-01 12:00:00"],
            TRIP_DURATION => &[60i64, 60, 60],
            START_STATION => &["A||B", "A", "Z"],
            END_STATION => &["C", "B||C", "Y"],
            USER_TYPE => &["Subscriber", "Subscriber", "Subscriber"],
        ).unwrap()).unwrap();

        let stats = station_stats(&table).unwrap();

        assert_eq!(stats.common_trip, ("A".to_string(), "B||C".to_string()));
    }

    #[test]
    fn test_empty_table() {
        let table = empty_table().unwrap();
        assert!(matches!(station_stats(&table), Err(StatisticsError::EmptyDataset)));
    }

    #[test]
    fn test_idempotent() {
        let table = case_1::trip_table().unwrap();
        assert_eq!(station_stats(&table).unwrap(), station_stats(&table).unwrap());
    }
}
