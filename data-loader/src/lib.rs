pub mod step1_locate;
pub mod step2_import;
pub mod step3_filter;

use crate::step1_locate::{locate_source, LocateError};
use crate::step2_import::{import_trips, ImportError};
use crate::step3_filter::apply_filters;
use common::types::config::CitySources;
use common::types::filter::FilterCriteria;
use common::types::trip::TripTable;
use log::debug;
use polars::error::PolarsError;
use std::fmt;
use std::fmt::Display;

/// Loads the trips of `criteria.city` and keeps the ones matching the month and day filters.
/// No matching trip is not an error, the table is just empty then.
pub fn load(sources: &CitySources, criteria: &FilterCriteria) -> Result<TripTable, LoadError> {
    let path = locate_source(sources, criteria.city)?;
    let trips = import_trips(&path)?;
    let filtered = apply_filters(trips, criteria.month, criteria.day);

    let table = TripTable::new(filtered.collect()?);
    debug!(target: "loader", "Loaded {} trips from '{}' ({})", table.len(), path.display(), criteria);

    Ok(table)
}

#[derive(thiserror::Error, Debug)]
pub enum LoadError {
    Locate(#[from] LocateError),
    Import(#[from] ImportError),
    Polars(#[from] PolarsError),
}

impl Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let err: &dyn Display = match self {
            LoadError::Locate(err) => err,
            LoadError::Import(err) => err,
            LoadError::Polars(err) => err,
        };
        write!(f, "{}", err)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use chrono::{Datelike, NaiveDateTime};
    use common::types::filter::{City, Day, DayFilter, Month, MonthFilter};
    use common::types::trip::{DAY_OF_WEEK, MONTH, START_TIME_FORMAT};
    use common::util::df::{str_at, u32_at};
    use std::collections::HashMap;
    use std::io::Write;
    use std::path::Path;
    use tempfile::TempDir;

    pub(crate) const CHICAGO_CSV: &str = "\
Start Time,End Time,Trip Duration,Start Station,End Station,User Type,Gender,Birth Year
2017-01-01 00:07:57,2017-01-01 00:20:53,776,Canal St & Adams St,Clinton St & Madison St,Subscriber,Male,1984.0
2017-01-02 08:10:00,2017-01-02 08:20:00,600,Canal St & Adams St,Clinton St & Madison St,Subscriber,Female,1990.0
2017-03-06 17:00:00,2017-03-06 17:30:00,1800,Clinton St & Madison St,Canal St & Adams St,Customer,,
2017-03-07 17:45:00,2017-03-07 17:50:00,300,Canal St & Adams St,Wells St & Elm St,Subscriber,Male,1990.0
2017-06-05 09:00:00,2017-06-05 09:15:30,930.5,Wells St & Elm St,Canal St & Adams St,Subscriber,Female,1975.0
2017-06-06 23:59:59,2017-06-07 00:10:00,601,Wells St & Elm St,Wells St & Elm St,Customer,,
";

    pub(crate) fn write_csv(dir: &Path, name: &str, content: &str) -> std::path::PathBuf {
        let path = dir.join(name);
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    fn chicago_sources() -> (TempDir, CitySources) {
        let dir = TempDir::new().unwrap();
        write_csv(dir.path(), "chicago.csv", CHICAGO_CSV);
        let sources = CitySources::new(dir.path().to_path_buf(), HashMap::new());
        (dir, sources)
    }

    fn criteria(month: MonthFilter, day: DayFilter) -> FilterCriteria {
        FilterCriteria { city: City::Chicago, month, day }
    }

    #[test]
    fn test_load_unfiltered() {
        let (_dir, sources) = chicago_sources();

        let table = load(&sources, &criteria(MonthFilter::All, DayFilter::All)).unwrap();
        assert_eq!(table.len(), 6);

        // The derived columns agree with an independent parse of the raw timestamps
        let raw_start_times: Vec<&str> = CHICAGO_CSV.lines().skip(1)
            .map(|line| line.split(',').next().unwrap())
            .collect();
        for (row, raw) in raw_start_times.iter().enumerate() {
            let timestamp = NaiveDateTime::parse_from_str(raw, START_TIME_FORMAT).unwrap();
            assert_eq!(u32_at(table.frame(), MONTH, row).unwrap(), Some(timestamp.month()));
            assert_eq!(
                str_at(table.frame(), DAY_OF_WEEK, row).unwrap().as_deref(),
                Some(Day::from(timestamp.weekday()).name()),
            );
        }
    }

    #[test]
    fn test_load_filtered() {
        let (_dir, sources) = chicago_sources();

        let table = load(&sources, &criteria(MonthFilter::Only(Month::March), DayFilter::Only(Day::Tuesday))).unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(str_at(table.frame(), "End Station", 0).unwrap().as_deref(), Some("Wells St & Elm St"));

        let table = load(&sources, &criteria(MonthFilter::Only(Month::June), DayFilter::All)).unwrap();
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_load_without_matches_is_empty() {
        let (_dir, sources) = chicago_sources();

        let table = load(&sources, &criteria(MonthFilter::Only(Month::February), DayFilter::All)).unwrap();
        assert!(table.is_empty());
    }

    #[test]
    fn test_load_missing_file() {
        let dir = TempDir::new().unwrap();
        let sources = CitySources::new(dir.path().to_path_buf(), HashMap::new());

        let result = load(&sources, &criteria(MonthFilter::All, DayFilter::All));
        assert!(matches!(result, Err(LoadError::Locate(LocateError::MissingFile(_)))));
    }

    #[test]
    fn test_load_bad_timestamp() {
        let dir = TempDir::new().unwrap();
        write_csv(dir.path(), "chicago.csv", "\
Start Time,Trip Duration,Start Station,End Station,User Type
2017-01-01 00:07:57,776,A,B,Subscriber
01/02/2017 8:10,600,A,B,Subscriber
");
        let sources = CitySources::new(dir.path().to_path_buf(), HashMap::new());

        let result = load(&sources, &criteria(MonthFilter::All, DayFilter::All));
        assert!(matches!(result, Err(LoadError::Polars(_))));
    }

    #[test]
    fn test_load_non_numeric_duration() {
        let dir = TempDir::new().unwrap();
        write_csv(dir.path(), "chicago.csv", "\
Start Time,Trip Duration,Start Station,End Station,User Type
2017-01-01 00:07:57,100,A,B,Subscriber
2017-01-02 08:10:00,oops,A,B,Subscriber
");
        let sources = CitySources::new(dir.path().to_path_buf(), HashMap::new());

        let result = load(&sources, &criteria(MonthFilter::All, DayFilter::All));
        assert!(matches!(result, Err(LoadError::Polars(_))));
    }
}
