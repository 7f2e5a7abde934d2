use crate::types::errors::InvalidFilterInput;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// The value that disables a month or day filter.
pub const ALL: &str = "all";

#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum City {
    Chicago,
    #[serde(rename = "new york city")]
    NewYorkCity,
    Washington,
}

impl City {
    pub const ALL: [City; 3] = [City::Chicago, City::NewYorkCity, City::Washington];

    pub fn name(&self) -> &'static str {
        match self {
            City::Chicago => "chicago",
            City::NewYorkCity => "new york city",
            City::Washington => "washington",
        }
    }

    /// File holding this city's trips when the config file does not name one
    pub fn default_file_name(&self) -> &'static str {
        match self {
            City::Chicago => "chicago.csv",
            City::NewYorkCity => "new_york_city.csv",
            City::Washington => "washington.csv",
        }
    }

    pub fn choices() -> String {
        Self::ALL.iter().map(City::name).join(", ")
    }
}

/// Only the first half of the year is covered by the datasets, so later months are rejected.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq)]
pub enum Month {
    January,
    February,
    March,
    April,
    May,
    June,
}

impl Month {
    pub const ALL: [Month; 6] = [
        Month::January, Month::February, Month::March,
        Month::April, Month::May, Month::June,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Month::January => "january",
            Month::February => "february",
            Month::March => "march",
            Month::April => "april",
            Month::May => "may",
            Month::June => "june",
        }
    }

    /// Calendar month number, 1 for january
    pub fn number(&self) -> u32 {
        match self {
            Month::January => 1,
            Month::February => 2,
            Month::March => 3,
            Month::April => 4,
            Month::May => 5,
            Month::June => 6,
        }
    }
}

#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq)]
pub enum Day {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Day {
    pub const ALL: [Day; 7] = [
        Day::Monday, Day::Tuesday, Day::Wednesday, Day::Thursday,
        Day::Friday, Day::Saturday, Day::Sunday,
    ];

    /// Lowercase weekday name, as stored in the `day_of_week` column
    pub fn name(&self) -> &'static str {
        match self {
            Day::Monday => "monday",
            Day::Tuesday => "tuesday",
            Day::Wednesday => "wednesday",
            Day::Thursday => "thursday",
            Day::Friday => "friday",
            Day::Saturday => "saturday",
            Day::Sunday => "sunday",
        }
    }
}

impl From<chrono::Weekday> for Day {
    fn from(value: chrono::Weekday) -> Self {
        match value {
            chrono::Weekday::Mon => Day::Monday,
            chrono::Weekday::Tue => Day::Tuesday,
            chrono::Weekday::Wed => Day::Wednesday,
            chrono::Weekday::Thu => Day::Thursday,
            chrono::Weekday::Fri => Day::Friday,
            chrono::Weekday::Sat => Day::Saturday,
            chrono::Weekday::Sun => Day::Sunday,
        }
    }
}

#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq)]
pub enum MonthFilter {
    All,
    Only(Month),
}

impl MonthFilter {
    pub fn choices() -> String {
        Month::ALL.iter().map(Month::name).chain([ALL]).join(", ")
    }
}

#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq)]
pub enum DayFilter {
    All,
    Only(Day),
}

impl DayFilter {
    pub fn choices() -> String {
        Day::ALL.iter().map(Day::name).chain([ALL]).join(", ")
    }
}

/// The selection a single exploration runs with. Built once from user input, never changed.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq)]
pub struct FilterCriteria {
    pub city: City,
    pub month: MonthFilter,
    pub day: DayFilter,
}

fn parse_named<T: Copy>(
    input: &str,
    candidates: &[T],
    name: fn(&T) -> &'static str,
    kind: &'static str,
) -> Result<T, InvalidFilterInput> {
    let normalized = input.trim().to_lowercase();

    candidates.iter()
        .find(|&candidate| name(candidate) == normalized)
        .copied()
        .ok_or_else(|| InvalidFilterInput { kind, input: input.trim().to_string() })
}

impl FromStr for City {
    type Err = InvalidFilterInput;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_named(s, &City::ALL, City::name, "city")
    }
}

impl FromStr for Month {
    type Err = InvalidFilterInput;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_named(s, &Month::ALL, Month::name, "month")
    }
}

impl FromStr for Day {
    type Err = InvalidFilterInput;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_named(s, &Day::ALL, Day::name, "day")
    }
}

impl FromStr for MonthFilter {
    type Err = InvalidFilterInput;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case(ALL) {
            return Ok(MonthFilter::All);
        }
        s.parse().map(MonthFilter::Only)
    }
}

impl FromStr for DayFilter {
    type Err = InvalidFilterInput;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case(ALL) {
            return Ok(DayFilter::All);
        }
        s.parse().map(DayFilter::Only)
    }
}

impl Display for City {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl Display for MonthFilter {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            MonthFilter::All => write!(f, "{}", ALL),
            MonthFilter::Only(month) => write!(f, "{}", month.name()),
        }
    }
}

impl Display for DayFilter {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            DayFilter::All => write!(f, "{}", ALL),
            DayFilter::Only(day) => write!(f, "{}", day.name()),
        }
    }
}

impl Display for FilterCriteria {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "city: {}, month/s: {} and day/s: {}", self.city, self.month, self.day)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_city() {
        assert_eq!("Chicago".parse::<City>(), Ok(City::Chicago));
        assert_eq!("  NEW YORK CITY ".parse::<City>(), Ok(City::NewYorkCity));
        assert_eq!("washington".parse::<City>(), Ok(City::Washington));

        let err = "boston".parse::<City>().unwrap_err();
        assert_eq!(err.kind, "city");
        assert_eq!(err.input, "boston");
    }

    #[test]
    fn test_parse_month_filter() {
        assert_eq!("all".parse::<MonthFilter>(), Ok(MonthFilter::All));
        assert_eq!("ALL".parse::<MonthFilter>(), Ok(MonthFilter::All));
        assert_eq!("March".parse::<MonthFilter>(), Ok(MonthFilter::Only(Month::March)));
        assert_eq!("june".parse::<MonthFilter>(), Ok(MonthFilter::Only(Month::June)));
        // Datasets only cover january to june
        assert!("july".parse::<MonthFilter>().is_err());
        assert!("december".parse::<MonthFilter>().is_err());
        assert!("".parse::<MonthFilter>().is_err());
    }

    #[test]
    fn test_parse_day_filter() {
        assert_eq!("all".parse::<DayFilter>(), Ok(DayFilter::All));
        assert_eq!("Sunday".parse::<DayFilter>(), Ok(DayFilter::Only(Day::Sunday)));
        assert!("sun".parse::<DayFilter>().is_err());
        assert!("someday".parse::<DayFilter>().is_err());
    }

    #[test]
    fn test_month_numbers_follow_calendar_order() {
        let numbers: Vec<u32> = Month::ALL.iter().map(Month::number).collect();
        assert_eq!(numbers, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_day_from_weekday() {
        assert_eq!(Day::from(chrono::Weekday::Mon), Day::Monday);
        assert_eq!(Day::from(chrono::Weekday::Sun), Day::Sunday);
    }

    #[test]
    fn test_display_criteria() {
        let criteria = FilterCriteria {
            city: City::NewYorkCity,
            month: MonthFilter::Only(Month::May),
            day: DayFilter::All,
        };
        assert_eq!(criteria.to_string(), "city: new york city, month/s: may and day/s: all");
        assert_eq!(MonthFilter::choices(), "january, february, march, april, may, june, all");
    }
}
