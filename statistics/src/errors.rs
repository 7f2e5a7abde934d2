use polars::error::PolarsError;
use std::fmt;
use std::fmt::{Display, Formatter};

#[derive(thiserror::Error, Debug)]
pub enum StatisticsError {
    /// The (filtered) table has no trips at all
    EmptyDataset,
    /// A column the statistic needs only holds nulls
    NoValues(&'static str),
    Polars(#[from] PolarsError),
}

impl Display for StatisticsError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            StatisticsError::EmptyDataset => write!(f, "No trips match the selected filters"),
            StatisticsError::NoValues(column) => write!(f, "Column '{}' has no values", column),
            StatisticsError::Polars(err) => write!(f, "{}", err),
        }
    }
}
