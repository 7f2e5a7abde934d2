use crate::StatisticsError;
use polars::error::PolarsResult;
use polars::frame::DataFrame;
use polars::prelude::{col, len, lit, Expr, IntoLazy, SortMultipleOptions};

/// Name of the count column produced by [`value_counts`]
pub(crate) const TRIPS: &str = "trips";

/// Counts the rows per distinct combination of `keys`.
///
/// Rows with a null in any key are ignored. The result is ordered by count (descending), then by
/// the keys (ascending), so the first row is the mode and ties go to the lowest value.
pub(crate) fn value_counts(frame: &DataFrame, keys: &[&str]) -> PolarsResult<DataFrame> {
    let key_exprs: Vec<Expr> = keys.iter().map(|key| col(*key)).collect();
    let no_nulls = key_exprs.iter()
        .map(|key| key.clone().is_not_null())
        .reduce(|acc, predicate| acc.and(predicate))
        .unwrap_or(lit(true));

    let sort_by: Vec<Expr> = std::iter::once(col(TRIPS)).chain(key_exprs.iter().cloned()).collect();
    let descending: Vec<bool> = std::iter::once(true).chain(keys.iter().map(|_| false)).collect();

    frame.clone().lazy()
        .filter(no_nulls)
        .group_by(key_exprs)
        .agg([len().alias(TRIPS)])
        .sort_by_exprs(sort_by, SortMultipleOptions::default().with_order_descending_multi(descending))
        .collect()
}

/// The mode of `column`, read with `read`. See [`value_counts`] for null handling and ties.
pub(crate) fn most_frequent<T>(
    frame: &DataFrame,
    column: &'static str,
    read: fn(&DataFrame, &str, usize) -> PolarsResult<Option<T>>,
) -> Result<T, StatisticsError> {
    let counts = value_counts(frame, &[column])?;
    if counts.height() == 0 {
        return Err(StatisticsError::NoValues(column));
    }

    read(&counts, column, 0)?.ok_or(StatisticsError::NoValues(column))
}
