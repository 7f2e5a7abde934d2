use common::types::filter::{DayFilter, MonthFilter};
use common::types::trip::{DAY_OF_WEEK, MONTH};
use polars::prelude::{col, lit, LazyFrame};

/// Keeps the trips matching both filters. `All` leaves the respective column unconstrained.
pub fn apply_filters(trips: LazyFrame, month: MonthFilter, day: DayFilter) -> LazyFrame {
    let trips = match month {
        MonthFilter::All => trips,
        MonthFilter::Only(month) => trips.filter(col(MONTH).eq(lit(month.number()))),
    };

    match day {
        DayFilter::All => trips,
        DayFilter::Only(day) => trips.filter(col(DAY_OF_WEEK).eq(lit(day.name()))),
    }
}
