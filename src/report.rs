use statistics::user::Counts;
use statistics::{DurationStats, StationStats, TimeStats, UserStats};
use std::io;
use std::io::Write;

pub(crate) const SECTION_RULE_WIDTH: usize = 40;

pub(crate) fn write_time_stats<W: Write>(output: &mut W, stats: &TimeStats) -> io::Result<()> {
    writeln!(output)?;
    writeln!(output, "The Most Frequent Times of Travel")?;
    writeln!(output)?;
    writeln!(output, "Most Popular Month     : {}", stats.popular_month)?;
    writeln!(output, "Most Popular Day       : {}", stats.popular_day)?;
    writeln!(output, "Most Popular Start Hour: {}", stats.popular_hour)?;
    section_end(output)
}

pub(crate) fn write_station_stats<W: Write>(output: &mut W, stats: &StationStats) -> io::Result<()> {
    let (start, end) = &stats.common_trip;

    writeln!(output)?;
    writeln!(output, "The Most Popular Stations and Trip")?;
    writeln!(output)?;
    writeln!(output, "The most commonly used start station: {}", stats.common_start_station)?;
    writeln!(output, "The most commonly used end station  : {}", stats.common_end_station)?;
    writeln!(output, "The most frequent combination of start station and end station: {} -> {}", start, end)?;
    section_end(output)
}

pub(crate) fn write_duration_stats<W: Write>(output: &mut W, stats: &DurationStats) -> io::Result<()> {
    writeln!(output)?;
    writeln!(output, "Trip Duration")?;
    writeln!(output)?;
    writeln!(output, "Passengers travelled a total of {}", stats.total_parts())?;
    writeln!(output, "The mean travel time for passengers is {}", stats.mean_parts())?;
    section_end(output)
}

pub(crate) fn write_user_stats<W: Write>(output: &mut W, stats: &UserStats) -> io::Result<()> {
    writeln!(output)?;
    writeln!(output, "User Stats")?;
    writeln!(output)?;
    writeln!(output, "The count of user types from the given data is:")?;
    write_counts(output, &stats.user_types)?;

    writeln!(output)?;
    match &stats.genders {
        Some(genders) => {
            writeln!(output, "The count of gender from the given data is:")?;
            write_counts(output, genders)?;
        }
        None => writeln!(output, "There is no 'Gender' column in this file.")?,
    }

    writeln!(output)?;
    match &stats.birth_years {
        // Birth years are whole numbers in practice, fractions only come from the float storage
        Some(years) => {
            writeln!(output, "Earliest birth year from the given data is   : {}", years.earliest as i64)?;
            writeln!(output, "Most recent birth year from the given data is: {}", years.most_recent as i64)?;
            writeln!(output, "Most common birth year from the given data is: {}", years.most_common as i64)?;
        }
        None => writeln!(output, "There are no birth year details in this file.")?,
    }
    section_end(output)
}

fn write_counts<W: Write>(output: &mut W, counts: &Counts) -> io::Result<()> {
    let width = counts.iter().map(|(value, _)| value.chars().count()).max().unwrap_or(0);
    for (value, count) in counts {
        writeln!(output, "  {:<width$}  {}", value, count, width = width)?;
    }
    Ok(())
}

pub(crate) fn section_end<W: Write>(output: &mut W) -> io::Result<()> {
    writeln!(output, "{}", "-".repeat(SECTION_RULE_WIDTH))
}
