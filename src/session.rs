use crate::{pager, prompt, report, BikeshareError};
use common::types::config::CitySources;
use common::types::filter::FilterCriteria;
use common::types::trip::TripTable;
use common::util::logging;
use log::{error, info, warn};
use statistics::StatisticsError;
use std::io;
use std::io::{BufRead, Write};

/// Prompts for filters, explores the selection and offers the raw data, until the user is done.
///
/// A dataset that cannot be loaded is reported and the user gets to pick filters again.
pub(crate) fn run_interactive<R: BufRead, W: Write>(
    sources: &CitySources,
    input: &mut R,
    output: &mut W,
) -> Result<(), BikeshareError> {
    loop {
        let Some(criteria) = prompt::select_filters(input, output)? else {
            info!(target: "session", "No more input, exiting");
            return Ok(());
        };

        match explore(sources, &criteria, output) {
            Ok(table) => pager::page_through(&table, input, output)?,
            Err(BikeshareError::Load(err)) => {
                error!(target: "session", "Could not load trips of {}: {}", criteria.city, err);
            }
            Err(err) => return Err(err),
        }

        if !prompt::confirm(input, output, "Would you like to restart? Enter yes or no.")? {
            return Ok(());
        }
    }
}

/// A single exploration with filters from the command line, without any prompts
pub(crate) fn run_once<W: Write>(
    sources: &CitySources,
    criteria: FilterCriteria,
    output: &mut W,
) -> Result<(), BikeshareError> {
    explore(sources, &criteria, output)?;
    Ok(())
}

/// Loads the trips matching `criteria` and prints all statistics about them. A statistics group
/// that fails is reported in the output; only loading and writing errors are returned.
pub(crate) fn explore<W: Write>(
    sources: &CitySources,
    criteria: &FilterCriteria,
    output: &mut W,
) -> Result<TripTable, BikeshareError> {
    let table = logging::run_with_spinner("loader", "Loading data", || {
        data_loader::load(sources, criteria)
    })?;

    if table.is_empty() {
        warn!(target: "session", "No trips match {}", criteria);
        writeln!(output, "No trips match the selected filters.")?;
        return Ok(table);
    }

    let stats = logging::run_with_spinner("statistics", "Calculating the most frequent times of travel", || {
        statistics::time_stats(&table)
    });
    write_group(output, "time", stats, report::write_time_stats)?;

    let stats = logging::run_with_spinner("statistics", "Calculating the most popular stations and trip", || {
        statistics::station_stats(&table)
    });
    write_group(output, "station", stats, report::write_station_stats)?;

    let stats = logging::run_with_spinner("statistics", "Calculating trip duration", || {
        statistics::duration_stats(&table)
    });
    write_group(output, "trip duration", stats, report::write_duration_stats)?;

    let stats = logging::run_with_spinner("statistics", "Calculating user stats", || {
        statistics::user_stats(&table)
    });
    write_group(output, "user", stats, report::write_user_stats)?;

    output.flush()?;

    Ok(table)
}

/// Writes one group of statistics. A group that could not be calculated is reported in its place,
/// the other groups don't depend on it.
fn write_group<W: Write, T>(
    output: &mut W,
    group: &str,
    stats: Result<T, StatisticsError>,
    write: impl FnOnce(&mut W, &T) -> io::Result<()>,
) -> io::Result<()> {
    match stats {
        Ok(stats) => write(output, &stats),
        Err(err) => {
            error!(target: "session", "Could not calculate {} stats: {}", group, err);
            writeln!(output, "The {} stats could not be calculated: {}", group, err)?;
            report::section_end(output)
        }
    }
}
