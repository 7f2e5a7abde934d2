use common::types::errors::InvalidFilterInput;
use common::types::filter::{City, DayFilter, FilterCriteria, MonthFilter};
use log::debug;
use std::io;
use std::io::{BufRead, Write};
use std::str::FromStr;

pub(crate) const RULE_WIDTH: usize = 65;

/// Asks for city, month and day until each answer is valid, then echoes the selection.
///
/// Returns `None` if the input ends before all three are known.
pub(crate) fn select_filters<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> io::Result<Option<FilterCriteria>> {
    writeln!(output, "{}", "=".repeat(RULE_WIDTH))?;
    writeln!(output, "Hello! Welcome to explore some US bikeshare data!")?;
    writeln!(output, "{}", "=".repeat(RULE_WIDTH))?;

    let Some(city) = ask::<City, _, _>(
        input, output,
        &format!("Please enter city ({}):", City::choices()),
    )? else {
        return Ok(None);
    };
    let Some(month) = ask::<MonthFilter, _, _>(
        input, output,
        &format!("Please enter the month ({}) you're seeking data for:", MonthFilter::choices()),
    )? else {
        return Ok(None);
    };
    let Some(day) = ask::<DayFilter, _, _>(
        input, output,
        &format!("Please enter a day of the week ({}) you're seeking data for:", DayFilter::choices()),
    )? else {
        return Ok(None);
    };

    let criteria = FilterCriteria { city, month, day };
    writeln!(output)?;
    writeln!(output, "You have chosen: {}.", criteria.to_string().to_uppercase())?;
    writeln!(output, "{}", "-".repeat(RULE_WIDTH))?;

    Ok(Some(criteria))
}

/// Repeats `question` until the answer parses. `None` once the input is exhausted.
fn ask<T, R, W>(input: &mut R, output: &mut W, question: &str) -> io::Result<Option<T>>
where
    T: FromStr<Err = InvalidFilterInput>,
    R: BufRead,
    W: Write,
{
    loop {
        writeln!(output)?;
        writeln!(output, "{}", question)?;
        output.flush()?;

        let Some(answer) = read_answer(input)? else {
            return Ok(None);
        };

        match answer.parse::<T>() {
            Ok(value) => return Ok(Some(value)),
            Err(err) => {
                debug!(target: "session", "Rejected filter input: {}", err);
                writeln!(output)?;
                writeln!(output, "Invalid input. Please try again in the accepted input format.")?;
            }
        }
    }
}

/// Asks a yes/no question. Anything but "yes" (case-insensitive) is a no, so is the end of input.
pub(crate) fn confirm<R: BufRead, W: Write>(input: &mut R, output: &mut W, question: &str) -> io::Result<bool> {
    writeln!(output)?;
    writeln!(output, "{}", question)?;
    output.flush()?;

    Ok(read_answer(input)?.is_some_and(|answer| answer.trim().eq_ignore_ascii_case("yes")))
}

fn read_answer<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
