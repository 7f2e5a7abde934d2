use crate::prompt::confirm;
use common::types::trip::TripTable;
use polars::frame::DataFrame;
use std::io;
use std::io::{BufRead, Write};

pub(crate) const PAGE_SIZE: usize = 5;

/// Consecutive slices of [`PAGE_SIZE`] trips
pub(crate) struct RawDataPager {
    trips: DataFrame,
    offset: usize,
}

impl RawDataPager {
    pub(crate) fn new(table: &TripTable) -> Self {
        Self { trips: table.frame().clone(), offset: 0 }
    }

    pub(crate) fn next_page(&mut self) -> Option<DataFrame> {
        if self.offset >= self.trips.height() {
            return None;
        }

        let page = self.trips.slice(self.offset as i64, PAGE_SIZE);
        self.offset += page.height();
        Some(page)
    }
}

/// Shows the raw trips page by page for as long as the user asks for more.
pub(crate) fn page_through<R: BufRead, W: Write>(
    table: &TripTable,
    input: &mut R,
    output: &mut W,
) -> io::Result<()> {
    let mut pager = RawDataPager::new(table);
    let mut question = "Would you like to view the first five rows of raw data? Enter yes or no.";

    while confirm(input, output, question)? {
        match pager.next_page() {
            Some(page) => writeln!(output, "{}", page)?,
            None => {
                writeln!(output, "There is no more raw data to show.")?;
                break;
            }
        }
        question = "Would you like to view the next five rows? Enter yes or no.";
    }

    Ok(())
}
