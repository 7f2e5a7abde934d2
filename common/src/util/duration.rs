use std::fmt;
use std::fmt::{Display, Formatter};

pub const SECONDS_PER_MINUTE: f64 = 60.0;
pub const SECONDS_PER_HOUR: f64 = 3_600.0;
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// A duration in seconds split into days, hours, minutes and seconds for display.
///
/// Hours wrap at 24 and carry into days. Seconds keep their fraction; only [`Display`] rounds
/// them (half away from zero).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DurationParts {
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: f64,
}

impl DurationParts {
    /// Negative and non-finite durations are treated as zero
    pub fn from_seconds(seconds: f64) -> Self {
        let total = if seconds.is_finite() { seconds.max(0.0) } else { 0.0 };

        Self {
            days: (total / SECONDS_PER_DAY).floor() as u64,
            hours: (total / SECONDS_PER_HOUR).floor() as u64 % 24,
            minutes: (total / SECONDS_PER_MINUTE).floor() as u64 % 60,
            seconds: total % SECONDS_PER_MINUTE,
        }
    }
}

impl Display for DurationParts {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f, "{} days, {} hours, {} minutes and {} seconds",
            self.days, self.hours, self.minutes, self.seconds.round() as u64
        )
    }
}
