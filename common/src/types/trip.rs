use polars::prelude::{col, lit, DataFrame, DataType, Expr, LazyFrame, StrptimeOptions, TimeUnit};

// Columns of the city CSV files
pub const START_TIME: &str = "Start Time";
pub const TRIP_DURATION: &str = "Trip Duration";
pub const START_STATION: &str = "Start Station";
pub const END_STATION: &str = "End Station";
pub const USER_TYPE: &str = "User Type";
pub const GENDER: &str = "Gender";
pub const BIRTH_YEAR: &str = "Birth Year";

// Columns derived from `START_TIME` at load time
pub const MONTH: &str = "month";
pub const DAY_OF_WEEK: &str = "day_of_week";

pub const START_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Every city's dataset has these. Anything else is optional.
pub const REQUIRED_COLUMNS: [&str; 5] = [START_TIME, TRIP_DURATION, START_STATION, END_STATION, USER_TYPE];

/// Columns only some cities record (e.g. washington has neither)
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum OptionalColumn {
    Gender,
    BirthYear,
}

impl OptionalColumn {
    pub fn name(&self) -> &'static str {
        match self {
            OptionalColumn::Gender => GENDER,
            OptionalColumn::BirthYear => BIRTH_YEAR,
        }
    }
}

/// The trips of one city after loading and filtering.
///
/// `Start Time` holds parsed timestamps and the `month` (1-12) and `day_of_week` (lowercase
/// weekday name) columns are always derived from it.
#[derive(Debug, Clone)]
pub struct TripTable(DataFrame);

impl TripTable {
    /// Wraps a frame that already went through [`derive_calendar_fields`]
    pub fn new(frame: DataFrame) -> Self {
        Self(frame)
    }

    pub fn frame(&self) -> &DataFrame {
        &self.0
    }

    pub fn into_frame(self) -> DataFrame {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.height()
    }

    pub fn is_empty(&self) -> bool {
        self.0.height() == 0
    }

    pub fn has_column(&self, column: OptionalColumn) -> bool {
        self.0.get_column_index(column.name()).is_some()
    }
}

/// Parses `Start Time` and adds the `month` and `day_of_week` columns. A timestamp that does not
/// match [`START_TIME_FORMAT`] makes the frame fail on collect.
pub fn derive_calendar_fields(trips: LazyFrame) -> LazyFrame {
    trips
        .with_column(parse_start_time())
        .with_columns([
            col(START_TIME).dt().month().cast(DataType::UInt32).alias(MONTH),
            col(START_TIME).dt().to_string("%A").str().to_lowercase().alias(DAY_OF_WEEK),
        ])
}

fn parse_start_time() -> Expr {
    col(START_TIME)
        .str()
        .to_datetime(
            Some(TimeUnit::Microseconds),
            None,
            StrptimeOptions {
                format: Some(START_TIME_FORMAT.into()),
                ..Default::default()
            },
            lit("raise"),
        )
        .alias(START_TIME)
}
