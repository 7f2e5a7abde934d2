use common::types::filter::{City, DayFilter, FilterCriteria, MonthFilter};
use log::LevelFilter;
use clap::Parser;
use std::path::PathBuf;

/// Explore US bikeshare trip data
#[derive(Parser, Clone)]
#[command(version, about)]
pub struct BootstrapConfig {
    #[clap(short('c'), long("config"), env("BIKESHARE_CONFIG"), default_value_os = "bikeshare.yaml")]
    pub config_file: String,
    /// Directory holding the city CSV files, unless the config file names one
    #[clap(short('d'), long("data-dir"), env("BIKESHARE_DATA_DIR"), default_value_os = ".")]
    pub data_dir: PathBuf,
    #[clap(short('l'), long("log-level"), env("BIKESHARE_LOG_LEVEL"), default_value_t, value_enum)]
    pub log_level: LogLevel,
    /// Explore this city once without prompting (chicago, new york city, washington)
    #[clap(long)]
    pub city: Option<City>,
    /// Month to filter by when running without prompts (january..june or all)
    #[clap(long, requires("city"))]
    pub month: Option<MonthFilter>,
    /// Day of week to filter by when running without prompts (monday..sunday or all)
    #[clap(long, requires("city"))]
    pub day: Option<DayFilter>,
}

impl BootstrapConfig {
    pub fn read() -> Self {
        BootstrapConfig::parse()
    }

    /// The filters given on the command line, if the session should not prompt for them
    pub fn filters(&self) -> Option<FilterCriteria> {
        self.city.map(|city| FilterCriteria {
            city,
            month: self.month.unwrap_or(MonthFilter::All),
            day: self.day.unwrap_or(DayFilter::All),
        })
    }
}


#[derive(clap::ValueEnum, Clone, Default)]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(value: LogLevel) -> Self {
        match value {
            LogLevel::Off => Self::Off,
            LogLevel::Error => Self::Error,
            LogLevel::Warn => Self::Warn,
            LogLevel::Info => Self::Info,
            LogLevel::Debug => Self::Debug,
            LogLevel::Trace => Self::Trace,
        }
    }
}
