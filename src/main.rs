pub mod bootstrap_config;
mod config;
mod pager;
mod prompt;
mod report;
mod session;

use crate::config::load_config;
use bootstrap_config::BootstrapConfig;
use common::util::logging;
use data_loader::LoadError;
use log::{debug, error};
use std::fmt::{Display, Formatter};
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    match run().inspect_err(|err| error!(target: "main", "{}", err)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(_) => ExitCode::FAILURE,
    }
}

fn run() -> Result<(), BikeshareError> {
    let bootstrap_config = BootstrapConfig::read();

    if let Err(err) = logging::initialize_logging(bootstrap_config.log_level.clone().into()) {
        eprintln!("Logging is unavailable: {}", err);
    }
    print_startup_message();

    let sources = load_config(&bootstrap_config)?;
    debug!(target: "main", "Reading trip data from {:?}", sources.data_dir());

    let mut output = io::stdout().lock();
    match bootstrap_config.filters() {
        Some(criteria) => session::run_once(&sources, criteria, &mut output),
        None => session::run_interactive(&sources, &mut io::stdin().lock(), &mut output),
    }
}

fn print_startup_message() {
    debug!(target: "main", "bikeshare {}", env!("CARGO_PKG_VERSION"));
}

#[derive(thiserror::Error, Debug)]
pub enum BikeshareError {
    Config(#[from] config::ConfigError),
    Load(#[from] LoadError),
    IO(#[from] io::Error),
}

impl Display for BikeshareError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let err: &dyn Display = match self {
            BikeshareError::Config(err) => err,
            BikeshareError::Load(err) => err,
            BikeshareError::IO(err) => err,
        };
        let prefix = match self {
            BikeshareError::Config(_) => "Reading config file",
            BikeshareError::Load(_) => "Loading trip data",
            BikeshareError::IO(_) => "Error during IO",
        };
        write!(f, "{}: {}", prefix, err)
    }
}
