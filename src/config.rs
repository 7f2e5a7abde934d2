use common::types::config::{CitySources, Config};
use log::{debug, info};
use std::fmt::{Display, Formatter};
use std::fs::File;
use std::path::Path;
use crate::bootstrap_config::BootstrapConfig;

/// Builds the city to file mapping from the optional config file and the bootstrap settings.
/// Without a config file, every city uses its default file in the data directory.
pub(super) fn load_config(bootstrap_config: &BootstrapConfig) -> Result<CitySources, ConfigError> {
    let path: &Path = Path::new(&bootstrap_config.config_file);

    if !path.exists() {
        debug!(target: "main", "No config file at '{path:?}', using default city files");
        return Ok(CitySources::new(bootstrap_config.data_dir.clone(), Default::default()));
    }

    let config_file = File::open(path)?;
    let config: Config = serde_yml::from_reader(config_file)?;

    info!(target: "main", "Config read successfully from '{path:?}'");

    match config {
        Config::Version1 { data_dir, cities } => Ok(CitySources::new(
            data_dir.unwrap_or_else(|| bootstrap_config.data_dir.clone()),
            cities,
        )),
    }
}

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    IO(#[from] std::io::Error),
    Yaml(#[from] serde_yml::Error),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IO(err) => write!(f, "{}", err),
            ConfigError::Yaml(err) => write!(f, "Invalid config file: {}", err),
        }
    }
}
