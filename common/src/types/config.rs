use crate::types::filter::City;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
#[serde(tag = "version")]
pub enum Config {
    #[serde(rename = "1")]
    Version1 {
        #[serde(default)]
        data_dir: Option<PathBuf>,
        #[serde(default)]
        cities: HashMap<City, PathBuf>,
    }
}

/// Immutable mapping from city to the CSV file holding its trips.
#[derive(Debug, Clone)]
pub struct CitySources {
    data_dir: PathBuf,
    files: HashMap<City, PathBuf>,
}

impl CitySources {
    /// Cities without an entry in `files` fall back to their default file name. Relative paths
    /// are resolved against `data_dir`.
    pub fn new(data_dir: PathBuf, files: HashMap<City, PathBuf>) -> Self {
        Self { data_dir, files }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn path_for(&self, city: City) -> PathBuf {
        match self.files.get(&city) {
            Some(file) => self.data_dir.join(file),
            None => self.data_dir.join(city.default_file_name()),
        }
    }
}
