use common::types::config::CitySources;
use common::types::filter::City;
use std::fmt;
use std::fmt::Display;
use std::path::PathBuf;

/// Resolves the CSV file of `city` and makes sure it exists.
pub fn locate_source(
    sources: &CitySources,
    city: City,
) -> Result<PathBuf, LocateError> {
    let path = sources.path_for(city);

    if !path.is_file() {
        return Err(LocateError::MissingFile(path));
    }

    Ok(path)
}

#[derive(thiserror::Error, Debug)]
pub enum LocateError {
    MissingFile(PathBuf),
}

impl Display for LocateError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            LocateError::MissingFile(path) => write!(f, "No trip data found at '{}'", path.display()),
        }
    }
}
