use std::fmt;
use std::fmt::Formatter;

/// A filter value (city, month or day) that is not part of the accepted set.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub struct InvalidFilterInput {
    pub kind: &'static str,
    pub input: String,
}

impl fmt::Display for InvalidFilterInput {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "'{}' is not a valid {}", self.input, self.kind)
    }
}
