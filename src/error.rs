//! Error types for loading help maps.

use std::fmt;

use thiserror::Error;

/// Result type for help-map operations.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// A record violates the `{ appname, appid, path }` schema.
    #[error("malformed help entry at record {index}: {reason}")]
    MalformedData { index: usize, reason: MalformedReason },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The source is not a JSON array of records (after unwrapping).
    #[error("unable to parse help map: {0}")]
    Parse(#[from] serde_json::Error),

    /// An AMD-wrapped source with no `[...]` payload.
    #[error("help map module contains no record array")]
    MissingArray,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MalformedReason {
    NotAnObject,
    MissingField(&'static str),
    NotAString(&'static str),
    EmptyField(&'static str),
}

impl fmt::Display for MalformedReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotAnObject => write!(f, "record is not an object"),
            Self::MissingField(field) => write!(f, "missing '{field}'"),
            Self::NotAString(field) => write!(f, "'{field}' is not a string"),
            Self::EmptyField(field) => write!(f, "'{field}' is empty"),
        }
    }
}
