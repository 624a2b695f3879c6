use std::num::{IntErrorKind, ParseIntError};
use std::path::PathBuf;
use thiserror::Error;

/// Why a single token in an input file was skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TokenError {
    #[error("invalid number")]
    Invalid,

    #[error("number out of range")]
    OutOfRange,
}

impl From<&ParseIntError> for TokenError {
    fn from(err: &ParseIntError) -> Self {
        match err.kind() {
            IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => TokenError::OutOfRange,
            _ => TokenError::Invalid,
        }
    }
}

/// Fatal reader failure. Aborts the whole run.
///
/// The I/O cause is only reachable through `source()`; render with `{:#}`
/// through `anyhow` to see the full chain.
#[derive(Debug, Error)]
pub enum ReadError {
    #[error("could not open file {path}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed reading file {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, PartialEq, Eq, Error)]
pub enum FilterError {
    #[error("unknown filter type: {name}")]
    UnknownType { name: String },

    #[error("invalid argument for {filter} filter: '{arg}'")]
    InvalidArgument { filter: String, arg: String },

    #[error("argument out of range for {filter} filter: '{arg}'")]
    OutOfRange { filter: String, arg: String },
}
