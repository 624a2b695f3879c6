use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, PartialEq, Eq, Error)]
#[error("unknown sink type '{name}'")]
pub struct SinkKindError {
    pub name: String,
}

/// A failed write on a sink. Reported, never propagated past `Logger::log`.
#[derive(Debug, Error)]
pub enum SinkError {
    #[error("error writing log line to console: {source}")]
    Console {
        #[source]
        source: std::io::Error,
    },

    #[error("log file {path} is not open")]
    NotOpen { path: PathBuf },

    #[error("error writing to log file {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
