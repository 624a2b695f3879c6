use super::errors::{SinkError, SinkKindError};
use std::fmt;
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::error;

/// Which kind of sink is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SinkKind {
    Console,
    File,
    None,
}

impl SinkKind {
    pub fn as_str(self) -> &'static str {
        match self {
            SinkKind::Console => "console",
            SinkKind::File => "file",
            SinkKind::None => "none",
        }
    }
}

impl fmt::Display for SinkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SinkKind {
    type Err = SinkKindError;

    /// Case-insensitive: `console`, `file` or `none`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "console" => Ok(SinkKind::Console),
            "file" => Ok(SinkKind::File),
            "none" => Ok(SinkKind::None),
            _ => Err(SinkKindError {
                name: s.to_string(),
            }),
        }
    }
}

/// A destination for formatted log lines.
pub trait LogSink: Send {
    fn kind(&self) -> SinkKind;

    fn write(&mut self, line: &str) -> Result<(), SinkError>;
}

/// Writes each line to standard output (or any injected writer).
pub struct ConsoleSink {
    out: Box<dyn Write + Send>,
}

impl ConsoleSink {
    pub fn stdout() -> Self {
        Self::with_writer(Box::new(io::stdout()))
    }

    pub fn with_writer(out: Box<dyn Write + Send>) -> Self {
        Self { out }
    }
}

impl LogSink for ConsoleSink {
    fn kind(&self) -> SinkKind {
        SinkKind::Console
    }

    fn write(&mut self, line: &str) -> Result<(), SinkError> {
        writeln!(self.out, "{line}")
            .and_then(|_| self.out.flush())
            .map_err(|source| SinkError::Console { source })
    }
}

/// Appends each line to a file opened once, when the sink is built.
///
/// If the open fails the sink stays usable: every write reports
/// [`SinkError::NotOpen`] instead of writing.
pub struct FileSink {
    path: PathBuf,
    file: Option<File>,
}

impl FileSink {
    pub fn open(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let file = match OpenOptions::new().create(true).append(true).open(&path) {
            Ok(file) => Some(file),
            Err(e) => {
                error!(path = %path.display(), error = %e, "error opening log file for writing");
                None
            }
        };

        Self { path, file }
    }

    #[cfg(test)]
    fn is_open(&self) -> bool {
        self.file.is_some()
    }
}

impl LogSink for FileSink {
    fn kind(&self) -> SinkKind {
        SinkKind::File
    }

    fn write(&mut self, line: &str) -> Result<(), SinkError> {
        let Some(file) = self.file.as_mut() else {
            return Err(SinkError::NotOpen {
                path: self.path.clone(),
            });
        };

        writeln!(file, "{line}").map_err(|source| SinkError::Write {
            path: self.path.clone(),
            source,
        })
    }
}

/// Swallows everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl LogSink for NullSink {
    fn kind(&self) -> SinkKind {
        SinkKind::None
    }

    fn write(&mut self, _line: &str) -> Result<(), SinkError> {
        Ok(())
    }
}
