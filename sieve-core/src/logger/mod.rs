//! Switchable log output.
//!
//! A [`Logger`] owns exactly one [`LogSink`] at a time. It is built once at
//! startup, handed to whatever needs to log, and dropped (closing any open
//! log file) at shutdown. Switching sinks builds the new sink first, then
//! releases the old one; the old sink is never used again.
//!
//! Records are formatted as `[file:function:line] message`. Use
//! [`log_at!`](crate::log_at) to fill in the location automatically.
//!
//! Diagnostics about the logger itself (unknown sink names, failed writes)
//! go through `tracing`, never through the active sink.

pub mod call_site;
pub mod errors;
pub mod sink;

pub use call_site::CallSite;
pub use errors::{SinkError, SinkKindError};
pub use sink::{ConsoleSink, FileSink, LogSink, NullSink, SinkKind};

use std::path::PathBuf;
use tracing::{debug, error, info, warn};

pub const DEFAULT_LOG_FILE: &str = "app.log";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggerConfig {
    /// Backing file for [`SinkKind::File`]. Opened in append mode, never truncated.
    pub file_path: PathBuf,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            file_path: PathBuf::from(DEFAULT_LOG_FILE),
        }
    }
}

pub struct Logger {
    config: LoggerConfig,
    sink: Box<dyn LogSink>,
}

impl Logger {
    /// A logger writing to the console.
    pub fn new(config: LoggerConfig) -> Self {
        Self::with_sink(config, Box::new(ConsoleSink::stdout()))
    }

    pub fn with_sink(config: LoggerConfig, sink: Box<dyn LogSink>) -> Self {
        Self { config, sink }
    }

    pub fn config(&self) -> &LoggerConfig {
        &self.config
    }

    pub fn current_kind(&self) -> SinkKind {
        self.sink.kind()
    }

    pub fn set_sink(&mut self, kind: SinkKind) {
        let next: Box<dyn LogSink> = match kind {
            SinkKind::Console => Box::new(ConsoleSink::stdout()),
            SinkKind::File => Box::new(FileSink::open(&self.config.file_path)),
            SinkKind::None => Box::new(NullSink),
        };
        self.replace_sink(next);
    }

    /// Installs an already built sink, releasing the previous one.
    pub fn replace_sink(&mut self, sink: Box<dyn LogSink>) {
        let previous = std::mem::replace(&mut self.sink, sink);
        let from = previous.kind();
        drop(previous);

        info!(from = %from, to = %self.sink.kind(), "log sink switched");
    }

    /// Switches to the sink named by `name`.
    ///
    /// An unrecognised name is reported and the current sink stays active.
    pub fn select_sink(&mut self, name: &str) -> Result<SinkKind, SinkKindError> {
        match name.parse::<SinkKind>() {
            Ok(kind) => {
                self.set_sink(kind);
                Ok(kind)
            }
            Err(e) => {
                warn!(
                    requested = name,
                    current = %self.current_kind(),
                    "unknown sink type, previous sink remains"
                );
                Err(e)
            }
        }
    }

    pub fn log(&mut self, message: &str, site: CallSite) {
        let line = format_record(message, site);

        if let Err(e) = self.sink.write(&line) {
            error!(sink = %self.sink.kind(), error = %e, "failed to write log record");
        }
    }

    /// Releases the active sink, closing its file if it has one.
    pub fn shutdown(self) {
        debug!(sink = %self.sink.kind(), "logger shut down");
    }
}

pub fn format_record(message: &str, site: CallSite) -> String {
    format!("[{site}] {message}")
}
