use std::io;
use tracing_subscriber::{EnvFilter, fmt};

/// Initialize diagnostics output for the command line tools.
///
/// Diagnostics (per-token warnings, run failures, summaries) always go to
/// standard error so they never interleave with program results on stdout.
/// - Uses `RUST_LOG` for filtering (defaults to "warn" if not set)
/// - `LogMode::Json` emits flattened JSON events, `LogMode::Pretty` compact lines
pub fn init_logging(mode: LogMode) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    match mode {
        LogMode::Json => fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .json()
            .flatten_event(true)
            .init(),
        LogMode::Pretty => fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .without_time()
            .compact()
            .init(),
    }
}

pub fn log_mode(json: bool) -> LogMode {
    if json { LogMode::Json } else { LogMode::Pretty }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogMode {
    Pretty,
    Json,
}
