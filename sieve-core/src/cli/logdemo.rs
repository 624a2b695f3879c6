use crate::log_at;
use crate::logger::{DEFAULT_LOG_FILE, Logger, LoggerConfig, SinkKind};
use clap::Parser;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(
    name = "logdemo",
    version,
    about = "Log a few messages while switching between console, file and no output"
)]
pub struct LogDemoArgs {
    /// Initial sink: console, file or none (anything else means console)
    pub sink: Option<String>,

    /// File appended to while the file sink is active
    #[arg(long, default_value = DEFAULT_LOG_FILE)]
    pub log_file: PathBuf,

    /// Emit diagnostics as JSON
    #[arg(long)]
    pub log_json: bool,

    /// Anything after the sink is ignored
    #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
    pub ignored: Vec<String>,
}

/// Resolves the command line sink, falling back to the console for a
/// missing or unrecognised name.
pub fn initial_sink(arg: Option<&str>) -> SinkKind {
    arg.and_then(|name| name.parse().ok())
        .unwrap_or(SinkKind::Console)
}

pub fn announcement(kind: SinkKind, file: &Path) -> String {
    match kind {
        SinkKind::Console => "Logging redirected to console.".to_string(),
        SinkKind::File => format!("Logging redirected to file {}.", file.display()),
        SinkKind::None => "Logging disabled.".to_string(),
    }
}

pub fn run(args: LogDemoArgs) -> io::Result<()> {
    let mut stdout = io::stdout();

    match &args.sink {
        Some(arg) => writeln!(stdout, "Command line argument received: {arg}")?,
        None => writeln!(
            stdout,
            "No command line argument provided. Using default console output."
        )?,
    }

    let initial = initial_sink(args.sink.as_deref());
    let mut logger = Logger::new(LoggerConfig {
        file_path: args.log_file,
    });

    run_script(&mut logger, initial, &mut stdout)?;
    logger.shutdown();

    writeln!(stdout, "Program finished.")
}

/// Logs through every sink kind in turn, announcing each switch on `out`.
pub fn run_script<W: Write>(
    logger: &mut Logger,
    initial: SinkKind,
    out: &mut W,
) -> io::Result<()> {
    switch_sink(logger, initial, out)?;
    log_at!(logger, "First test message.");
    log_at!(logger, "Second test message.");

    switch_sink(logger, SinkKind::File, out)?;
    log_at!(logger, "Message to file.");

    switch_sink(logger, SinkKind::None, out)?;
    log_at!(logger, "This message should go nowhere.");

    switch_sink(logger, SinkKind::Console, out)?;
    log_at!(logger, "Back to console output.");

    Ok(())
}

fn switch_sink<W: Write>(logger: &mut Logger, kind: SinkKind, out: &mut W) -> io::Result<()> {
    logger.set_sink(kind);
    writeln!(out, "{}", announcement(kind, &logger.config().file_path))
}
