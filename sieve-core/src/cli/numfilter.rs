use crate::pipeline::{
    CountObserver, FileReader, FilterError, FilterFactory, FilterSelector, NumberProcessor,
    PrintObserver, RunSummary,
};
use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use thiserror::Error;

pub const FILTER_HINT: &str = "Available filters: EVEN, ODD, GT<n>";

#[derive(Parser, Debug)]
#[command(
    name = "numfilter",
    version,
    about = "Filter whitespace separated integers read from a file",
    after_help = FILTER_HINT
)]
pub struct NumFilterArgs {
    /// Filter to apply: EVEN, ODD or GT<n> (e.g. GT5)
    pub filter: FilterSelector,

    /// Text file of whitespace separated integers
    pub file: PathBuf,

    /// Emit diagnostics as JSON
    #[arg(long)]
    pub log_json: bool,

    /// Anything after the file is ignored
    #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
    pub ignored: Vec<String>,
}

#[derive(Debug, Error)]
pub enum NumFilterError {
    /// The filter could not be built; nothing was read.
    #[error(transparent)]
    Config(#[from] FilterError),

    /// The run was aborted; no observer was notified.
    #[error("{0:#}")]
    Run(anyhow::Error),
}

impl NumFilterError {
    pub fn exit_code(&self) -> u8 {
        1
    }

    /// Prints the error the way the command line reports it.
    pub fn report(&self) {
        match self {
            NumFilterError::Config(e) => {
                eprintln!("Error: {e}");
                eprintln!("{FILTER_HINT}");
            }
            NumFilterError::Run(e) => eprintln!("Error: {e:#}"),
        }
    }
}

/// Builds the filter, then streams the file through a print observer and a
/// count observer on stdout.
pub fn run(args: &NumFilterArgs) -> Result<RunSummary, NumFilterError> {
    let filter = FilterFactory::new().create_from_selector(&args.filter)?;

    let mut processor = NumberProcessor::new(Box::new(FileReader), filter)
        .with_observer(Box::new(PrintObserver::stdout()))
        .with_observer(Box::new(CountObserver::stdout()));

    processor
        .run(&args.file)
        .context("error during processing")
        .map_err(NumFilterError::Run)
}
