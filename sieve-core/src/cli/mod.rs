pub mod logdemo;
pub mod numfilter;

use clap::Parser;
use clap::error::ErrorKind;

/// Parses the process arguments, exiting with status 1 on bad usage.
///
/// `--help` and `--version` still exit successfully.
pub fn parse_or_exit<P: Parser>(hint: Option<&str>) -> P {
    match P::try_parse() {
        Ok(args) => args,
        Err(err) => match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => err.exit(),
            _ => {
                let _ = err.print();
                if let Some(hint) = hint {
                    eprintln!("{hint}");
                }
                std::process::exit(1);
            }
        },
    }
}
