use sieve_core::cli::numfilter::{self, FILTER_HINT, NumFilterArgs};
use sieve_core::cli::parse_or_exit;
use sieve_core::logging::{init_logging, log_mode};
use std::process::ExitCode;

fn main() -> ExitCode {
    let args: NumFilterArgs = parse_or_exit(Some(FILTER_HINT));
    init_logging(log_mode(args.log_json));

    match numfilter::run(&args) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            e.report();
            ExitCode::from(e.exit_code())
        }
    }
}
