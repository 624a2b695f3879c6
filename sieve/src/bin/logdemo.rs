use sieve_core::cli::logdemo::{self, LogDemoArgs};
use sieve_core::cli::parse_or_exit;
use sieve_core::logging::{init_logging, log_mode};

fn main() {
    let args: LogDemoArgs = parse_or_exit(None);
    init_logging(log_mode(args.log_json));

    if let Err(e) = logdemo::run(args) {
        eprintln!("logdemo error: {e}");
        std::process::exit(1);
    }
}
