use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;
use transkey::cli::{Arguments, ExitStatus};

fn main() -> ExitCode {
    let args = Arguments::parse();
    init_logging(args.verbose());

    match transkey::cli::run_cli(args) {
        Ok(status) => status.into(),
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitStatus::Error.into()
        }
    }
}

/// Logs go to stderr so command output on stdout stays pipeable.
/// `RUST_LOG` takes precedence over `-v`.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "transkey=debug" } else { "transkey=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
