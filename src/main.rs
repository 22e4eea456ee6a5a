//! host-ident: local host network identity probe
//!
//! Entry point for the host-ident application.

use host_ident::cli::Cli;
use host_ident::probe::Probe;
use std::process::ExitCode;

mod app;

use app::{exit_code, render, setup_tracing};

/// Main entry point.
///
/// Excluded from coverage as it's the thin wrapper around testable components.
#[cfg(not(tarpaulin_include))]
fn main() -> ExitCode {
    let cli = Cli::parse_args();
    setup_tracing(cli.verbose);

    let identity = match Probe::system().run() {
        Ok(identity) => identity,
        Err(e) => {
            eprintln!("Error: {e}");
            return exit_code::FAILURE;
        }
    };

    match render(&identity, cli.format) {
        Ok(output) => {
            println!("{output}");
            exit_code::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: failed to serialize report: {e}");
            exit_code::FAILURE
        }
    }
}
