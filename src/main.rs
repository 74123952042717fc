//! pairbatch CLI entrypoint.
//!
//! Thin wrapper over the `cli` module: parse args, organise the source
//! directory, and exit non-zero on fatal errors.
//! For programmatic use, prefer the library API (`pairbatch::api`).

use std::process::ExitCode;

use clap::Parser;

mod cli;

fn main() -> ExitCode {
    let args = cli::CliArgs::parse();
    match cli::run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
