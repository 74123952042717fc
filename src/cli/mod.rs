//! Command Line Interface (CLI) layer for pairbatch.
//!
//! This module defines argument parsing (`args`), error types (`errors`),
//! and the orchestration logic (`runner`). It maps user-provided flags onto
//! `BatchParams` and hands them to `pairbatch::organise_directory`.
//!
//! If you are embedding pairbatch into another application, prefer the
//! library API in `pairbatch::api` over the CLI code.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
