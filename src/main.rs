//! # rbxts-scaffold CLI
//!
//! This is the binary entry point for the `rbxts-scaffold` command-line tool.
//!
//! Its primary responsibilities are:
//! - Parsing command-line arguments using `clap`.
//! - Executing the appropriate command based on the parsed arguments.
//! - Translating top-level errors into a colored `error:` line and exit code 1.
//!
//! The scaffolding logic lives in the library crate; the binary is a thin
//! wrapper around it.

mod cli;
mod commands;

use std::process::ExitCode;

use clap::Parser;
use console::style;

use rbxts_scaffold::error::Error;

fn main() -> ExitCode {
    let cli = cli::Cli::parse();
    match cli.execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // Cancelling a prompt exits quietly
            if !matches!(e.downcast_ref::<Error>(), Some(Error::Cancelled)) {
                eprintln!("{} {:#}", style("error:").red().bold(), e);
            }
            ExitCode::FAILURE
        }
    }
}
