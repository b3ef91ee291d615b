//! CLI module for stixgen
//!
//! Provides the single-shot command-line interface: parse two positional
//! observable arguments, convert, and emit one JSON result on stdout.

mod args;
mod commands;
mod errors;
mod io;

pub use args::Cli;
pub use commands::{generate, run, run_command, Config, MISSING_ARGUMENT_MESSAGE};
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::{write_error, write_success, write_unknown};
