//! stixgen CLI entry point
//!
//! This is a minimal entrypoint that:
//! 1. Parses CLI arguments (via cli::run)
//! 2. Dispatches the conversion (via cli::run)
//! 3. Prints process-level errors to stderr
//! 4. Exits with non-zero on failure
//!
//! Structured results, including unknown types and structured errors, are
//! written to stdout by the CLI module and exit zero. All logic is
//! delegated to the CLI module.

use stixgen::cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
