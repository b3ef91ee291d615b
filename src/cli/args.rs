//! CLI argument definitions using clap
//!
//! Invocation:
//! - stixgen <TYPE> <VALUE>
//! - stixgen <TYPE> <VALUE> --validate
//! - stixgen <TYPE> <VALUE> --config <path>
//!
//! Both positionals are optional at the clap level; a missing argument is
//! reported as a structured error payload, never as a usage failure.

use clap::Parser;
use std::path::PathBuf;

/// stixgen - convert observables into STIX pattern expressions
#[derive(Parser, Debug)]
#[command(name = "stixgen")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Observable type name (e.g. "IPv4-Addr"), or the literal "check".
    /// Composite types join segments with "__"
    pub observable_type: Option<String>,

    /// Observable value; composite values join segments with "__"
    pub observable_value: Option<String>,

    /// Path to an optional configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Validate observable value syntax before generating
    #[arg(long)]
    pub validate: bool,

    /// Suppress log output below ERROR
    #[arg(long)]
    pub quiet: bool,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
