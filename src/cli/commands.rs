//! CLI command implementation
//!
//! A stixgen invocation is single-shot: load optional configuration,
//! convert one observable argument pair, write one JSON result to stdout,
//! exit. Missing arguments, unknown types, and malformed composites are
//! all structured payloads; only process-level faults become `CliError`.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::observable::{self, PatternOutcome, SyntaxChecker};
use crate::observability::{Event, Logger, Severity};

use super::args::Cli;
use super::errors::{CliError, CliResult};
use super::io::{write_error, write_success, write_unknown};

/// Message emitted when a positional argument is missing
pub const MISSING_ARGUMENT_MESSAGE: &str = "Missing observable type or value argument";

/// Configuration file structure
///
/// Every field has a default; the file itself is optional.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Validate observable value syntax before generating (default false)
    #[serde(default)]
    pub validate_syntax: bool,

    /// Minimum log severity: trace, info, warn, error, or fatal
    #[serde(default = "default_min_log_severity")]
    pub min_log_severity: String,
}

fn default_min_log_severity() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            validate_syntax: false,
            min_log_severity: default_min_log_severity(),
        }
    }
}

impl Config {
    /// Load configuration from file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| CliError::config_error(format!("Failed to read config: {}", e)))?;

        let config: Config = serde_json::from_str(&content)
            .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration
    fn validate(&self) -> CliResult<()> {
        if Severity::parse(&self.min_log_severity).is_none() {
            return Err(CliError::config_error(format!(
                "Invalid min_log_severity: '{}'. Expected trace, info, warn, error, or fatal.",
                self.min_log_severity
            )));
        }
        Ok(())
    }

    /// Minimum severity as a typed value
    pub fn min_severity(&self) -> Severity {
        Severity::parse(&self.min_log_severity).unwrap_or(Severity::Info)
    }
}

/// Main CLI entry point
///
/// Parses arguments and runs the conversion. This is the only function
/// that main.rs should call.
pub fn run() -> CliResult<()> {
    run_command(Cli::parse_args())
}

/// Run the conversion for already-parsed arguments
pub fn run_command(cli: Cli) -> CliResult<()> {
    let config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    // The quiet flag wins over any configured threshold
    let min_severity = if cli.quiet {
        Severity::Error
    } else {
        config.min_severity()
    };
    Logger::set_min_severity(min_severity);

    if let Some(path) = &cli.config {
        Logger::info(
            Event::ConfigLoaded.as_str(),
            &[("path", &path.display().to_string())],
        );
    }

    let (observable_type, observable_value) = match (&cli.observable_type, &cli.observable_value) {
        (Some(observable_type), Some(observable_value)) => {
            (observable_type.as_str(), observable_value.as_str())
        }
        _ => return write_error(MISSING_ARGUMENT_MESSAGE),
    };

    let validate = cli.validate || config.validate_syntax;
    generate(observable_type, observable_value, validate)
}

/// Convert one observable argument pair and write the result
pub fn generate(observable_type: &str, observable_value: &str, validate: bool) -> CliResult<()> {
    if validate {
        let checker = match SyntaxChecker::new() {
            Ok(checker) => checker,
            Err(e) => return write_error(&e.to_string()),
        };
        if let Err(e) = checker.check_observable(observable_type, observable_value) {
            Logger::warn(
                Event::SyntaxRejected.as_str(),
                &[("observable_type", observable_type)],
            );
            return write_error(&e.to_string());
        }
    }

    match observable::create_pattern(observable_type, observable_value) {
        Ok(PatternOutcome::Pattern(pattern)) => {
            Logger::info(
                Event::PatternCreated.as_str(),
                &[("observable_type", observable_type)],
            );
            write_success(&pattern)
        }
        Ok(PatternOutcome::Check) => write_success(observable::CHECK_TOKEN),
        Ok(PatternOutcome::Unknown) => {
            Logger::warn(
                Event::PatternUnknown.as_str(),
                &[("observable_type", observable_type)],
            );
            write_unknown()
        }
        Err(e) => {
            Logger::warn(
                Event::PatternRejected.as_str(),
                &[
                    ("observable_type", observable_type),
                    ("reason", &e.to_string()),
                ],
            );
            write_error(&e.to_string())
        }
    }
}
