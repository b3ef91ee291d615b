//! CLI-specific error types
//!
//! These cover process-level faults only (unreadable config, broken
//! output channel). Conversion outcomes, including unknown types and
//! malformed composites, are structured payloads, not CLI errors.

use std::fmt;
use std::io;

/// CLI error codes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliErrorCode {
    /// Configuration file error
    ConfigError,
    /// I/O error (stdout/stderr)
    IoError,
}

impl CliErrorCode {
    /// Get the error code string
    pub fn code(&self) -> &'static str {
        match self {
            Self::ConfigError => "STIX_CLI_CONFIG_ERROR",
            Self::IoError => "STIX_CLI_IO_ERROR",
        }
    }
}

/// CLI error
#[derive(Debug)]
pub struct CliError {
    code: CliErrorCode,
    message: String,
}

impl CliError {
    /// Create a new CLI error
    pub fn new(code: CliErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Config error
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::ConfigError, msg)
    }

    /// I/O error
    pub fn io_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::IoError, msg)
    }

    /// Get the error code
    pub fn code(&self) -> &CliErrorCode {
        &self.code
    }

    /// Get the error code string
    pub fn code_str(&self) -> &'static str {
        self.code.code()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.code(), self.message)
    }
}

impl std::error::Error for CliError {}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        Self::io_error(e.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        Self::io_error(format!("JSON error: {}", e))
    }
}

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(
            CliError::config_error("x").code_str(),
            "STIX_CLI_CONFIG_ERROR"
        );
        assert_eq!(CliError::io_error("x").code_str(), "STIX_CLI_IO_ERROR");
    }

    #[test]
    fn test_display_includes_code_and_message() {
        let err = CliError::config_error("bad file");
        assert_eq!(err.to_string(), "STIX_CLI_CONFIG_ERROR: bad file");
        assert_eq!(err.message(), "bad file");
        assert_eq!(err.code(), &CliErrorCode::ConfigError);
    }
}
