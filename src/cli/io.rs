//! JSON result output for the CLI
//!
//! Every invocation writes exactly one JSON object to stdout:
//! - success: {"status": "success", "data": "<pattern>"}
//! - unknown: {"status": "unknown", "data": null}
//! - error:   {"status": "error", "message": "<text>"}
//!
//! stdout carries nothing else; logs go to stderr.

use std::io::{self, Write};

use serde_json::json;

use super::errors::CliResult;

/// Write a success result to stdout
pub fn write_success(data: &str) -> CliResult<()> {
    write_success_to(data, &mut io::stdout())
}

/// Write an unknown-type result to stdout
pub fn write_unknown() -> CliResult<()> {
    write_unknown_to(&mut io::stdout())
}

/// Write a structured error result to stdout
pub fn write_error(message: &str) -> CliResult<()> {
    write_error_to(message, &mut io::stdout())
}

/// Write a success result to a given writer
pub fn write_success_to<W: Write>(data: &str, writer: &mut W) -> CliResult<()> {
    let result = json!({
        "status": "success",
        "data": data
    });
    emit(&result, writer)
}

/// Write an unknown-type result to a given writer
pub fn write_unknown_to<W: Write>(writer: &mut W) -> CliResult<()> {
    let result = json!({
        "status": "unknown",
        "data": null
    });
    emit(&result, writer)
}

/// Write a structured error result to a given writer
pub fn write_error_to<W: Write>(message: &str, writer: &mut W) -> CliResult<()> {
    let result = json!({
        "status": "error",
        "message": message
    });
    emit(&result, writer)
}

fn emit<W: Write>(result: &serde_json::Value, writer: &mut W) -> CliResult<()> {
    serde_json::to_writer(&mut *writer, result)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}
