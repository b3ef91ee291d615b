//! Observability subsystem for stixgen
//!
//! This module provides:
//! - Structured logging (JSON) with deterministic key ordering
//! - Explicit severity levels with a process-wide threshold
//! - A typed event vocabulary
//!
//! # Principles
//!
//! 1. Observability is read-only
//! 2. No side effects on conversion
//! 3. No async or background threads
//! 4. Deterministic output
//! 5. stderr only: stdout is reserved for the command result

mod events;
mod logger;

pub use events::Event;
pub use logger::{Logger, Severity};
