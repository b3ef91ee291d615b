//! Observability events for stixgen
//!
//! Events are explicit and typed; every log line names one of them.

use std::fmt;

/// Observable events during a stixgen invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Configuration file loaded and validated
    ConfigLoaded,
    /// A pattern was generated successfully
    PatternCreated,
    /// Observable type (or every composite part) absent from the table
    PatternUnknown,
    /// Conversion rejected with a structured error
    PatternRejected,
    /// Observable value failed syntax validation
    SyntaxRejected,
}

impl Event {
    /// Returns the event name used in log lines
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::PatternCreated => "PATTERN_CREATED",
            Event::PatternUnknown => "PATTERN_UNKNOWN",
            Event::PatternRejected => "PATTERN_REJECTED",
            Event::SyntaxRejected => "SYNTAX_REJECTED",
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_names() {
        assert_eq!(Event::ConfigLoaded.as_str(), "CONFIG_LOADED");
        assert_eq!(Event::PatternCreated.as_str(), "PATTERN_CREATED");
        assert_eq!(Event::PatternUnknown.as_str(), "PATTERN_UNKNOWN");
        assert_eq!(Event::PatternRejected.as_str(), "PATTERN_REJECTED");
        assert_eq!(Event::SyntaxRejected.as_str(), "SYNTAX_REJECTED");
    }

    #[test]
    fn test_event_display_matches_name() {
        assert_eq!(Event::PatternCreated.to_string(), "PATTERN_CREATED");
    }
}
