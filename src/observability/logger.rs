//! # Structured Logger
//!
//! One event per line, serialized as a JSON object. Keys are emitted in
//! alphabetical order so identical events produce byte-identical lines,
//! which keeps log-based assertions and grep pipelines stable. Writes
//! are synchronous and unbuffered.

use std::fmt;
use std::io::{self, Write};

use serde_json::{Map, Value};

/// Log severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// Normal operations.
    Info = 0,
    /// Recoverable issues.
    Warn = 1,
    /// Operation failures.
    Error = 2,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "INFO",
            Severity::Warn => "WARN",
            Severity::Error => "ERROR",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Structured JSON logger. Info lines go to stdout, warn and error
/// lines to stderr.
pub struct Logger;

impl Logger {
    /// Logs at INFO level.
    pub fn info(event: &str, fields: &[(&str, &str)]) {
        Self::write_line(Severity::Info, event, fields, &mut io::stdout());
    }

    /// Logs at WARN level.
    pub fn warn(event: &str, fields: &[(&str, &str)]) {
        Self::write_line(Severity::Warn, event, fields, &mut io::stderr());
    }

    /// Logs at ERROR level.
    pub fn error(event: &str, fields: &[(&str, &str)]) {
        Self::write_line(Severity::Error, event, fields, &mut io::stderr());
    }

    fn write_line<W: Write>(severity: Severity, event: &str, fields: &[(&str, &str)], out: &mut W) {
        let line = Self::format_line(severity, event, fields);

        // Single write keeps concurrent handler lines from interleaving.
        let _ = out.write_all(line.as_bytes());
        let _ = out.flush();
    }

    /// Renders one event as a newline-terminated JSON object.
    ///
    /// serde_json's default map is ordered by key, which gives the
    /// deterministic layout for free and handles string escaping.
    fn format_line(severity: Severity, event: &str, fields: &[(&str, &str)]) -> String {
        let mut map = Map::new();
        map.insert("event".to_string(), Value::from(event));
        map.insert("severity".to_string(), Value::from(severity.as_str()));

        for (key, value) in fields {
            map.insert((*key).to_string(), Value::from(*value));
        }

        let mut line = Value::Object(map).to_string();
        line.push('\n');
        line
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_ordering() {
        assert!(Severity::Info < Severity::Warn);
        assert!(Severity::Warn < Severity::Error);
    }

    #[test]
    fn test_severity_display() {
        assert_eq!(Severity::Info.as_str(), "INFO");
        assert_eq!(Severity::Warn.as_str(), "WARN");
        assert_eq!(Severity::Error.as_str(), "ERROR");
    }

    #[test]
    fn test_line_is_valid_json() {
        let line = Logger::format_line(Severity::Info, "TEST_EVENT", &[("matched", "42")]);

        let parsed: Value = serde_json::from_str(&line).unwrap();
        assert_eq!(parsed["event"], "TEST_EVENT");
        assert_eq!(parsed["severity"], "INFO");
        assert_eq!(parsed["matched"], "42");
    }

    #[test]
    fn test_line_is_single_line() {
        let line = Logger::format_line(Severity::Warn, "TEST", &[("a", "1"), ("b", "2")]);

        assert!(line.ends_with('\n'));
        assert_eq!(line.matches('\n').count(), 1);
    }

    #[test]
    fn test_field_order_is_deterministic() {
        let a = Logger::format_line(Severity::Info, "TEST", &[("zebra", "1"), ("apple", "2")]);
        let b = Logger::format_line(Severity::Info, "TEST", &[("apple", "2"), ("zebra", "1")]);

        assert_eq!(a, b);
        assert!(a.find("apple").unwrap() < a.find("zebra").unwrap());
    }

    #[test]
    fn test_special_characters_are_escaped() {
        let line = Logger::format_line(Severity::Error, "TEST", &[("msg", "quote \" and\nnewline")]);

        let parsed: Value = serde_json::from_str(line.trim_end()).unwrap();
        assert_eq!(parsed["msg"], "quote \" and\nnewline");
    }
}
