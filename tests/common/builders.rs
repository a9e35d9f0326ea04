//! Test builders — ergonomic constructors for `LogEntry` collections.
//!
//! These builders are designed for readability in test assertions, not for
//! production use. They panic on invalid input rather than returning `Result`.

use chrono::{DateTime, FixedOffset};
use logsift_core::{LogEntry, Severity};

// ---------------------------------------------------------------------------
// LogEntryBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for [`LogEntry`] test fixtures.
///
/// The aggregators only look at `severity`, `message` and `timestamp`, so
/// entries can be built directly without going through the tokenizer.
///
/// # Example
///
/// ```rust
/// let entry = LogEntryBuilder::new("timeout connecting to db")
///     .severity(Severity::Error)
///     .at("2024-01-15T10:00:00Z")
///     .build();
/// ```
pub struct LogEntryBuilder {
    message: String,
    timestamp: Option<DateTime<FixedOffset>>,
    severity: Severity,
    line_number: usize,
}

impl LogEntryBuilder {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            timestamp: None,
            severity: Severity::Info,
            line_number: 1,
        }
    }

    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    /// Set the timestamp from an RFC 3339 string.
    pub fn at(mut self, rfc3339: &str) -> Self {
        self.timestamp = Some(DateTime::parse_from_rfc3339(rfc3339).unwrap());
        self
    }

    pub fn line(mut self, line_number: usize) -> Self {
        self.line_number = line_number;
        self
    }

    pub fn build(self) -> LogEntry {
        LogEntry {
            id: self.line_number - 1,
            timestamp: self.timestamp,
            severity: self.severity,
            raw_line: self.message.clone(),
            message: self.message,
            line_number: self.line_number,
        }
    }
}

// ---------------------------------------------------------------------------
// Convenience constructors
// ---------------------------------------------------------------------------

/// Build an entry with the given severity and message and no timestamp.
pub fn entry(severity: Severity, message: &str) -> LogEntry {
    LogEntryBuilder::new(message).severity(severity).build()
}

/// Build a timestamped entry.
pub fn timed_entry(severity: Severity, rfc3339: &str, message: &str) -> LogEntry {
    LogEntryBuilder::new(message)
        .severity(severity)
        .at(rfc3339)
        .build()
}

/// Renumber a hand-built collection so ids and line numbers follow order.
pub fn numbered(entries: Vec<LogEntry>) -> Vec<LogEntry> {
    entries
        .into_iter()
        .enumerate()
        .map(|(i, mut e)| {
            e.id = i;
            e.line_number = i + 1;
            e
        })
        .collect()
}
