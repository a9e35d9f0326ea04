//! Tokenizer — turns a text blob into structured [`LogEntry`] values.
//!
//! Blank lines are dropped and do not consume a line number. Both extractors
//! see the untrimmed line; only `message` is trimmed. A byte-order mark counts
//! as whitespace for both.

use crate::types::LogEntry;
use crate::{severity, timestamp};

/// Parse `text` into one entry per non-blank line, in source order.
pub fn parse_log(text: &str) -> Vec<LogEntry> {
    let entries: Vec<LogEntry> = text
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .filter(|line| !trim(line).is_empty())
        .enumerate()
        .map(|(id, line)| parse_line(id, line))
        .collect();

    tracing::debug!(
        bytes = text.len(),
        entries = entries.len(),
        timestamped = entries.iter().filter(|e| e.timestamp.is_some()).count(),
        "parsed log text"
    );
    entries
}

fn parse_line(id: usize, line: &str) -> LogEntry {
    LogEntry {
        id,
        timestamp: timestamp::extract_timestamp(line),
        severity: severity::classify(line),
        message: trim(line).to_string(),
        raw_line: line.to_string(),
        line_number: id + 1,
    }
}

fn trim(line: &str) -> &str {
    line.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
}
