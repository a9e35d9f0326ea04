//! Core types for logsift-core.
//!
//! This module defines the structures produced by the pipeline: the parsed
//! [`LogEntry`] and its [`Severity`], plus the three derived views
//! ([`ErrorPattern`], [`LogStats`], [`TimeSeriesPoint`]) handed to the
//! presentation layer.

use chrono::{DateTime, FixedOffset};
use serde::Serialize;

/// One parsed, non-blank line of the source text.
///
/// Entries are created once per parse and never mutated afterwards; a new
/// parse replaces the whole collection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LogEntry {
    /// Zero-based ordinal among retained lines. Unique within one parse only.
    pub id: usize,
    /// Timestamp found in the line, kept with the UTC offset it was written in.
    pub timestamp: Option<DateTime<FixedOffset>>,
    /// Severity keyword found in the line, [`Severity::Info`] when none matched.
    pub severity: Severity,
    /// The line with surrounding whitespace trimmed.
    pub message: String,
    /// The line exactly as it appeared in the source (minus its terminator).
    pub raw_line: String,
    /// 1-based position among non-blank lines.
    pub line_number: usize,
}

/// Log severity level.
///
/// Variants are ordered from least to most severe so `>=` comparisons read
/// naturally (`severity >= Severity::Warn`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
    Fatal,
}

impl Severity {
    /// All levels, most severe first.
    pub const ALL: [Severity; 6] = [
        Severity::Fatal,
        Severity::Error,
        Severity::Warn,
        Severity::Info,
        Severity::Debug,
        Severity::Trace,
    ];

    /// WARN, ERROR and FATAL entries are the ones clustered into patterns.
    pub fn is_flagged(self) -> bool {
        self >= Severity::Warn
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Trace => "TRACE",
            Severity::Debug => "DEBUG",
            Severity::Info => "INFO",
            Severity::Warn => "WARN",
            Severity::Error => "ERROR",
            Severity::Fatal => "FATAL",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

/// Returned when a string names no known severity.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown severity {0:?} (expected one of FATAL, ERROR, WARN, INFO, DEBUG, TRACE)")]
pub struct ParseSeverityError(pub String);

impl std::str::FromStr for Severity {
    type Err = ParseSeverityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Severity::ALL
            .into_iter()
            .find(|level| level.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseSeverityError(s.to_string()))
    }
}

/// A cluster of flagged entries whose messages normalise to the same key.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorPattern {
    /// Message of the first entry seen for this cluster.
    pub pattern: String,
    /// Masked message shared by every member; the cluster's identity.
    pub normalized_key: String,
    pub count: usize,
    /// Severity of the first entry seen for this cluster.
    pub severity: Severity,
    /// Share of all WARN/ERROR/FATAL entries in the input, 0–100.
    pub percentage: f64,
    /// Members in order of first appearance.
    pub entries: Vec<LogEntry>,
}

/// Earliest and latest timestamp among entries that carry one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TimeRange {
    pub start: Option<DateTime<FixedOffset>>,
    pub end: Option<DateTime<FixedOffset>>,
}

/// Summary counts for one entry collection.
///
/// `error_count` includes FATAL and `debug_count` includes TRACE. Every entry
/// lands in exactly one count, so the counts always sum to `total_lines`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LogStats {
    pub total_lines: usize,
    pub error_count: usize,
    pub warn_count: usize,
    pub info_count: usize,
    pub debug_count: usize,
    pub other_count: usize,
    pub time_range: TimeRange,
}

/// Severity counts for one clock hour.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TimeSeriesPoint {
    /// Bucket start as `YYYY-MM-DDTHH:00:00`, in the entries' own offset.
    pub timestamp: String,
    pub errors: usize,
    pub warnings: usize,
    pub info: usize,
}
