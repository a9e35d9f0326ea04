//! Analysis snapshots and the parse session that produces them.
//!
//! A [`Session`] owns the entries of the last parse plus the active
//! [`EntryFilter`]. Every call to [`Session::analysis`] recomputes the three
//! derived views from scratch over the filtered subset.

use crate::filter::EntryFilter;
use crate::types::{ErrorPattern, LogEntry, LogStats, Severity, TimeSeriesPoint};
use crate::{calculate_stats, extract_error_patterns, generate_time_series, parse_log};
use serde::Serialize;
use std::borrow::Cow;

/// The derived views for one entry collection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Analysis {
    pub stats: LogStats,
    pub patterns: Vec<ErrorPattern>,
    pub series: Vec<TimeSeriesPoint>,
}

impl Analysis {
    pub fn compute(entries: &[LogEntry]) -> Self {
        Self {
            stats: calculate_stats(entries),
            patterns: extract_error_patterns(entries),
            series: generate_time_series(entries),
        }
    }
}

/// Entries of the most recent parse together with the active filter.
#[derive(Debug, Clone, Default)]
pub struct Session {
    source_name: String,
    entries: Vec<LogEntry>,
    filter: EntryFilter,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse `text` and replace whatever was loaded before. The filter is
    /// reset. Returns the number of entries parsed.
    pub fn load(&mut self, source_name: impl Into<String>, text: &str) -> usize {
        self.source_name = source_name.into();
        self.entries = parse_log(text);
        self.filter.clear();
        tracing::info!(
            source = %self.source_name,
            entries = self.entries.len(),
            "loaded log"
        );
        self.entries.len()
    }

    /// Drop the loaded entries, the source name and the filter.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn source_name(&self) -> &str {
        &self.source_name
    }

    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    pub fn filter(&self) -> &EntryFilter {
        &self.filter
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.filter.search = search.into();
    }

    pub fn set_severity(&mut self, severity: Option<Severity>) {
        self.filter.severity = severity;
    }

    pub fn clear_filters(&mut self) {
        self.filter.clear();
    }

    /// Entries passing the active filter, in source order.
    pub fn filtered(&self) -> Cow<'_, [LogEntry]> {
        self.filter.apply(&self.entries)
    }

    pub fn analysis(&self) -> Analysis {
        Analysis::compute(&self.filtered())
    }
}
