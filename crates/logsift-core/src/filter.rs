//! Entry filter applied before aggregation.
//!
//! A case-insensitive substring search over `message` combined with an exact
//! severity match. An inactive filter passes the collection through untouched.

use crate::types::{LogEntry, Severity};
use std::borrow::Cow;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryFilter {
    /// Substring to look for in `message`; empty matches everything.
    pub search: String,
    /// Exact severity to keep; `None` keeps every level.
    pub severity: Option<Severity>,
}

impl EntryFilter {
    pub fn new(search: impl Into<String>, severity: Option<Severity>) -> Self {
        Self {
            search: search.into(),
            severity,
        }
    }

    pub fn is_active(&self) -> bool {
        !self.search.is_empty() || self.severity.is_some()
    }

    pub fn clear(&mut self) {
        self.search.clear();
        self.severity = None;
    }

    pub fn matches(&self, entry: &LogEntry) -> bool {
        let severity_ok = self.severity.map_or(true, |level| entry.severity == level);
        severity_ok && contains_ignore_case(&entry.message, &self.search)
    }

    /// Keep matching entries in source order. Borrows when nothing is filtered.
    pub fn apply<'a>(&self, entries: &'a [LogEntry]) -> Cow<'a, [LogEntry]> {
        if !self.is_active() {
            return Cow::Borrowed(entries);
        }
        let kept: Vec<LogEntry> = entries.iter().filter(|e| self.matches(e)).cloned().collect();
        tracing::debug!(
            search = %self.search,
            severity = ?self.severity,
            kept = kept.len(),
            of = entries.len(),
            "applied entry filter"
        );
        Cow::Owned(kept)
    }
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    needle.is_empty() || haystack.to_lowercase().contains(&needle.to_lowercase())
}
