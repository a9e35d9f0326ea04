//! Pattern aggregation — clusters WARN/ERROR/FATAL entries by normalised message.
//!
//! Clusters are keyed by the normalised message alone. Two entries with the
//! same key but different severities end up in one cluster labelled with the
//! first entry's severity.

use crate::normalizer::normalize_message;
use crate::types::{ErrorPattern, LogEntry};
use indexmap::IndexMap;
use std::collections::BTreeSet;

/// Group flagged entries into clusters, most frequent first.
///
/// Clusters with equal counts keep the order in which their first member
/// appeared.
pub fn extract_error_patterns(entries: &[LogEntry]) -> Vec<ErrorPattern> {
    let mut clusters: IndexMap<String, Vec<&LogEntry>> = IndexMap::new();
    for entry in entries.iter().filter(|e| e.severity.is_flagged()) {
        clusters
            .entry(normalize_message(&entry.message))
            .or_default()
            .push(entry);
    }

    let total_flagged: usize = clusters.values().map(Vec::len).sum();
    let mut patterns: Vec<ErrorPattern> = clusters
        .into_iter()
        .map(|(normalized_key, members)| to_pattern(normalized_key, &members, total_flagged))
        .collect();

    // `sort_by` is stable, so ties stay in first-seen order.
    patterns.sort_by(|a, b| b.count.cmp(&a.count));

    tracing::debug!(
        flagged = total_flagged,
        clusters = patterns.len(),
        "extracted error patterns"
    );
    patterns
}

fn to_pattern(normalized_key: String, members: &[&LogEntry], total_flagged: usize) -> ErrorPattern {
    // Every cluster is created by pushing its first member.
    let first = members[0];
    let count = members.len();
    ErrorPattern {
        pattern: first.message.clone(),
        normalized_key,
        count,
        severity: first.severity,
        percentage: percentage(count, total_flagged),
        entries: members.iter().map(|e| (*e).clone()).collect(),
    }
}

fn percentage(count: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 / total as f64 * 100.0
    }
}

/// Keys of clusters in `current` that were not present in `previous`.
///
/// Used to highlight patterns that appeared after a reload or filter change.
pub fn new_pattern_keys(previous: &[ErrorPattern], current: &[ErrorPattern]) -> BTreeSet<String> {
    let known: BTreeSet<&str> = previous.iter().map(|p| p.normalized_key.as_str()).collect();
    current
        .iter()
        .filter(|p| !known.contains(p.normalized_key.as_str()))
        .map(|p| p.normalized_key.clone())
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
