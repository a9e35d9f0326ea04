//! Domain-specific assertion macros for logsift harnesses.
//!
//! These add context-rich failure messages that make it clear *which*
//! pipeline invariant was violated and on *which* line.

use logsift_core::{ErrorPattern, LogEntry, LogStats};

// ---------------------------------------------------------------------------
// Entry assertions
// ---------------------------------------------------------------------------

/// Assert that a `LogEntry` was classified with a specific severity.
///
/// ```rust
/// assert_severity!(entry, Severity::Error);
/// ```
#[macro_export]
macro_rules! assert_severity {
    ($entry:expr, $severity:expr) => {{
        let entry: &logsift_core::LogEntry = &$entry;
        let expected: logsift_core::Severity = $severity;
        if entry.severity != expected {
            panic!(
                "assert_severity! failed:\n  expected: {:?}\n  actual:   {:?}\n  raw: {:?}",
                expected, entry.severity, entry.raw_line
            );
        }
    }};
}

/// Assert that a `LogEntry` carries the given instant (RFC 3339 string).
///
/// ```rust
/// assert_timestamp!(entry, "2025-11-22T09:15:03.124Z");
/// ```
#[macro_export]
macro_rules! assert_timestamp {
    ($entry:expr, $rfc3339:expr) => {{
        let entry: &logsift_core::LogEntry = &$entry;
        let expected = chrono::DateTime::parse_from_rfc3339($rfc3339).unwrap();
        match entry.timestamp {
            Some(actual) if actual == expected => {}
            Some(actual) => panic!(
                "assert_timestamp! failed:\n  expected: {}\n  actual:   {}\n  raw: {:?}",
                expected, actual, entry.raw_line
            ),
            None => panic!(
                "assert_timestamp! failed: no timestamp on entry.\n  raw: {:?}",
                entry.raw_line
            ),
        }
    }};
}

/// Assert that a `LogEntry` has no timestamp.
#[macro_export]
macro_rules! assert_no_timestamp {
    ($entry:expr) => {{
        let entry: &logsift_core::LogEntry = &$entry;
        if let Some(ts) = entry.timestamp {
            panic!(
                "assert_no_timestamp! failed: found {}.\n  raw: {:?}",
                ts, entry.raw_line
            );
        }
    }};
}

// ---------------------------------------------------------------------------
// Collection invariant helpers
// ---------------------------------------------------------------------------

/// Line numbers must run 1, 2, 3, … without gaps.
pub fn assert_line_numbers_contiguous(entries: &[LogEntry]) {
    for (i, entry) in entries.iter().enumerate() {
        assert_eq!(
            entry.line_number,
            i + 1,
            "line number gap at position {i}: {:?}",
            entry.raw_line
        );
    }
}

/// Every entry lands in exactly one stats bucket.
pub fn assert_stats_partition(stats: &LogStats) {
    let bucketed = stats.error_count
        + stats.warn_count
        + stats.info_count
        + stats.debug_count
        + stats.other_count;
    assert_eq!(
        bucketed, stats.total_lines,
        "stats buckets sum to {bucketed} but total_lines is {}",
        stats.total_lines
    );
}

/// Cluster counts cover every flagged entry once, percentages add up to 100
/// and the ranking never increases.
pub fn assert_patterns_consistent(entries: &[LogEntry], patterns: &[ErrorPattern]) {
    let flagged = entries.iter().filter(|e| e.severity.is_flagged()).count();
    let counted: usize = patterns.iter().map(|p| p.count).sum();
    assert_eq!(counted, flagged, "pattern counts do not cover flagged entries");

    if flagged > 0 {
        let share: f64 = patterns.iter().map(|p| p.percentage).sum();
        assert!((share - 100.0).abs() < 1e-6, "percentages sum to {share}");
    }

    for pair in patterns.windows(2) {
        assert!(
            pair[0].count >= pair[1].count,
            "ranking out of order: {} before {}",
            pair[0].count,
            pair[1].count
        );
    }

    for pattern in patterns {
        assert_eq!(pattern.count, pattern.entries.len());
        assert_eq!(pattern.pattern, pattern.entries[0].message);
        assert_eq!(pattern.severity, pattern.entries[0].severity);
    }
}
