//! Summary statistics over an entry collection.

use crate::types::{LogEntry, LogStats, Severity, TimeRange};

/// Count entries per severity bucket and find the overall timestamp span.
pub fn calculate_stats(entries: &[LogEntry]) -> LogStats {
    let mut stats = LogStats {
        total_lines: entries.len(),
        time_range: time_range(entries),
        ..LogStats::default()
    };

    for entry in entries {
        match entry.severity {
            Severity::Fatal | Severity::Error => stats.error_count += 1,
            Severity::Warn => stats.warn_count += 1,
            Severity::Info => stats.info_count += 1,
            Severity::Debug | Severity::Trace => stats.debug_count += 1,
        }
    }
    stats
}

fn time_range(entries: &[LogEntry]) -> TimeRange {
    let timestamps = || entries.iter().filter_map(|e| e.timestamp);
    TimeRange {
        start: timestamps().min(),
        end: timestamps().max(),
    }
}
