//! Hourly severity trend.
//!
//! Each timestamped entry is truncated to the start of its clock hour in the
//! offset it was written in. Only hours that contain at least one entry are
//! emitted.

use crate::types::{LogEntry, Severity, TimeSeriesPoint};
use std::collections::BTreeMap;

/// Bucket label layout. Zero-padded, so lexicographic order is chronological.
const BUCKET_FORMAT: &str = "%Y-%m-%dT%H:00:00";

/// Build the sparse hourly series for `entries`, ascending by bucket.
pub fn generate_time_series(entries: &[LogEntry]) -> Vec<TimeSeriesPoint> {
    let mut buckets: BTreeMap<String, TimeSeriesPoint> = BTreeMap::new();

    for entry in entries {
        let Some(ts) = entry.timestamp else { continue };
        let label = ts.format(BUCKET_FORMAT).to_string();
        let point = buckets
            .entry(label)
            .or_insert_with_key(|label| TimeSeriesPoint {
                timestamp: label.clone(),
                ..TimeSeriesPoint::default()
            });
        match entry.severity {
            Severity::Fatal | Severity::Error => point.errors += 1,
            Severity::Warn => point.warnings += 1,
            Severity::Info | Severity::Debug | Severity::Trace => point.info += 1,
        }
    }

    buckets.into_values().collect()
}
