//! logsift — classify, cluster and chart unstructured application logs.
//!
//! This crate ties the workspace together for the `logsift` binary and the
//! integration harnesses: it re-exports the pipeline from `logsift-core`, the
//! text sources from `logsift-feeds`, and owns report rendering.
//!
//! # Architecture
//!
//! ```text
//! Feeds ──► Tokenizer ──► Filter ──► {Stats, Patterns, Series} ──► Report
//! ```
//!
//! Everything runs synchronously on the calling thread.

pub mod report;

pub use logsift_core::{
    config, demo, Analysis, EntryFilter, ErrorPattern, LogEntry, LogStats, Session, Severity,
    TimeRange, TimeSeriesPoint,
};
pub use logsift_feeds as feeds;
