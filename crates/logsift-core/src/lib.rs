//! logsift-core — the log interpretation pipeline.
//!
//! Everything in this crate is a pure, synchronous function over an in-memory
//! text blob or an entry slice. No state is shared between calls.
//!
//! # Pipeline
//!
//! ```text
//!                        ┌──► stats      (LogStats)
//! text ──► tokenizer ──► filter ──► patterns   (ErrorPattern)
//!                        └──► timeseries (TimeSeriesPoint)
//! ```
//!
//! The tokenizer leans on two leaf extractors, [`timestamp`] and [`severity`].
//! The pattern aggregator keys clusters with [`normalizer::normalize_message`].

pub mod analysis;
pub mod config;
pub mod demo;
pub mod filter;
pub mod normalizer;
pub mod patterns;
pub mod severity;
pub mod stats;
pub mod timeseries;
pub mod timestamp;
pub mod tokenizer;
pub mod types;

pub use analysis::{Analysis, Session};
pub use filter::EntryFilter;
pub use normalizer::normalize_message;
pub use patterns::{extract_error_patterns, new_pattern_keys};
pub use stats::calculate_stats;
pub use timeseries::generate_time_series;
pub use tokenizer::parse_log;
pub use types::{ErrorPattern, LogEntry, LogStats, Severity, TimeRange, TimeSeriesPoint};
