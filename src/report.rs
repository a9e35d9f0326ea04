//! Report rendering — turns a [`Session`] into text or JSON.
//!
//! The text layout mirrors the panels of an interactive viewer: a summary,
//! the ranked pattern table and the hourly timeline. The JSON layout is the
//! serialised [`Analysis`] with the cluster list trimmed to the requested size.

use chrono::{DateTime, FixedOffset, SecondsFormat};
use logsift_core::config::{ReportConfig, ReportFormat};
use logsift_core::{Analysis, EntryFilter, LogEntry, LogStats, Session, Severity, TimeSeriesPoint};
use serde::Serialize;
use std::fmt::{self, Write};

/// Longest pattern text printed in the text table, in characters.
const PATTERN_WIDTH: usize = 96;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportOptions {
    pub format: ReportFormat,
    /// Number of clusters to include; 0 includes all.
    pub top_patterns: usize,
    pub show_timeline: bool,
    /// JSON only: include each cluster's member entries.
    pub with_entries: bool,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self::from_config(&ReportConfig::default())
    }
}

impl ReportOptions {
    pub fn from_config(config: &ReportConfig) -> Self {
        Self {
            format: config.format,
            top_patterns: config.top_patterns,
            show_timeline: config.show_timeline,
            with_entries: config.with_entries,
        }
    }
}

/// Render the session's current analysis.
pub fn render(session: &Session, options: &ReportOptions) -> anyhow::Result<String> {
    let analysis = session.analysis();
    let rendered = match options.format {
        ReportFormat::Text => render_text(session, &analysis, options)?,
        ReportFormat::Json => render_json(session, &analysis, options)?,
    };
    Ok(rendered)
}

fn shown<T>(items: &[T], top: usize) -> &[T] {
    if top == 0 {
        items
    } else {
        &items[..items.len().min(top)]
    }
}

// ---------------------------------------------------------------------------
// JSON
// ---------------------------------------------------------------------------

#[derive(Serialize)]
struct JsonReport<'a> {
    source: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    filter: Option<JsonFilter<'a>>,
    stats: &'a LogStats,
    total_patterns: usize,
    patterns: Vec<JsonPattern<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    series: Option<&'a [TimeSeriesPoint]>,
}

#[derive(Serialize)]
struct JsonFilter<'a> {
    search: &'a str,
    severity: Option<Severity>,
}

#[derive(Serialize)]
struct JsonPattern<'a> {
    pattern: &'a str,
    normalized_key: &'a str,
    count: usize,
    severity: Severity,
    percentage: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    entries: Option<&'a [LogEntry]>,
}

fn render_json(
    session: &Session,
    analysis: &Analysis,
    options: &ReportOptions,
) -> serde_json::Result<String> {
    let filter = session.filter();
    let report = JsonReport {
        source: session.source_name(),
        filter: filter.is_active().then(|| JsonFilter {
            search: &filter.search,
            severity: filter.severity,
        }),
        stats: &analysis.stats,
        total_patterns: analysis.patterns.len(),
        patterns: shown(&analysis.patterns, options.top_patterns)
            .iter()
            .map(|p| JsonPattern {
                pattern: &p.pattern,
                normalized_key: &p.normalized_key,
                count: p.count,
                severity: p.severity,
                percentage: p.percentage,
                entries: options.with_entries.then_some(p.entries.as_slice()),
            })
            .collect(),
        series: options.show_timeline.then_some(analysis.series.as_slice()),
    };
    serde_json::to_string_pretty(&report)
}

// ---------------------------------------------------------------------------
// Text
// ---------------------------------------------------------------------------

fn render_text(
    session: &Session,
    analysis: &Analysis,
    options: &ReportOptions,
) -> Result<String, fmt::Error> {
    let mut out = String::new();
    writeln!(out, "source: {}", session.source_name())?;
    if let Some(line) = describe_filter(session.filter()) {
        writeln!(out, "filter: {line}")?;
    }
    out.push('\n');

    write_summary(&mut out, &analysis.stats)?;
    out.push('\n');
    write_patterns(&mut out, analysis, options.top_patterns)?;
    if options.show_timeline {
        out.push('\n');
        write_timeline(&mut out, &analysis.series)?;
    }
    Ok(out)
}

fn describe_filter(filter: &EntryFilter) -> Option<String> {
    if !filter.is_active() {
        return None;
    }
    let mut parts = Vec::new();
    if !filter.search.is_empty() {
        parts.push(format!("search={:?}", filter.search));
    }
    if let Some(level) = filter.severity {
        parts.push(format!("severity={level}"));
    }
    Some(parts.join(" "))
}

fn write_summary(out: &mut impl Write, stats: &LogStats) -> fmt::Result {
    writeln!(out, "lines     {}", stats.total_lines)?;
    writeln!(out, "errors    {}", stats.error_count)?;
    writeln!(out, "warnings  {}", stats.warn_count)?;
    writeln!(out, "info      {}", stats.info_count)?;
    writeln!(out, "debug     {}", stats.debug_count)?;
    if stats.other_count > 0 {
        writeln!(out, "other     {}", stats.other_count)?;
    }
    writeln!(
        out,
        "range     {} .. {}",
        format_instant(stats.time_range.start),
        format_instant(stats.time_range.end)
    )
}

fn format_instant(ts: Option<DateTime<FixedOffset>>) -> String {
    ts.map_or_else(
        || "N/A".to_string(),
        |ts| ts.to_rfc3339_opts(SecondsFormat::AutoSi, true),
    )
}

fn write_patterns(out: &mut impl Write, analysis: &Analysis, top: usize) -> fmt::Result {
    let patterns = shown(&analysis.patterns, top);
    if patterns.is_empty() {
        return writeln!(out, "patterns: no errors or warnings found");
    }
    writeln!(
        out,
        "patterns (showing {} of {})",
        patterns.len(),
        analysis.patterns.len()
    )?;
    writeln!(out, "  {:>6}  {:>6}  {:<8}  pattern", "count", "share", "severity")?;
    for p in patterns {
        writeln!(
            out,
            "  {:>6}  {:>5.1}%  {:<8}  {}",
            p.count,
            p.percentage,
            p.severity,
            truncate(&p.pattern, PATTERN_WIDTH)
        )?;
    }
    Ok(())
}

fn write_timeline(out: &mut impl Write, series: &[TimeSeriesPoint]) -> fmt::Result {
    if series.is_empty() {
        return writeln!(out, "timeline: no timestamped entries");
    }
    writeln!(out, "timeline")?;
    writeln!(
        out,
        "  {:<19}  {:>6}  {:>8}  {:>6}",
        "hour", "errors", "warnings", "info"
    )?;
    for point in series {
        writeln!(
            out,
            "  {:<19}  {:>6}  {:>8}  {:>6}",
            point.timestamp, point.errors, point.warnings, point.info
        )?;
    }
    Ok(())
}

fn truncate(text: &str, width: usize) -> String {
    match text.char_indices().nth(width) {
        Some((cut, _)) => format!("{}…", &text[..cut]),
        None => text.to_string(),
    }
}
