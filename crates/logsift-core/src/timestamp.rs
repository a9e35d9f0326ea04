//! Timestamp extraction.
//!
//! Four formats are tried in a fixed order. For each one only the leftmost
//! regex match in the line is considered; if that substring does not parse
//! into a valid instant the next format is tried.
//!
//! | Priority | Format | Example |
//! |----------|--------|---------|
//! | 1 | ISO-8601 | `2025-11-22T09:15:03.124Z`, `2025-11-22 09:15:03+02:00` |
//! | 2 | US date-time | `11/22/2025 09:15:11` |
//! | 3 | Textual month | `Nov 22, 2025 09:15:10` |
//! | 4 | Bare epoch | `1732276500` (s), `1732276500123` (ms) |
//!
//! Timestamps written without an offset are read as UTC. A leap second
//! (`:60`) is not a valid instant and falls through to the next format.

use chrono::{DateTime, FixedOffset, NaiveDateTime, TimeZone, Timelike, Utc};
use regex::Regex;
use std::sync::LazyLock;

/// Which of the recognised formats produced a timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimestampFormat {
    Iso8601,
    UsDateTime,
    TextualMonth,
    Epoch,
}

/// A timestamp found in a line, with the format that matched it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Detected {
    pub format: TimestampFormat,
    pub timestamp: DateTime<FixedOffset>,
}

struct Matcher {
    format: TimestampFormat,
    pattern: Regex,
}

static MATCHERS: LazyLock<[Matcher; 4]> = LazyLock::new(|| {
    let matcher = |format, pattern: &str| Matcher {
        format,
        pattern: Regex::new(pattern).expect("timestamp pattern must compile"),
    };
    [
        matcher(
            TimestampFormat::Iso8601,
            r"(?P<datetime>[0-9]{4}-[0-9]{2}-[0-9]{2}[T ][0-9]{2}:[0-9]{2}:[0-9]{2}(?:\.[0-9]+)?)(?P<offset>Z|[+-][0-9]{2}:?[0-9]{2})?",
        ),
        matcher(
            TimestampFormat::UsDateTime,
            r"[0-9]{2}/[0-9]{2}/[0-9]{4} [0-9]{2}:[0-9]{2}:[0-9]{2}",
        ),
        matcher(
            TimestampFormat::TextualMonth,
            r"[A-Za-z]{3} [0-9]{2}, [0-9]{4} [0-9]{2}:[0-9]{2}:[0-9]{2}",
        ),
        matcher(TimestampFormat::Epoch, r"[0-9]{10,13}"),
    ]
});

/// Digit count from which a bare epoch value is read as milliseconds.
const EPOCH_MILLIS_DIGITS: usize = 11;

/// Return the first timestamp in `line`, trying formats in priority order.
pub fn extract_timestamp(line: &str) -> Option<DateTime<FixedOffset>> {
    detect(line).map(|detected| detected.timestamp)
}

/// Like [`extract_timestamp`] but also reports which format matched.
pub fn detect(line: &str) -> Option<Detected> {
    MATCHERS.iter().find_map(|matcher| {
        let timestamp = match matcher.format {
            TimestampFormat::Iso8601 => {
                let caps = matcher.pattern.captures(line)?;
                parse_iso8601(&caps["datetime"], caps.name("offset").map(|m| m.as_str()))
            }
            TimestampFormat::UsDateTime => {
                parse_naive_utc(matcher.pattern.find(line)?.as_str(), "%m/%d/%Y %H:%M:%S")
            }
            TimestampFormat::TextualMonth => {
                parse_naive_utc(matcher.pattern.find(line)?.as_str(), "%b %d, %Y %H:%M:%S")
            }
            TimestampFormat::Epoch => parse_epoch(matcher.pattern.find(line)?.as_str()),
        }?;
        Some(Detected {
            format: matcher.format,
            timestamp,
        })
    })
}

fn parse_iso8601(datetime: &str, offset: Option<&str>) -> Option<DateTime<FixedOffset>> {
    let naive = parse_naive(&datetime.replacen(' ', "T", 1), "%Y-%m-%dT%H:%M:%S%.f")?;
    let offset = match offset {
        None | Some("Z") => FixedOffset::east_opt(0)?,
        Some(raw) => parse_offset(raw)?,
    };
    offset.from_local_datetime(&naive).single()
}

/// Parse `+HH:MM` or `+HHMM`.
fn parse_offset(raw: &str) -> Option<FixedOffset> {
    let sign = match raw.as_bytes().first()? {
        b'+' => 1,
        b'-' => -1,
        _ => return None,
    };
    let digits: String = raw[1..].chars().filter(|c| *c != ':').collect();
    let hours: i32 = digits.get(..2)?.parse().ok()?;
    let minutes: i32 = digits.get(2..4)?.parse().ok()?;
    if minutes >= 60 {
        return None;
    }
    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
}

fn parse_naive_utc(candidate: &str, format: &str) -> Option<DateTime<FixedOffset>> {
    parse_naive(candidate, format).map(|naive| naive.and_utc().fixed_offset())
}

/// chrono stores a parsed `:60` as a nanosecond overflow of second 59.
fn parse_naive(candidate: &str, format: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(candidate, format)
        .ok()
        .filter(|naive| naive.nanosecond() < 1_000_000_000)
}

fn parse_epoch(digits: &str) -> Option<DateTime<FixedOffset>> {
    let value: i64 = digits.parse().ok()?;
    let millis = if digits.len() >= EPOCH_MILLIS_DIGITS {
        value
    } else {
        value.checked_mul(1000)?
    };
    Utc.timestamp_millis_opt(millis)
        .single()
        .map(|ts| ts.fixed_offset())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
