//! Severity classification.
//!
//! Keyword groups are tried from most to least severe; the first group with a
//! case-insensitive whole-word hit anywhere in the line decides the level.
//! Lines without any keyword are informational.

use crate::types::Severity;
use regex::Regex;
use std::sync::LazyLock;

static CLASSIFIERS: LazyLock<[(Severity, Regex); 6]> = LazyLock::new(|| {
    let group = |level, pattern: &str| {
        (
            level,
            Regex::new(pattern).expect("severity pattern must compile"),
        )
    };
    [
        group(Severity::Fatal, r"(?i)\b(?:FATAL|CRITICAL)\b"),
        group(Severity::Error, r"(?i)\b(?:ERROR|ERR)\b"),
        group(Severity::Warn, r"(?i)\b(?:WARN|WARNING)\b"),
        group(Severity::Info, r"(?i)\b(?:INFO|INFORMATION)\b"),
        group(Severity::Debug, r"(?i)\b(?:DEBUG|DBG)\b"),
        group(Severity::Trace, r"(?i)\bTRACE\b"),
    ]
});

/// Classify `line`, defaulting to [`Severity::Info`].
pub fn classify(line: &str) -> Severity {
    CLASSIFIERS
        .iter()
        .find(|(_, pattern)| pattern.is_match(line))
        .map_or(Severity::Info, |(level, _)| *level)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("2025-11-22T09:15:03.124Z INFO Server start", Severity::Info)]
    #[case("kernel: CRITICAL temperature", Severity::Fatal)]
    #[case("fatal: repository not found", Severity::Fatal)]
    #[case("[err] disk full", Severity::Error)]
    #[case("Warning: low memory", Severity::Warn)]
    #[case("information only", Severity::Info)]
    #[case("dbg: entering loop", Severity::Debug)]
    #[case("Trace id collected", Severity::Trace)]
    fn keyword_groups(#[case] line: &str, #[case] expected: Severity) {
        assert_eq!(classify(line), expected);
    }

    #[test]
    fn higher_priority_group_wins_regardless_of_position() {
        assert_eq!(classify("INFO retrying after ERROR"), Severity::Error);
        assert_eq!(classify("DEBUG warn threshold crossed"), Severity::Warn);
    }

    #[test]
    fn keywords_must_be_whole_words() {
        assert_eq!(classify("ERRORS were suppressed"), Severity::Info);
        assert_eq!(classify("terror in the debugger"), Severity::Info);
        assert_eq!(classify("error_code=7"), Severity::Info);
    }

    #[test]
    fn punctuation_delimits_words() {
        assert_eq!(classify("level=error msg=boom"), Severity::Error);
        assert_eq!(classify("[WARN]"), Severity::Warn);
    }

    #[test]
    fn defaults_to_info() {
        assert_eq!(
            classify("No severity token on this line but still informative content"),
            Severity::Info
        );
        assert_eq!(classify(""), Severity::Info);
    }
}
