//! Normalizer — masks the variable parts of a message to produce a clustering key.
//!
//! Five rewrite rules run in a fixed order, each over the previous rule's
//! output:
//!
//! 1. digit runs → `N`
//! 2. `0x…` hex literals → `HEX`
//! 3. `"…"` → `STR`
//! 4. `'…'` → `STR`
//! 5. 8-4-4-4-12 UUIDs → `UUID`
//!
//! Because rule 1 runs first, a hex literal always loses its leading `0` and
//! most UUIDs lose their digits before rules 2 and 5 see them. Existing
//! cluster keys depend on this, so the order must not change.

use regex::Regex;
use std::sync::LazyLock;

struct MaskRule {
    pattern: Regex,
    replacement: &'static str,
}

static RULES: LazyLock<[MaskRule; 5]> = LazyLock::new(|| {
    let rule = |pattern: &str, replacement| MaskRule {
        pattern: Regex::new(pattern).expect("mask pattern must compile"),
        replacement,
    };
    [
        rule(r"[0-9]+", "N"),
        rule(r"0x[0-9a-fA-F]+", "HEX"),
        rule(r#""[^"]*""#, "STR"),
        rule(r"'[^']*'", "STR"),
        rule(
            r"(?i)\b[0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{12}\b",
            "UUID",
        ),
    ]
});

/// Return the clustering key for `message`.
pub fn normalize_message(message: &str) -> String {
    RULES.iter().fold(message.to_string(), |working, rule| {
        rule.pattern
            .replace_all(&working, rule.replacement)
            .into_owned()
    })
}
