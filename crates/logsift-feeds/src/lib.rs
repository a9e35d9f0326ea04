//! logsift-feeds — text sources for logsift.
//!
//! A feed reads an entire source into memory and hands back text ready for
//! [`logsift_core::parse_log`]. Binary content and oversized inputs are refused
//! here so the core only ever sees text.

pub mod file;
pub mod stdin;

use logsift_core::config::InputConfig;
use std::io::Read;
use std::path::PathBuf;

pub use file::FileFeed;
pub use stdin::ReaderFeed;

const BOM: char = '\u{feff}';

/// How many leading bytes are inspected for NUL bytes.
pub const SNIFF_LEN: usize = 8 * 1024;

/// Where log text comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    File(PathBuf),
    Stdin,
}

/// Text read from a feed, with a display name for the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedText {
    pub name: String,
    pub text: String,
}

#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    #[error("failed to read {name}: {source}")]
    Io {
        name: String,
        #[source]
        source: std::io::Error,
    },
    #[error("{name} looks like a binary file")]
    Binary { name: String },
    #[error("{name} is larger than the configured limit of {limit} bytes")]
    TooLarge { name: String, limit: u64 },
}

/// Trait implemented by each log text source.
pub trait Feed {
    /// Display name of the source (file name, `<stdin>`).
    fn name(&self) -> String;

    /// Read the whole source, enforcing `limits`.
    fn read_text(&mut self, limits: &InputConfig) -> Result<FeedText, FeedError>;
}

/// Read `source` to text.
pub fn read_source(source: &Source, limits: &InputConfig) -> Result<FeedText, FeedError> {
    match source {
        Source::File(path) => FileFeed::new(path.clone()).read_text(limits),
        Source::Stdin => ReaderFeed::stdin().read_text(limits),
    }
}

/// Read at most `limits.max_bytes` from `reader` and decode it as text.
pub(crate) fn read_limited<R: Read>(
    name: &str,
    reader: R,
    limits: &InputConfig,
) -> Result<FeedText, FeedError> {
    let mut bytes = Vec::new();
    reader
        .take(limits.max_bytes.saturating_add(1))
        .read_to_end(&mut bytes)
        .map_err(|source| FeedError::Io {
            name: name.to_string(),
            source,
        })?;

    if bytes.len() as u64 > limits.max_bytes {
        tracing::warn!(source = name, limit = limits.max_bytes, "input too large");
        return Err(FeedError::TooLarge {
            name: name.to_string(),
            limit: limits.max_bytes,
        });
    }
    decode(name, &bytes)
}

/// Reject binary content, then decode lossily as UTF-8 without a leading BOM.
pub fn decode(name: &str, bytes: &[u8]) -> Result<FeedText, FeedError> {
    if looks_binary(bytes) {
        tracing::warn!(source = name, "refusing binary input");
        return Err(FeedError::Binary {
            name: name.to_string(),
        });
    }
    let text = String::from_utf8_lossy(bytes);
    let text = text.strip_prefix(BOM).unwrap_or(&text).to_string();
    tracing::debug!(source = name, bytes = bytes.len(), "read log text");
    Ok(FeedText {
        name: name.to_string(),
        text,
    })
}

/// Text files do not contain NUL bytes; the first [`SNIFF_LEN`] bytes decide.
pub fn looks_binary(bytes: &[u8]) -> bool {
    bytes.iter().take(SNIFF_LEN).any(|b| *b == 0)
}
