//! File feed — reads a whole log file from disk.

use crate::{read_limited, Feed, FeedError, FeedText};
use logsift_core::config::InputConfig;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct FileFeed {
    path: PathBuf,
}

impl FileFeed {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Feed for FileFeed {
    /// The file name without its directory, falling back to the full path.
    fn name(&self) -> String {
        self.path
            .file_name()
            .unwrap_or(self.path.as_os_str())
            .to_string_lossy()
            .into_owned()
    }

    fn read_text(&mut self, limits: &InputConfig) -> Result<FeedText, FeedError> {
        let file = std::fs::File::open(&self.path).map_err(|source| FeedError::Io {
            name: self.path.display().to_string(),
            source,
        })?;
        read_limited(&self.name(), file, limits)
    }
}
