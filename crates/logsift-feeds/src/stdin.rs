//! Reader feed — drains any `Read` implementation, stdin by default.

use crate::{read_limited, Feed, FeedError, FeedText};
use logsift_core::config::InputConfig;
use std::io::Read;

pub const STDIN_NAME: &str = "<stdin>";

pub struct ReaderFeed<R> {
    name: String,
    reader: R,
}

impl ReaderFeed<std::io::Stdin> {
    pub fn stdin() -> Self {
        Self::new(STDIN_NAME, std::io::stdin())
    }
}

impl<R: Read> ReaderFeed<R> {
    pub fn new(name: impl Into<String>, reader: R) -> Self {
        Self {
            name: name.into(),
            reader,
        }
    }
}

impl<R: Read> Feed for ReaderFeed<R> {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn read_text(&mut self, limits: &InputConfig) -> Result<FeedText, FeedError> {
        read_limited(&self.name, &mut self.reader, limits)
    }
}
