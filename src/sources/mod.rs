//! The ordered list of feed URLs to fetch.
//!
//! The list is a flat text file with one URL per line. Blank lines are
//! ignored; order and duplicates are kept.

use std::path::Path;

use crate::app::{Result, RsrError};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceList {
    sources: Vec<String>,
}

impl SourceList {
    pub fn new(sources: Vec<String>) -> Self {
        sources.into_iter().collect()
    }

    /// Parse line-delimited source text.
    pub fn parse(text: &str) -> Self {
        text.lines().collect()
    }

    /// Load the source list from a file.
    ///
    /// This is the only failure that aborts a timeline build.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| RsrError::SourceList {
            path: path.to_path_buf(),
            source: e,
        })?;

        let list = Self::parse(&content);
        tracing::debug!("Loaded {} sources from {}", list.len(), path.display());
        Ok(list)
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.sources.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.sources
    }
}

impl<S: AsRef<str>> FromIterator<S> for SourceList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let sources = iter
            .into_iter()
            .map(|s| s.as_ref().trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        Self { sources }
    }
}
