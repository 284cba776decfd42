use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::SiteInfo;

/// A normalized feed entry.
///
/// `published` is always set; entries whose date could not be read carry
/// [`Entry::sentinel_timestamp`] and an empty `published_display`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Entry {
    pub site: Arc<SiteInfo>,
    pub published: DateTime<Utc>,
    pub published_display: String,
    pub link: String,
    pub title: String,
    pub summary: String,
    pub author: String,
    pub content: String,
}

impl Entry {
    pub fn new(site: Arc<SiteInfo>) -> Self {
        Self {
            site,
            published: Self::sentinel_timestamp(),
            published_display: String::new(),
            link: String::new(),
            title: String::new(),
            summary: String::new(),
            author: String::new(),
            content: String::new(),
        }
    }

    /// The Unix epoch.
    pub fn sentinel_timestamp() -> DateTime<Utc> {
        DateTime::<Utc>::default()
    }

    pub fn has_published(&self) -> bool {
        !self.published_display.is_empty()
    }

    pub fn display_title(&self) -> &str {
        if self.title.is_empty() {
            "(Untitled)"
        } else {
            &self.title
        }
    }

    /// Get the best available body for display
    pub fn display_content(&self) -> &str {
        if self.content.is_empty() {
            &self.summary
        } else {
            &self.content
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry() -> Entry {
        Entry::new(Arc::new(SiteInfo::default()))
    }

    #[test]
    fn test_new_entry_has_sentinel_timestamp() {
        let entry = entry();
        assert_eq!(entry.published.timestamp(), 0);
        assert!(!entry.has_published());
    }

    #[test]
    fn test_display_title_without_title() {
        assert_eq!(entry().display_title(), "(Untitled)");
    }

    #[test]
    fn test_display_content_prefers_content() {
        let mut entry = entry();
        entry.content = "Full content".into();
        entry.summary = "Short summary".into();
        assert_eq!(entry.display_content(), "Full content");
    }

    #[test]
    fn test_display_content_falls_back_to_summary() {
        let mut entry = entry();
        entry.summary = "Short summary".into();
        assert_eq!(entry.display_content(), "Short summary");
    }
}
