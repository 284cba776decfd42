use serde::{Deserialize, Serialize};

/// Per-feed metadata shared by every entry of that feed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteInfo {
    pub title: String,
    pub link: String,
    pub language: String,
    pub image_link: String,
}

impl SiteInfo {
    pub fn display_title<'a>(&'a self, fallback: &'a str) -> &'a str {
        if self.title.is_empty() {
            fallback
        } else {
            &self.title
        }
    }
}
