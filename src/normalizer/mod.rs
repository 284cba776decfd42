use std::sync::Arc;

use chrono::Utc;
use html_escape::decode_html_entities;

use crate::domain::{Entry, SiteInfo};
use crate::parser::dates::parse_lenient;
use crate::parser::{ParsedFeed, RawEntry};

pub const DEFAULT_MAX_ENTRIES: usize = 5;

const HTML_TYPE: &str = "text/html";
const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Turns raw feed entries into [`Entry`] records, keeping at most
/// `max_entries` per feed.
#[derive(Debug, Clone)]
pub struct Normalizer {
    max_entries: usize,
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_ENTRIES)
    }
}

impl Normalizer {
    pub fn new(max_entries: usize) -> Self {
        Self { max_entries }
    }

    pub fn max_entries(&self) -> usize {
        self.max_entries
    }

    /// Normalize the first `min(entries, max_entries)` entries of a feed.
    pub fn normalize(&self, feed: ParsedFeed) -> Vec<Entry> {
        let site = Arc::new(feed.site);

        feed.entries
            .iter()
            .take(self.max_entries)
            .map(|raw| self.normalize_entry(&site, raw))
            .collect()
    }

    /// Field-level problems fall back to defaults; an entry is never dropped.
    pub fn normalize_entry(&self, site: &Arc<SiteInfo>, raw: &RawEntry) -> Entry {
        let mut entry = Entry::new(site.clone());

        if let Some(published) = parse_lenient(&raw.published) {
            entry.published = published.with_timezone(&Utc);
            entry.published_display = published.naive_local().format(DISPLAY_FORMAT).to_string();
        } else if !raw.published.is_empty() {
            tracing::debug!("Unparseable date {:?} in {}", raw.published, raw.link);
        }

        entry.link = raw.link.clone();
        entry.title = raw.title.clone();
        entry.author = raw.author.clone();

        entry.summary = if raw.summary_type == HTML_TYPE {
            strip_html(&raw.summary)
        } else {
            raw.summary.clone()
        };

        // Content is kept as-is even when it is HTML.
        entry.content = raw
            .content
            .first()
            .map(|block| block.value.clone())
            .unwrap_or_default();

        entry
    }
}

/// Remove markup and decode entities, collapsing runs of whitespace.
///
/// A `<` only opens a tag when followed by a letter, `/`, `!` or `?`; any
/// other `<` or `>` is text.
pub fn strip_html(html: &str) -> String {
    let mut text = String::with_capacity(html.len());
    let mut in_tag = false;
    let mut last_was_space = false;
    let mut chars = html.chars().peekable();

    while let Some(c) = chars.next() {
        if in_tag {
            if c == '>' {
                in_tag = false;
            }
            continue;
        }

        if c == '<' && chars.peek().is_some_and(|&next| opens_tag(next)) {
            in_tag = true;
        } else if c.is_whitespace() {
            if !last_was_space {
                text.push(' ');
                last_was_space = true;
            }
        } else {
            text.push(c);
            last_was_space = false;
        }
    }

    decode_html_entities(text.trim()).into_owned()
}

fn opens_tag(next: char) -> bool {
    next.is_ascii_alphabetic() || matches!(next, '/' | '!' | '?')
}
