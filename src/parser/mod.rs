pub mod dates;

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use chrono::{DateTime, Utc};
use feed_rs::model::{Entry as FeedEntry, Feed, Link};
use feed_rs::parser::{self, Parser};

use crate::app::{Result, RsrError};
use crate::domain::SiteInfo;

/// One content block of an entry, as found in the feed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContentBlock {
    pub content_type: String,
    pub value: String,
}

/// An entry's fields before normalization. Missing fields are empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawEntry {
    pub published: String,
    pub link: String,
    pub title: String,
    pub summary: String,
    pub summary_type: String,
    pub author: String,
    pub content: Vec<ContentBlock>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedFeed {
    pub site: SiteInfo,
    pub entries: Vec<RawEntry>,
}

/// Parses RSS 0.9x/1.0/2.0, Atom and JSON Feed payloads.
#[derive(Debug, Clone, Default)]
pub struct FeedParser;

impl FeedParser {
    pub fn new() -> Self {
        Self
    }

    /// Parse a payload into site metadata and raw entries.
    ///
    /// Missing fields come back empty; only a payload that is not a feed at
    /// all is an error.
    pub fn try_parse(&self, body: &[u8]) -> Result<ParsedFeed> {
        let seen = DateText::default();
        let feed = feed_parser(&seen)
            .parse(body)
            .map_err(|e| RsrError::FeedParse(e.to_string()))?;

        Ok(ParsedFeed {
            site: site_info(&feed),
            entries: feed
                .entries
                .into_iter()
                .map(|entry| raw_entry(entry, &seen))
                .collect(),
        })
    }
}

/// Timestamp text as written in the feed, keyed by the instant it parsed to.
///
/// feed-rs only hands back UTC instants; the text keeps the original offset.
#[derive(Default, Clone)]
struct DateText(Rc<RefCell<HashMap<DateTime<Utc>, String>>>);

impl DateText {
    fn record(&self, text: &str) -> Option<DateTime<Utc>> {
        let parsed = dates::parse_lenient_utc(text)?;
        self.0
            .borrow_mut()
            .entry(parsed)
            .or_insert_with(|| text.trim().to_string());
        Some(parsed)
    }

    fn text_for(&self, instant: DateTime<Utc>) -> String {
        self.0
            .borrow()
            .get(&instant)
            .cloned()
            .unwrap_or_else(|| instant.to_rfc3339())
    }
}

fn feed_parser(seen: &DateText) -> Parser {
    let seen = seen.clone();
    parser::Builder::new()
        .timestamp_parser(move |text| seen.record(text))
        .build()
}

fn site_info(feed: &Feed) -> SiteInfo {
    SiteInfo {
        title: feed
            .title
            .as_ref()
            .map(|t| t.content.clone())
            .unwrap_or_default(),
        link: preferred_link(&feed.links),
        language: feed.language.clone().unwrap_or_default(),
        image_link: feed
            .logo
            .as_ref()
            .or(feed.icon.as_ref())
            .map(|image| image.uri.clone())
            .unwrap_or_default(),
    }
}

fn raw_entry(entry: FeedEntry, seen: &DateText) -> RawEntry {
    let (summary, summary_type) = entry
        .summary
        .map(|s| (s.content, s.content_type.essence().to_string()))
        .unwrap_or_default();

    let content = entry
        .content
        .and_then(|c| {
            let content_type = c.content_type.essence().to_string();
            c.body.map(|value| ContentBlock {
                content_type,
                value,
            })
        })
        .into_iter()
        .collect();

    RawEntry {
        published: entry
            .published
            .or(entry.updated)
            .map(|instant| seen.text_for(instant))
            .unwrap_or_default(),
        link: preferred_link(&entry.links),
        title: entry.title.map(|t| t.content).unwrap_or_default(),
        summary,
        summary_type,
        author: entry
            .authors
            .into_iter()
            .next()
            .map(|a| a.name)
            .unwrap_or_default(),
        content,
    }
}

/// The `alternate` (or untyped) link, else the first link.
fn preferred_link(links: &[Link]) -> String {
    links
        .iter()
        .find(|l| matches!(l.rel.as_deref(), None | Some("alternate")))
        .or_else(|| links.first())
        .map(|l| l.href.clone())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    const RSS_SAMPLE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0">
  <channel>
    <title>Test Feed</title>
    <link>https://example.com/</link>
    <description>A test feed</description>
    <language>en-us</language>
    <image>
      <url>https://example.com/logo.png</url>
      <title>Test Feed</title>
      <link>https://example.com/</link>
    </image>
    <item>
      <title>Test Item 1</title>
      <link>https://example.com/item1</link>
      <guid>item-1</guid>
      <author>alice@example.com (Alice)</author>
      <pubDate>Mon, 01 Jan 2024 00:00:00 GMT</pubDate>
      <description>This is item 1</description>
    </item>
    <item>
      <title>Test Item 2</title>
      <link>https://example.com/item2</link>
      <guid>item-2</guid>
      <description>This is item 2</description>
    </item>
  </channel>
</rss>"#;

    const ATOM_SAMPLE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<feed xmlns="http://www.w3.org/2005/Atom">
  <title>Atom Test Feed</title>
  <link rel="self" href="https://example.com/feed.atom"/>
  <link rel="alternate" href="https://example.com/"/>
  <id>urn:example:feed</id>
  <updated>2024-01-02T00:00:00Z</updated>
  <icon>https://example.com/favicon.ico</icon>
  <entry>
    <title>Atom Entry 1</title>
    <link href="https://example.com/atom1"/>
    <id>atom-entry-1</id>
    <updated>2024-01-01T00:00:00Z</updated>
    <published>2023-12-31T12:00:00Z</published>
    <author><name>Bob</name></author>
    <summary type="html">&lt;p&gt;Hello &lt;b&gt;World&lt;/b&gt;&lt;/p&gt;</summary>
    <content type="html">&lt;p&gt;Body&lt;/p&gt;</content>
  </entry>
  <entry>
    <title>Atom Entry 2</title>
    <id>atom-entry-2</id>
    <updated>2024-01-02T00:00:00Z</updated>
  </entry>
</feed>"#;

    #[test]
    fn test_parse_rss_site() {
        let parsed = FeedParser::new().try_parse(RSS_SAMPLE.as_bytes()).unwrap();

        assert_eq!(parsed.site.title, "Test Feed");
        assert_eq!(parsed.site.link, "https://example.com/");
        assert_eq!(parsed.site.language, "en-us");
        assert_eq!(parsed.site.image_link, "https://example.com/logo.png");
    }

    #[test]
    fn test_parse_rss_entries() {
        let parsed = FeedParser::new().try_parse(RSS_SAMPLE.as_bytes()).unwrap();

        assert_eq!(parsed.entries.len(), 2);
        let first = &parsed.entries[0];
        assert_eq!(first.title, "Test Item 1");
        assert_eq!(first.link, "https://example.com/item1");
        assert_eq!(first.summary, "This is item 1");
        assert_eq!(
            dates::parse_lenient_utc(&first.published).unwrap().to_rfc3339(),
            "2024-01-01T00:00:00+00:00"
        );

        let second = &parsed.entries[1];
        assert!(second.published.is_empty());
        assert!(second.author.is_empty());
        assert!(second.content.is_empty());
    }

    #[test]
    fn test_parse_atom() {
        let parsed = FeedParser::new().try_parse(ATOM_SAMPLE.as_bytes()).unwrap();

        assert_eq!(parsed.site.title, "Atom Test Feed");
        assert_eq!(parsed.site.link, "https://example.com/");
        assert_eq!(parsed.site.image_link, "https://example.com/favicon.ico");
        assert!(parsed.site.language.is_empty());

        let first = &parsed.entries[0];
        assert_eq!(first.title, "Atom Entry 1");
        assert_eq!(first.link, "https://example.com/atom1");
        assert_eq!(first.author, "Bob");
        assert_eq!(first.summary_type, "text/html");
        assert!(first.summary.contains("<b>World</b>"));
        assert_eq!(first.content.len(), 1);
        assert!(first.content[0].value.contains("<p>Body</p>"));
    }

    #[test]
    fn test_published_falls_back_to_updated() {
        let parsed = FeedParser::new().try_parse(ATOM_SAMPLE.as_bytes()).unwrap();

        let first = dates::parse_lenient_utc(&parsed.entries[0].published).unwrap();
        assert_eq!(first.to_rfc3339(), "2023-12-31T12:00:00+00:00");

        let second = dates::parse_lenient_utc(&parsed.entries[1].published).unwrap();
        assert_eq!(second.to_rfc3339(), "2024-01-02T00:00:00+00:00");
    }

    #[test]
    fn test_published_keeps_text_as_written() {
        let rss = r#"<?xml version="1.0"?>
<rss version="2.0"><channel><title>Dates</title>
  <item><title>offset</title><pubDate>Tue, 02 Jan 2024 09:30:00 +0100</pubDate></item>
  <item><title>utc zone</title><pubDate>Mon, 01 Jan 2024 00:00:00 UTC</pubDate></item>
  <item><title>loose</title><pubDate>Wed, 3 Jan 2024 9:05:00 +0000</pubDate></item>
</channel></rss>"#;
        let parsed = FeedParser::new().try_parse(rss.as_bytes()).unwrap();

        let published: Vec<&str> = parsed.entries.iter().map(|e| e.published.as_str()).collect();
        assert_eq!(
            published,
            vec![
                "Tue, 02 Jan 2024 09:30:00 +0100",
                "Mon, 01 Jan 2024 00:00:00 UTC",
                "Wed, 3 Jan 2024 9:05:00 +0000",
            ]
        );
    }

    #[test]
    fn test_rss_description_is_html_typed() {
        let parsed = FeedParser::new().try_parse(RSS_SAMPLE.as_bytes()).unwrap();
        assert_eq!(parsed.entries[0].summary_type, "text/html");
    }

    #[test]
    fn test_malformed_payload_is_error() {
        let err = FeedParser::new()
            .try_parse(b"<html><body>not a feed</body></html>")
            .unwrap_err();
        assert!(matches!(err, RsrError::FeedParse(_)));
    }

    #[test]
    fn test_binary_garbage_is_error() {
        assert!(FeedParser::new().try_parse(b"\x00\x01garbage").is_err());
    }

    #[test]
    fn test_empty_channel() {
        let rss = r#"<?xml version="1.0"?><rss version="2.0"><channel></channel></rss>"#;
        let parsed = FeedParser::new().try_parse(rss.as_bytes()).unwrap();
        assert_eq!(parsed.site, SiteInfo::default());
        assert!(parsed.entries.is_empty());
    }

    #[test]
    fn test_preferred_link_skips_self() {
        let parsed = FeedParser::new().try_parse(ATOM_SAMPLE.as_bytes()).unwrap();
        assert_ne!(parsed.site.link, "https://example.com/feed.atom");
    }
}
