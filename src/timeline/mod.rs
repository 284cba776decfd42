use crate::domain::{Entry, Timeline};

/// Concatenate per-feed entries in feed order and sort newest first.
///
/// The sort is stable, so entries with equal timestamps keep feed order and
/// then their position within the feed.
pub fn merge<I>(feeds: I) -> Timeline
where
    I: IntoIterator<Item = Vec<Entry>>,
{
    let mut entries: Vec<Entry> = feeds.into_iter().flatten().collect();
    entries.sort_by(|a, b| b.published.cmp(&a.published));
    Timeline::from_sorted(entries)
}
