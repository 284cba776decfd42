//! Fetch, parse, normalize and merge a list of sources into a [`Timeline`].

use std::sync::Arc;

use crate::domain::Timeline;
use crate::fetcher::parallel::ParallelFetcher;
use crate::fetcher::Fetcher;
use crate::normalizer::Normalizer;
use crate::parser::FeedParser;
use crate::sources::SourceList;
use crate::timeline;

/// Holds no per-run state; one pipeline can build any number of
/// timelines, including concurrently.
#[derive(Clone)]
pub struct Pipeline {
    fetcher: ParallelFetcher,
    parser: FeedParser,
    normalizer: Normalizer,
}

impl Pipeline {
    pub fn new(fetcher: Arc<dyn Fetcher + Send + Sync>, normalizer: Normalizer) -> Self {
        Self {
            fetcher: ParallelFetcher::new(fetcher),
            parser: FeedParser::new(),
            normalizer,
        }
    }

    /// Build one complete timeline snapshot.
    ///
    /// Sources that fail to fetch or parse contribute no entries.
    pub async fn build_timeline(&self, sources: &SourceList) -> Timeline {
        let payloads = self.fetcher.fetch_all(sources.as_slice()).await;
        let fetched = payloads.len();
        let mut fetch_failed = 0;
        let mut parse_failed = 0;

        let mut feeds = Vec::with_capacity(fetched);
        for payload in payloads {
            if !payload.is_ok() {
                fetch_failed += 1;
                continue;
            }

            match self.parser.try_parse(&payload.body) {
                Ok(parsed) => {
                    let entries = self.normalizer.normalize(parsed);
                    tracing::debug!("{} entries from {}", entries.len(), payload.source);
                    feeds.push(entries);
                }
                Err(e) => {
                    tracing::warn!("Failed to parse feed {}: {}", payload.source, e);
                    parse_failed += 1;
                }
            }
        }

        let timeline = timeline::merge(feeds);

        tracing::info!(
            "Built timeline: {} sources, {} failed to fetch, {} failed to parse, {} entries",
            fetched,
            fetch_failed,
            parse_failed,
            timeline.len()
        );

        timeline
    }
}
