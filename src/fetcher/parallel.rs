use std::sync::Arc;

use futures::future::join_all;

use crate::fetcher::{Fetcher, RawPayload};

/// Fans out one task per source and waits for all of them.
///
/// A failure, or a panic, in one task only affects that source's payload.
#[derive(Clone)]
pub struct ParallelFetcher {
    fetcher: Arc<dyn Fetcher + Send + Sync>,
}

impl ParallelFetcher {
    pub fn new(fetcher: Arc<dyn Fetcher + Send + Sync>) -> Self {
        Self { fetcher }
    }

    /// Returns one payload per non-blank source, in input order.
    pub async fn fetch_all(&self, sources: &[String]) -> Vec<RawPayload> {
        let sources: Vec<String> = sources
            .iter()
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect();

        let handles = sources.iter().cloned().map(|source| {
            let fetcher = self.fetcher.clone();

            tokio::spawn(async move {
                match fetcher.fetch(&source).await {
                    Ok(body) => RawPayload::content(source, body),
                    Err(e) => {
                        tracing::warn!("Failed to fetch {}: {}", source, e);
                        RawPayload::failed(source, e)
                    }
                }
            })
        });

        join_all(handles)
            .await
            .into_iter()
            .zip(sources)
            .map(|(joined, source)| match joined {
                Ok(payload) => payload,
                Err(e) => {
                    tracing::error!("Task join error for {}: {}", source, e);
                    RawPayload::failed(source, e)
                }
            })
            .collect()
    }
}
