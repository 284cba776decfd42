use std::sync::Arc;

use crate::app::error::Result;
use crate::config::Config;
use crate::domain::Timeline;
use crate::fetcher::http_fetcher::HttpFetcher;
use crate::fetcher::Fetcher;
use crate::normalizer::Normalizer;
use crate::pipeline::Pipeline;
use crate::sources::SourceList;

/// Wires configuration, the HTTP fetcher and the pipeline together.
pub struct AppContext {
    pub config: Config,
    pub pipeline: Pipeline,
}

impl AppContext {
    pub fn new(config: Config) -> Result<Self> {
        let fetcher: Arc<dyn Fetcher + Send + Sync> = Arc::new(HttpFetcher::new(&config.fetch)?);
        Ok(Self::with_fetcher(config, fetcher))
    }

    pub fn with_fetcher(config: Config, fetcher: Arc<dyn Fetcher + Send + Sync>) -> Self {
        let pipeline = Pipeline::new(fetcher, Normalizer::new(config.max_entries));
        Self { config, pipeline }
    }

    pub fn sources(&self) -> Result<SourceList> {
        SourceList::load(&self.config.feeds_file)
    }

    /// Load the configured source list and build a timeline from it.
    ///
    /// Only a missing or unreadable source list is an error.
    pub async fn build_timeline(&self) -> Result<Timeline> {
        let sources = self.sources()?;
        Ok(self.pipeline.build_timeline(&sources).await)
    }
}
