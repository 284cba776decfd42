pub mod http_fetcher;
pub mod parallel;

use async_trait::async_trait;

use crate::app::Result;

/// The raw result of retrieving one source.
///
/// A failed retrieval keeps its source and carries the error text with an
/// empty body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawPayload {
    pub source: String,
    pub body: Vec<u8>,
    pub error: Option<String>,
}

impl RawPayload {
    pub fn content(source: impl Into<String>, body: Vec<u8>) -> Self {
        Self {
            source: source.into(),
            body,
            error: None,
        }
    }

    pub fn failed(source: impl Into<String>, error: impl ToString) -> Self {
        Self {
            source: source.into(),
            body: Vec::new(),
            error: Some(error.to_string()),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

#[async_trait]
pub trait Fetcher {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>>;
}
