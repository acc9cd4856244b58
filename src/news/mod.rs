mod api;
mod fetch;
mod model;
mod service;
mod wire;

pub use fetch::fetch_with_retry;
pub use model::NewsItem;
pub use service::{NewsService, NewsServiceBuilder};
pub use wire::ArticleRecord;

use crate::core::{CacheMode, NewsError, RetryConfig};

/// A builder for fetching news for a single ticker with per-call overrides.
pub struct NewsBuilder {
    service: NewsService,
    query: String,
    cache_mode: CacheMode,
    retry_override: Option<RetryConfig>,
}

impl NewsBuilder {
    /// Creates a new `NewsBuilder` for a given ticker query.
    pub fn new(service: &NewsService, query: impl Into<String>) -> Self {
        Self {
            service: service.clone(),
            query: query.into(),
            cache_mode: CacheMode::Use,
            retry_override: None,
        }
    }

    /// Sets the cache mode for this specific call.
    #[must_use]
    pub const fn cache_mode(mut self, mode: CacheMode) -> Self {
        self.cache_mode = mode;
        self
    }

    /// Overrides the service's retry policy for this specific call.
    #[must_use]
    pub fn retry_policy(mut self, cfg: Option<RetryConfig>) -> Self {
        self.retry_override = cfg;
        self
    }

    /// Executes the request.
    ///
    /// # Errors
    ///
    /// Returns a `NewsError` if the query is empty or the provider keeps failing
    /// until the retry budget is exhausted.
    #[tracing::instrument(skip(self), err, fields(query = %self.query, mode = ?self.cache_mode))]
    pub async fn fetch(self) -> Result<Vec<NewsItem>, NewsError> {
        service::retrieve(
            &self.service,
            &self.query,
            self.cache_mode,
            self.retry_override.as_ref(),
        )
        .await
    }
}
