use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use crate::core::{ArticleSource, CacheMode, CacheStore, NewsError, RetryConfig, cache, cache_key};
use crate::news::{NewsBuilder, NewsItem, fetch::fetch_with_retry};

/// Cache-aside news retrieval.
///
/// Holds the provider and the cache store as shared handles: cloning a `NewsService`
/// is cheap and every clone talks to the same connection pools, so one instance can
/// serve any number of concurrent requests.
///
/// # Example
///
/// ```no_run
/// # use std::sync::Arc;
/// # use fin_news::{FinlightClient, MemoryCache, NewsService};
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let client = FinlightClient::builder("my-api-key").build()?;
/// let service = NewsService::builder(Arc::new(client), Arc::new(MemoryCache::new())).build();
///
/// let news = service.retrieve_news("PETR4").await?;
/// println!("{} articles", news.len());
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct NewsService {
    source: Arc<dyn ArticleSource>,
    cache: Arc<dyn CacheStore>,
    retry: RetryConfig,
    cache_ttl: Duration,
}

impl fmt::Debug for NewsService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewsService")
            .field("retry", &self.retry)
            .field("cache_ttl", &self.cache_ttl)
            .finish_non_exhaustive()
    }
}

impl NewsService {
    /// Starts building a service over the given provider and cache store.
    pub fn builder(
        source: Arc<dyn ArticleSource>,
        cache: Arc<dyn CacheStore>,
    ) -> NewsServiceBuilder {
        NewsServiceBuilder {
            source,
            cache,
            retry: None,
            cache_ttl: None,
        }
    }

    /// Returns a per-call builder for `query`.
    pub fn news(&self, query: impl Into<String>) -> NewsBuilder {
        NewsBuilder::new(self, query)
    }

    /// Fetches the news for `query`, serving a fresh cached copy when one exists.
    ///
    /// # Errors
    ///
    /// Returns [`NewsError::InvalidQuery`] for an empty query, or the provider's last
    /// error once the retry budget is spent. Cache failures never surface here.
    #[tracing::instrument(skip(self), err)]
    pub async fn retrieve_news(&self, query: &str) -> Result<Vec<NewsItem>, NewsError> {
        retrieve(self, query, CacheMode::Use, None).await
    }
}

pub struct NewsServiceBuilder {
    source: Arc<dyn ArticleSource>,
    cache: Arc<dyn CacheStore>,
    retry: Option<RetryConfig>,
    cache_ttl: Option<Duration>,
}

impl NewsServiceBuilder {
    /// Overrides the default retry policy for every call.
    #[must_use]
    pub fn retry_policy(mut self, cfg: RetryConfig) -> Self {
        self.retry = Some(cfg);
        self
    }

    /// Overrides how long cached results stay fresh. Default: 24 hours.
    #[must_use]
    pub const fn cache_ttl(mut self, ttl: Duration) -> Self {
        self.cache_ttl = Some(ttl);
        self
    }

    pub fn build(self) -> NewsService {
        NewsService {
            source: self.source,
            cache: self.cache,
            retry: self.retry.unwrap_or_default(),
            cache_ttl: self.cache_ttl.unwrap_or(cache::DEFAULT_TTL),
        }
    }
}

pub(super) async fn retrieve(
    service: &NewsService,
    query: &str,
    mode: CacheMode,
    retry_override: Option<&RetryConfig>,
) -> Result<Vec<NewsItem>, NewsError> {
    if query.is_empty() {
        return Err(NewsError::InvalidQuery);
    }

    let key = cache_key(query);

    if mode.reads()
        && let Some(items) = read_cached(service.cache.as_ref(), &key).await
    {
        tracing::info!(query, source = "cache", count = items.len(), "news served from cache");
        return Ok(items);
    }

    let retry = retry_override.unwrap_or(&service.retry);
    let articles = fetch_with_retry(service.source.as_ref(), query, retry).await?;
    let items: Vec<NewsItem> = articles.into_iter().map(NewsItem::from).collect();

    if mode.writes() {
        write_cached(service.cache.as_ref(), &key, &items, service.cache_ttl).await;
    }

    Ok(items)
}

/// Cache lookup where every failure reads as a miss.
async fn read_cached(cache: &dyn CacheStore, key: &str) -> Option<Vec<NewsItem>> {
    let raw = match cache.get(key).await {
        Ok(Some(raw)) => raw,
        Ok(None) => return None,
        Err(e) => {
            tracing::warn!(key, error = %e, "cache read failed, falling back to provider");
            return None;
        }
    };

    match serde_json::from_str(&raw) {
        Ok(items) => Some(items),
        Err(e) => {
            tracing::warn!(key, error = %e, "cached value is not a news list, ignoring it");
            None
        }
    }
}

/// Best-effort cache population; failures are only logged.
async fn write_cached(cache: &dyn CacheStore, key: &str, items: &[NewsItem], ttl: Duration) {
    let value = match serde_json::to_string(items) {
        Ok(v) => v,
        Err(e) => {
            tracing::warn!(key, error = %e, "could not serialize news for the cache");
            return;
        }
    };

    if let Err(e) = cache.set(key, value, ttl).await {
        tracing::warn!(key, error = %e, "cache write failed");
    }
}
