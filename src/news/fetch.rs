use crate::core::{ArticleSource, NewsError, RetryConfig, client::with_retry};
use crate::news::ArticleRecord;

/// Calls `source` for `query` under the retry policy in `cfg`.
///
/// # Errors
///
/// Returns the last upstream error once the retry budget is exhausted.
pub async fn fetch_with_retry(
    source: &dyn ArticleSource,
    query: &str,
    cfg: &RetryConfig,
) -> Result<Vec<ArticleRecord>, NewsError> {
    let result = with_retry(cfg, |_| source.fetch_articles(query)).await;

    match &result {
        Ok(articles) => {
            tracing::info!(query, count = articles.len(), "articles fetched from provider");
        }
        Err(e) => tracing::error!(query, error = %e, "giving up on provider after retries"),
    }

    result
}
