use futures::future::BoxFuture;

use crate::core::NewsError;
use crate::news::ArticleRecord;

/// A trait for services that can search provider articles for a query.
///
/// This abstracts the single upstream call so the retry loop and the cache-aside
/// service can be exercised against test doubles. It is implemented by
/// [`FinlightClient`](crate::core::FinlightClient).
///
/// Implementations must be safe to share between concurrent requests. A call must
/// not retry on its own; dropping the returned future cancels the in-flight request.
pub trait ArticleSource: Send + Sync {
    /// Issues one search for `query` and returns the provider's records in order.
    fn fetch_articles<'a>(
        &'a self,
        query: &'a str,
    ) -> BoxFuture<'a, Result<Vec<ArticleRecord>, NewsError>>;
}
