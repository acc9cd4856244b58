//! Key-value stores with expiring entries used by the news service.

mod memory;
mod redis;

pub use memory::MemoryCache;
pub use redis::RedisCache;

use std::time::Duration;

use futures::future::BoxFuture;

use crate::core::NewsError;

/// How long a fetched news list stays fresh.
pub const DEFAULT_TTL: Duration = Duration::from_secs(24 * 60 * 60);

const KEY_PREFIX: &str = "noticias:";

/// Cache key for a ticker query.
///
/// The raw query is used as-is: `"petr4"` and `"PETR4"` are different keys.
#[must_use]
pub fn cache_key(query: &str) -> String {
    format!("{KEY_PREFIX}{query}")
}

/// A string key-value store with per-entry expiry.
///
/// `get` returns `Ok(None)` for a missing or expired key; `Err` is reserved for
/// backend failures so callers can tell the two apart. Implementations are shared
/// across concurrent requests and rely on the backend's single-key atomicity.
pub trait CacheStore: Send + Sync {
    /// Reads the value stored under `key`.
    fn get<'a>(&'a self, key: &'a str) -> BoxFuture<'a, Result<Option<String>, NewsError>>;

    /// Stores `value` under `key`, replacing any previous value, for `ttl`.
    fn set<'a>(
        &'a self,
        key: &'a str,
        value: String,
        ttl: Duration,
    ) -> BoxFuture<'a, Result<(), NewsError>>;
}
