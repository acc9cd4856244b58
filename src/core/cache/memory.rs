use std::collections::HashMap;
use std::time::Duration;

use futures::future::BoxFuture;
use tokio::sync::RwLock;
use tokio::time::Instant;

use super::CacheStore;
use crate::core::NewsError;

#[derive(Debug)]
struct CacheEntry {
    body: String,
    expires_at: Instant,
}

/// Process-local cache store.
///
/// Backs tests and single-instance runs with `CACHE_BACKEND=memory`. Entries are
/// never shared between processes. Expired entries read as absent and are dropped
/// on the next `set`.
#[derive(Debug, Default)]
pub struct MemoryCache {
    map: RwLock<HashMap<String, CacheEntry>>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored entries, including expired ones not yet dropped by a `set`.
    pub async fn len(&self) -> usize {
        self.map.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.map.read().await.is_empty()
    }
}

impl CacheStore for MemoryCache {
    fn get<'a>(&'a self, key: &'a str) -> BoxFuture<'a, Result<Option<String>, NewsError>> {
        Box::pin(async move {
            let guard = self.map.read().await;
            Ok(guard
                .get(key)
                .filter(|entry| Instant::now() < entry.expires_at)
                .map(|entry| entry.body.clone()))
        })
    }

    fn set<'a>(
        &'a self,
        key: &'a str,
        value: String,
        ttl: Duration,
    ) -> BoxFuture<'a, Result<(), NewsError>> {
        Box::pin(async move {
            let now = Instant::now();
            let mut guard = self.map.write().await;
            guard.retain(|_, entry| now < entry.expires_at);
            guard.insert(
                key.to_string(),
                CacheEntry {
                    body: value,
                    expires_at: now + ttl,
                },
            );
            Ok(())
        })
    }
}
