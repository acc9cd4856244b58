use std::fmt;
use std::time::Duration;

use fred::clients::Pool;
use fred::prelude::*;
use fred::types::{Builder, Expiration};
use futures::future::BoxFuture;

use super::CacheStore;
use crate::core::NewsError;

const POOL_SIZE: usize = 4;
const CONNECTION_TIMEOUT: Duration = Duration::from_secs(5);

/// Redis-backed cache store.
///
/// Wraps a fred connection pool; the pool is safe for concurrent use, so one
/// `RedisCache` is shared by every request of the process.
pub struct RedisCache {
    pool: Pool,
}

impl fmt::Debug for RedisCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RedisCache").finish_non_exhaustive()
    }
}

impl RedisCache {
    /// Connects to the Redis server at `redis_url` (e.g. `redis://127.0.0.1:6379`).
    ///
    /// Waits until every pooled connection is established.
    ///
    /// # Errors
    ///
    /// Returns [`NewsError::Cache`] if the URL is invalid or the server is unreachable.
    pub async fn connect(redis_url: &str) -> Result<Self, NewsError> {
        let config = Config::from_url(redis_url).map_err(cache_error)?;

        let pool = Builder::from_config(config)
            .with_connection_config(|cfg| {
                cfg.connection_timeout = CONNECTION_TIMEOUT;
                cfg.internal_command_timeout = CONNECTION_TIMEOUT;
            })
            .set_policy(ReconnectPolicy::new_exponential(0, 100, 5_000, 2))
            .build_pool(POOL_SIZE)
            .map_err(cache_error)?;

        pool.init().await.map_err(cache_error)?;
        pool.wait_for_connect().await.map_err(cache_error)?;

        tracing::info!(pool_size = POOL_SIZE, "connected to redis");
        Ok(Self { pool })
    }

    /// Maps a TTL onto the `SET` expiration: `PX` (at least 1ms) below one second, `EX` otherwise.
    #[must_use]
    pub fn expiration(ttl: Duration) -> Expiration {
        if ttl < Duration::from_secs(1) {
            Expiration::PX(i64::try_from(ttl.as_millis()).unwrap_or(i64::MAX).max(1))
        } else {
            Expiration::EX(i64::try_from(ttl.as_secs()).unwrap_or(i64::MAX))
        }
    }
}

fn cache_error(e: impl fmt::Display) -> NewsError {
    NewsError::Cache(e.to_string())
}

impl CacheStore for RedisCache {
    fn get<'a>(&'a self, key: &'a str) -> BoxFuture<'a, Result<Option<String>, NewsError>> {
        Box::pin(async move {
            self.pool
                .get::<Option<String>, _>(key)
                .await
                .map_err(cache_error)
        })
    }

    fn set<'a>(
        &'a self,
        key: &'a str,
        value: String,
        ttl: Duration,
    ) -> BoxFuture<'a, Result<(), NewsError>> {
        Box::pin(async move {
            self.pool
                .set::<(), _, _>(key, value, Some(Self::expiration(ttl)), None, false)
                .await
                .map_err(cache_error)
        })
    }
}
