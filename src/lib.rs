//! fin-news: financial news for asset tickers.
//!
//! Articles come from the Finlight search API, go through a bounded
//! exponential-backoff retry loop and are cached (cache-aside) for 24 hours.
//! The [`server`] module exposes them over HTTP.

pub mod config;
pub mod core;
pub mod logging;
pub mod news;
pub mod server;

pub use config::Config;
pub use crate::core::{
    ArticleSource, Backoff, CacheMode, CacheStore, FinlightClient, MemoryCache, NewsError,
    RedisCache, RetryConfig, cache_key,
};
pub use news::{ArticleRecord, NewsBuilder, NewsItem, NewsService};
