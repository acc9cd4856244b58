//! Core components of the `fin-news` service.
//!
//! This module contains the foundational building blocks of the crate, including:
//! - The Finlight [`FinlightClient`], its builder and the retry policy.
//! - The primary [`NewsError`] type.
//! - The [`CacheStore`] abstraction with Redis and in-memory backends.
//! - The [`ArticleSource`] seam between the retry loop and the provider.

/// Cache stores (`RedisCache`, `MemoryCache`) and cache key derivation.
pub mod cache;
/// The Finlight client (`FinlightClient`), builder, and retry configuration.
pub mod client;
/// The primary error type (`NewsError`) for the crate.
pub mod error;
/// Service traits abstracting the upstream provider.
pub mod services;

// convenient re-exports so most code can just `use crate::core::FinlightClient`
pub use cache::{CacheStore, MemoryCache, RedisCache, cache_key};
pub use client::{Backoff, CacheMode, FinlightClient, FinlightClientBuilder, RetryConfig};
pub use error::NewsError;
pub use services::ArticleSource;
