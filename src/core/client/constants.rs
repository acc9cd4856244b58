//! Centralized constants for the Finlight endpoint and request defaults.

/// UA sent with every provider request.
pub(crate) const USER_AGENT: &str = concat!("fin-news/", env!("CARGO_PKG_VERSION"));

/// Finlight article search endpoint.
pub(crate) const DEFAULT_BASE_URL: &str = "https://api.finlight.me/v2/articles";

/// Header carrying the Finlight API key.
pub(crate) const API_KEY_HEADER: &str = "X-API-KEY";

/// Number of articles requested per query.
pub(crate) const DEFAULT_PAGE_SIZE: u32 = 5;
