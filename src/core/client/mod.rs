//! Finlight client surface + builder.
//! Internals are split into `retry` (backoff policy) and `constants` (endpoint + defaults).

mod constants;
pub mod retry;

use crate::core::NewsError;
use constants::{DEFAULT_BASE_URL, DEFAULT_PAGE_SIZE, USER_AGENT};
use reqwest::Client;
use std::fmt;
use std::time::Duration;
use url::Url;

pub(crate) use constants::API_KEY_HEADER;
pub use retry::{Backoff, CacheMode, RetryConfig, with_retry};

/// HTTP client for the Finlight article search API.
///
/// Cloning is cheap: the underlying `reqwest::Client` is reference counted and keeps one
/// connection pool, so a single instance is meant to be shared by every in-flight request.
#[derive(Clone)]
pub struct FinlightClient {
    http: Client,
    base_url: Url,
    api_key: String,
    page_size: u32,
}

impl fmt::Debug for FinlightClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FinlightClient")
            .field("base_url", &self.base_url.as_str())
            .field("api_key", &"<redacted>")
            .field("page_size", &self.page_size)
            .finish_non_exhaustive()
    }
}

impl FinlightClient {
    /// Create a new builder for the given API key.
    pub fn builder(api_key: impl Into<String>) -> FinlightClientBuilder {
        FinlightClientBuilder::new(api_key)
    }

    /* -------- internal getters used by other modules -------- */

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }
    pub(crate) fn base_url(&self) -> &Url {
        &self.base_url
    }
    pub(crate) fn api_key(&self) -> &str {
        &self.api_key
    }
    pub(crate) fn page_size(&self) -> u32 {
        self.page_size
    }
}

/* ----------------------- Builder ----------------------- */

pub struct FinlightClientBuilder {
    api_key: String,
    user_agent: Option<String>,
    base_url: Option<Url>,
    page_size: Option<u32>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
}

impl FinlightClientBuilder {
    fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            user_agent: None,
            base_url: None,
            page_size: None,
            timeout: None,
            connect_timeout: None,
        }
    }

    /// Override the User-Agent.
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Override the article search endpoint (e.g., `https://api.finlight.me/v2/articles`).
    #[must_use]
    pub fn base_url(mut self, url: Url) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Number of articles requested per query. Default: 5.
    #[must_use]
    pub const fn page_size(mut self, n: u32) -> Self {
        self.page_size = Some(n);
        self
    }

    /// Set a global request timeout (overall). Default: none, the retry policy bounds each attempt.
    #[must_use]
    pub const fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Set a connect timeout. Default: none.
    #[must_use]
    pub const fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    /// Build the client.
    ///
    /// # Errors
    ///
    /// Fails if the default endpoint cannot be parsed or the HTTP client cannot be built.
    pub fn build(self) -> Result<FinlightClient, NewsError> {
        let base_url = match self.base_url {
            Some(url) => url,
            None => Url::parse(DEFAULT_BASE_URL)?,
        };

        let mut httpb =
            reqwest::Client::builder().user_agent(self.user_agent.as_deref().unwrap_or(USER_AGENT));

        if let Some(t) = self.timeout {
            httpb = httpb.timeout(t);
        }
        if let Some(ct) = self.connect_timeout {
            httpb = httpb.connect_timeout(ct);
        }

        let http = httpb.build()?;

        Ok(FinlightClient {
            http,
            base_url,
            api_key: self.api_key,
            page_size: self.page_size.unwrap_or(DEFAULT_PAGE_SIZE),
        })
    }
}
