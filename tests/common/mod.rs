#![allow(dead_code)]

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use fin_news::{ArticleRecord, ArticleSource, CacheStore, MemoryCache, NewsError};
use futures::future::BoxFuture;
use httpmock::{Method::POST, Mock, MockServer};
use tokio::time::Instant;

pub const API_KEY: &str = "test-key";

pub fn article(link: &str, title: &str) -> ArticleRecord {
    ArticleRecord {
        link: link.to_string(),
        title: title.to_string(),
        summary: format!("summary of {title}"),
        publish_date: "2024-01-01".to_string(),
        images: vec![format!("{link}/cover.png")],
    }
}

pub fn finlight_body(articles: &[ArticleRecord]) -> String {
    serde_json::json!({ "status": "ok", "articles": articles }).to_string()
}

/// Mocks `POST /v2/articles` for `query` with the given articles.
pub fn mock_articles<'a>(
    server: &'a MockServer,
    query: &str,
    articles: &[ArticleRecord],
) -> Mock<'a> {
    let body = finlight_body(articles);
    server.mock(|when, then| {
        when.method(POST)
            .path("/v2/articles")
            .header("x-api-key", API_KEY)
            .json_body(serde_json::json!({ "query": query, "pageSize": "5" }));
        then.status(200)
            .header("content-type", "application/json")
            .body(&body);
    })
}

pub fn finlight_url(server: &MockServer) -> url::Url {
    url::Url::parse(&format!("{}/v2/articles", server.base_url())).unwrap()
}

/* ---------------- article sources ---------------- */

/// Fails with a 503 `failures` times, then returns `articles`.
pub struct FlakySource {
    failures: usize,
    articles: Vec<ArticleRecord>,
    calls: AtomicUsize,
    seen_at: Mutex<Vec<Instant>>,
}

impl FlakySource {
    pub fn new(failures: usize, articles: Vec<ArticleRecord>) -> Self {
        Self {
            failures,
            articles,
            calls: AtomicUsize::new(0),
            seen_at: Mutex::new(Vec::new()),
        }
    }

    pub fn ok(articles: Vec<ArticleRecord>) -> Self {
        Self::new(0, articles)
    }

    pub fn always_failing() -> Self {
        Self::new(usize::MAX, Vec::new())
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn seen_at(&self) -> Vec<Instant> {
        self.seen_at.lock().unwrap().clone()
    }
}

impl ArticleSource for FlakySource {
    fn fetch_articles<'a>(
        &'a self,
        _query: &'a str,
    ) -> BoxFuture<'a, Result<Vec<ArticleRecord>, NewsError>> {
        Box::pin(async move {
            let n = self.calls.fetch_add(1, Ordering::SeqCst);
            self.seen_at.lock().unwrap().push(Instant::now());
            if n < self.failures {
                Err(NewsError::Status {
                    status: 503,
                    body: format!("unavailable #{}", n + 1),
                })
            } else {
                Ok(self.articles.clone())
            }
        })
    }
}

/// Never answers.
#[derive(Default)]
pub struct HangingSource {
    calls: AtomicUsize,
}

impl HangingSource {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl ArticleSource for HangingSource {
    fn fetch_articles<'a>(
        &'a self,
        _query: &'a str,
    ) -> BoxFuture<'a, Result<Vec<ArticleRecord>, NewsError>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Box::pin(std::future::pending())
    }
}

/* ---------------- cache spy ---------------- */

/// In-memory cache that records traffic and can be told to fail.
#[derive(Default)]
pub struct SpyCache {
    inner: MemoryCache,
    fail_get: bool,
    fail_set: bool,
    gets: AtomicUsize,
    sets: Mutex<Vec<(String, String, Duration)>>,
}

impl SpyCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_get() -> Self {
        Self {
            fail_get: true,
            ..Self::default()
        }
    }

    pub fn failing_set() -> Self {
        Self {
            fail_set: true,
            ..Self::default()
        }
    }

    pub async fn seed(&self, key: &str, value: &str) {
        self.inner
            .set(key, value.to_string(), Duration::from_secs(60))
            .await
            .unwrap();
    }

    pub fn gets(&self) -> usize {
        self.gets.load(Ordering::SeqCst)
    }

    pub fn sets(&self) -> Vec<(String, String, Duration)> {
        self.sets.lock().unwrap().clone()
    }
}

impl CacheStore for SpyCache {
    fn get<'a>(&'a self, key: &'a str) -> BoxFuture<'a, Result<Option<String>, NewsError>> {
        Box::pin(async move {
            self.gets.fetch_add(1, Ordering::SeqCst);
            if self.fail_get {
                return Err(NewsError::Cache("connection refused".into()));
            }
            self.inner.get(key).await
        })
    }

    fn set<'a>(
        &'a self,
        key: &'a str,
        value: String,
        ttl: Duration,
    ) -> BoxFuture<'a, Result<(), NewsError>> {
        Box::pin(async move {
            self.sets
                .lock()
                .unwrap()
                .push((key.to_string(), value.clone(), ttl));
            if self.fail_set {
                return Err(NewsError::Cache("read-only replica".into()));
            }
            self.inner.set(key, value, ttl).await
        })
    }
}
