use futures::future::BoxFuture;
use reqwest::StatusCode;
use reqwest::header::CONTENT_TYPE;

use crate::{
    core::{ArticleSource, FinlightClient, NewsError, client::API_KEY_HEADER},
    news::wire::{self, ArticleRecord},
};

async fn fetch_articles(
    client: &FinlightClient,
    query: &str,
) -> Result<Vec<ArticleRecord>, NewsError> {
    let payload = wire::ArticleRequest {
        query,
        page_size: client.page_size().to_string(),
    };

    let resp = client
        .http()
        .post(client.base_url().clone())
        .header(CONTENT_TYPE, "application/json")
        .header(API_KEY_HEADER, client.api_key())
        .json(&payload)
        .send()
        .await?;

    let status = resp.status();
    tracing::debug!(status = status.as_u16(), "finlight response received");

    if status != StatusCode::OK {
        // The body is diagnostic only; a failed read leaves it empty.
        let body = resp.text().await.unwrap_or_default();
        return Err(NewsError::Status {
            status: status.as_u16(),
            body,
        });
    }

    let body = resp.text().await?;
    let envelope: wire::ArticlesEnvelope = serde_json::from_str(&body)?;
    Ok(envelope.articles)
}

impl ArticleSource for FinlightClient {
    fn fetch_articles<'a>(
        &'a self,
        query: &'a str,
    ) -> BoxFuture<'a, Result<Vec<ArticleRecord>, NewsError>> {
        Box::pin(fetch_articles(self, query))
    }
}
