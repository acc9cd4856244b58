use axum::{
    extract::{Query, State},
    response::IntoResponse,
};
use serde::Deserialize;

use crate::server::{
    AppState,
    response::{self, ApiError},
};

#[derive(Debug, Deserialize)]
pub struct NewsQuery {
    pub ativo: Option<String>,
}

pub(super) async fn news_handler(
    State(state): State<AppState>,
    Query(params): Query<NewsQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let ticker = params.ativo.as_deref().map(str::trim).unwrap_or_default();
    if ticker.is_empty() {
        tracing::warn!("request without 'ativo' parameter");
        return Err(ApiError::MissingTicker);
    }

    tracing::info!(ativo = ticker, "fetching news");

    match state.news.retrieve_news(ticker).await {
        Ok(news) => {
            tracing::info!(ativo = ticker, count = news.len(), "news found");
            Ok(response::success(news))
        }
        Err(e) => {
            tracing::error!(ativo = ticker, error = %e, "failed to fetch news");
            Err(ApiError::Internal)
        }
    }
}
