//! HTTP boundary: one route translating query strings into news lookups.

pub mod response;
mod routes;

use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use crate::news::NewsService;

/// Path of the news route.
pub const NEWS_PATH: &str = "/fin-news/v1/noticias";

/// Application state shared across handlers.
#[derive(Clone, Debug)]
pub struct AppState {
    pub news: NewsService,
}

pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route(NEWS_PATH, get(routes::news_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}
