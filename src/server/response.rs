use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::news::NewsItem;

/// Success envelope of the news route.
#[derive(Debug, Serialize)]
pub struct NewsResponse {
    pub noticias: Vec<NewsItem>,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Errors surfaced by the HTTP layer.
///
/// Core failures are collapsed into a generic internal error; provider status codes and
/// bodies stay in the logs.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("missing 'ativo' parameter")]
    MissingTicker,

    #[error("internal error")]
    Internal,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            ApiError::MissingTicker => (
                StatusCode::BAD_REQUEST,
                "Parâmetro 'ativo' é obrigatório",
            ),
            ApiError::Internal => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Erro interno ao processar a requisição",
            ),
        };

        let body = Json(ErrorResponse {
            error: error_message.to_string(),
        });

        (status, body).into_response()
    }
}

pub fn success(noticias: Vec<NewsItem>) -> (StatusCode, Json<NewsResponse>) {
    (StatusCode::OK, Json(NewsResponse { noticias }))
}
