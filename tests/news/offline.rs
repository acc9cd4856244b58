use httpmock::{Method::POST, MockServer};
use serde_json::json;

use fin_news::{ArticleSource, FinlightClient, NewsError};

use crate::common::{API_KEY, finlight_url};

fn client_for(server: &MockServer) -> FinlightClient {
    FinlightClient::builder(API_KEY)
        .base_url(finlight_url(server))
        .build()
        .unwrap()
}

#[tokio::test]
async fn offline_articles_request_shape_and_decoding() {
    let server = MockServer::start();

    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/v2/articles")
            .header("x-api-key", API_KEY)
            .header("content-type", "application/json")
            .json_body(json!({ "query": "VALE3", "pageSize": "5" }));
        then.status(200)
            .header("content-type", "application/json")
            .body(
                r#"{
                  "status": "ok",
                  "articles": [
                    { "link": "https://a", "title": "A", "summary": "SA", "publishDate": "2024-05-01T10:00:00Z", "images": ["https://a/1.png", "https://a/2.png"] },
                    { "link": "https://b", "title": "B", "summary": "SB", "publishDate": "2024-05-02", "images": null },
                    { "link": "https://c", "title": "C", "summary": "SC", "publishDate": "yesterday" }
                  ]
                }"#,
            );
    });

    let client = client_for(&server);
    let articles = client.fetch_articles("VALE3").await.unwrap();

    mock.assert();

    assert_eq!(articles.len(), 3);
    assert_eq!(articles[0].link, "https://a");
    assert_eq!(articles[0].publish_date, "2024-05-01T10:00:00Z");
    assert_eq!(articles[0].images, vec!["https://a/1.png", "https://a/2.png"]);
    assert!(articles[1].images.is_empty(), "null images decode as empty");
    assert!(articles[2].images.is_empty(), "missing images decode as empty");
    assert_eq!(articles[2].publish_date, "yesterday");
}

#[tokio::test]
async fn offline_page_size_is_sent_as_string() {
    let server = MockServer::start();

    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/v2/articles")
            .json_body(json!({ "query": "ITUB4", "pageSize": "10" }));
        then.status(200).body(r#"{"articles": []}"#);
    });

    let client = FinlightClient::builder(API_KEY)
        .base_url(finlight_url(&server))
        .page_size(10)
        .build()
        .unwrap();

    let articles = client.fetch_articles("ITUB4").await.unwrap();
    mock.assert();
    assert!(articles.is_empty());
}

#[tokio::test]
async fn offline_non_200_carries_status_and_body() {
    let server = MockServer::start();

    let mock = server.mock(|when, then| {
        when.method(POST).path("/v2/articles");
        then.status(401).body(r#"{"message":"invalid api key"}"#);
    });

    let err = client_for(&server).fetch_articles("PETR4").await.unwrap_err();
    mock.assert();

    match err {
        NewsError::Status { status, body } => {
            assert_eq!(status, 401);
            assert_eq!(body, r#"{"message":"invalid api key"}"#);
        }
        other => panic!("expected Status error, got {other:?}"),
    }
}

#[tokio::test]
async fn offline_other_2xx_is_still_an_error() {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(POST).path("/v2/articles");
        then.status(204);
    });

    let err = client_for(&server).fetch_articles("PETR4").await.unwrap_err();
    assert!(
        matches!(err, NewsError::Status { status: 204, .. }),
        "got {err:?}"
    );
}

#[tokio::test]
async fn offline_malformed_body_is_a_json_error() {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(POST).path("/v2/articles");
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{"articles": [ {"link": 42 } ]"#);
    });

    let err = client_for(&server).fetch_articles("PETR4").await.unwrap_err();
    assert!(matches!(err, NewsError::Json(_)), "got {err:?}");
}

#[tokio::test]
async fn offline_missing_articles_field_is_empty() {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(POST).path("/v2/articles");
        then.status(200).body(r#"{"status": "ok"}"#);
    });

    let articles = client_for(&server).fetch_articles("PETR4").await.unwrap();
    assert!(articles.is_empty());
}

#[tokio::test]
async fn offline_transport_failure_is_an_http_error() {
    // Nothing listens on port 9 of localhost.
    let client = FinlightClient::builder(API_KEY)
        .base_url(url::Url::parse("http://127.0.0.1:9/v2/articles").unwrap())
        .build()
        .unwrap();

    let err = client.fetch_articles("PETR4").await.unwrap_err();
    assert!(matches!(err, NewsError::Http(_)), "got {err:?}");
}
