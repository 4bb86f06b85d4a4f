use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use blog_feed::config::toml_config::BloggerConfig;
use blog_feed::domain::seed::seed_blogs;
use blog_feed::{web, BloggerSource, FeedConfig, FeedService};
use httpmock::prelude::*;
use serde_json::{json, Value};
use tower::ServiceExt;

fn config_for(api_base: String, api_key: Option<&str>, blog_id: Option<&str>) -> FeedConfig {
    FeedConfig {
        blogger: BloggerConfig {
            api_key: api_key.map(str::to_string),
            blog_id: blog_id.map(str::to_string),
            api_base,
            timeout_seconds: 2,
            ..BloggerConfig::default()
        },
        ..FeedConfig::default()
    }
}

async fn call(config: FeedConfig, method: &str) -> (StatusCode, axum::http::HeaderMap, Value) {
    let route = config.feed.route.clone();
    let source = BloggerSource::new(config).unwrap();
    let app = web::router(Arc::new(FeedService::new(source)), &route);

    let request = Request::builder()
        .method(method)
        .uri("/api/blogs")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    let status = response.status();
    let headers = response.headers().clone();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, headers, serde_json::from_slice(&bytes).unwrap())
}

fn seed_json() -> Value {
    serde_json::to_value(seed_blogs()).unwrap()
}

#[tokio::test]
async fn test_end_to_end_blogger_response() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/blogs/blog-1/posts")
            .query_param("key", "key-1")
            .query_param("maxResults", "100")
            .query_param("orderBy", "published");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(json!({
                "items": [{
                    "id": "1",
                    "title": "Hello World!",
                    "content": "<img src=\"https://a/b.jpg\">body",
                    "published": "2025-06-01T10:00:00Z"
                }]
            }));
    });

    let config = config_for(server.base_url(), Some("key-1"), Some("blog-1"));
    let (status, headers, body) = call(config, "GET").await;

    api_mock.assert();
    assert_eq!(status, StatusCode::OK);
    assert_eq!(headers["access-control-allow-origin"], "*");
    assert_eq!(headers["access-control-allow-methods"], "GET");
    assert_eq!(headers["content-type"], "application/json");
    assert_eq!(
        body,
        json!({
            "blogs": [{
                "id": "1",
                "title": "Hello World!",
                "content": "<img src=\"https://a/b.jpg\">body",
                "thumbnail": "https://a/b.jpg",
                "publishedDate": "June 1, 2025",
                "publishedDateISO": "2025-06-01",
                "slug": "hello-world"
            }],
            "source": "blogger"
        })
    );
}

#[tokio::test]
async fn test_blogger_posts_sorted_newest_first() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/blogs/blog-1/posts");
        then.status(200).json_body(json!({
            "items": [
                {"id": "a", "title": "A", "content": "", "published": "2024-02-10T08:00:00Z"},
                {"id": "b", "title": "B", "content": "", "published": "2025-09-01T08:00:00-07:00"},
                {"id": "c", "title": "C", "content": "", "published": "2024-12-31T23:59:59Z"}
            ]
        }));
    });

    let config = config_for(server.base_url(), Some("key-1"), Some("blog-1"));
    let (_, _, body) = call(config, "GET").await;

    assert_eq!(body["source"], "blogger");
    let dates: Vec<&str> = body["blogs"]
        .as_array()
        .unwrap()
        .iter()
        .map(|b| b["publishedDateISO"].as_str().unwrap())
        .collect();
    assert_eq!(dates, vec!["2025-09-01", "2024-12-31", "2024-02-10"]);
}

#[tokio::test]
async fn test_missing_credentials_serves_seed() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET);
        then.status(200);
    });

    let config = config_for(server.base_url(), Some("key-1"), None);
    let (status, headers, body) = call(config, "GET").await;

    api_mock.assert_hits(0);
    assert_eq!(status, StatusCode::OK);
    assert_eq!(headers["access-control-allow-origin"], "*");
    assert_eq!(body["source"], "seed");
    assert_eq!(body["blogs"], seed_json());
}

#[tokio::test]
async fn test_upstream_error_status_serves_seed_fallback() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/blogs/blog-1/posts");
        then.status(500);
    });

    let config = config_for(server.base_url(), Some("key-1"), Some("blog-1"));
    let (status, _, body) = call(config, "GET").await;

    api_mock.assert();
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["source"], "seed-fallback");
    assert_eq!(body["blogs"], seed_json());
}

#[tokio::test]
async fn test_invalid_json_serves_seed_error() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/blogs/blog-1/posts");
        then.status(200).body("{\"items\": [");
    });

    let config = config_for(server.base_url(), Some("key-1"), Some("blog-1"));
    let (status, _, body) = call(config, "GET").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["source"], "seed-error");
    assert_eq!(body["blogs"], seed_json());
}

#[tokio::test]
async fn test_unreachable_upstream_serves_seed_error() {
    // Reserve a port, then release it so nothing is listening there.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let config = config_for(format!("http://{}", addr), Some("key-1"), Some("blog-1"));
    let (status, _, body) = call(config, "GET").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["source"], "seed-error");
    assert_eq!(body["blogs"], seed_json());
}

#[tokio::test]
async fn test_other_methods_are_not_guarded() {
    let config = config_for("http://127.0.0.1:9".to_string(), None, None);
    let (status, headers, body) = call(config, "POST").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(headers["access-control-allow-methods"], "GET");
    assert_eq!(body["source"], "seed");
}

#[tokio::test]
async fn test_empty_item_list_is_blogger() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/blogs/blog-1/posts");
        then.status(200).json_body(json!({"kind": "blogger#postList"}));
    });

    let config = config_for(server.base_url(), Some("key-1"), Some("blog-1"));
    let (_, _, body) = call(config, "GET").await;

    assert_eq!(body, json!({"blogs": [], "source": "blogger"}));
}

#[tokio::test]
async fn test_null_item_list_is_blogger() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/blogs/blog-1/posts");
        then.status(200).json_body(json!({"kind": "blogger#postList", "items": null}));
    });

    let config = config_for(server.base_url(), Some("key-1"), Some("blog-1"));
    let (_, _, body) = call(config, "GET").await;

    assert_eq!(body, json!({"blogs": [], "source": "blogger"}));
}
