//! CORS and root endpoint integration tests

use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
};
use serde_json::json;

use crate::common::{body_bytes, parse_body, TestApp};

fn preflight(uri: &str, origin: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder()
        .method(Method::OPTIONS)
        .uri(uri)
        .header("access-control-request-method", "POST")
        .header("access-control-request-headers", "content-type");
    if let Some(origin) = origin {
        builder = builder.header("origin", origin);
    }
    builder.body(Body::empty()).unwrap()
}

#[tokio::test]
async fn test_preflight_analyze_fixed_headers_for_any_origin() {
    let app = TestApp::new();

    for origin in [
        "https://codeforces.com",
        "chrome-extension://abcdefghijklmnop",
        "https://leetcode.com",
    ] {
        let resp = app.send(preflight("/analyze", Some(origin))).await;
        assert_eq!(resp.status(), StatusCode::OK, "origin {}", origin);

        let headers = resp.headers();
        assert_eq!(headers["access-control-allow-origin"], origin);
        assert_eq!(headers["access-control-allow-credentials"], "true");
        assert_eq!(headers["access-control-max-age"], "86400");
        assert_eq!(headers["access-control-allow-headers"], "content-type");
        let methods = headers["access-control-allow-methods"].to_str().unwrap();
        for method in ["GET", "POST", "OPTIONS", "PUT", "PATCH", "DELETE", "HEAD"] {
            assert!(methods.contains(method), "missing {} in {}", method, methods);
        }

        assert!(body_bytes(resp).await.is_empty());
    }
}

#[tokio::test]
async fn test_bare_options_analyze() {
    let app = TestApp::new();

    let resp = app.send(preflight("/analyze", None)).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let headers = resp.headers();
    assert_eq!(headers["access-control-allow-origin"], "*");
    assert_eq!(headers["access-control-max-age"], "86400");
    assert_eq!(headers["access-control-allow-credentials"], "true");
    assert_eq!(headers["access-control-allow-headers"], "content-type");
    assert!(headers["access-control-allow-methods"]
        .to_str()
        .unwrap()
        .contains("POST"));
    assert!(body_bytes(resp).await.is_empty());
}

#[tokio::test]
async fn test_options_without_any_request_headers() {
    let app = TestApp::new();

    let req = Request::builder()
        .method(Method::OPTIONS)
        .uri("/analyze")
        .body(Body::empty())
        .unwrap();
    let resp = app.send(req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.headers()["access-control-allow-origin"], "*");
    assert_eq!(resp.headers()["access-control-allow-headers"], "content-type");
    assert_eq!(resp.headers()["access-control-max-age"], "86400");
}

#[tokio::test]
async fn test_get_without_origin_has_no_wildcard() {
    let app = TestApp::new();

    let resp = app.get("/").await;
    assert!(!resp.headers().contains_key("access-control-allow-origin"));
}

#[tokio::test]
async fn test_simple_request_mirrors_origin() {
    let app = TestApp::new();

    let req = Request::builder()
        .method(Method::GET)
        .uri("/conversation/4A")
        .header("origin", "https://codeforces.com")
        .body(Body::empty())
        .unwrap();
    let resp = app.send(req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers()["access-control-allow-origin"],
        "https://codeforces.com"
    );
    assert_eq!(resp.headers()["access-control-allow-credentials"], "true");
}

#[tokio::test]
async fn test_error_responses_carry_cors_headers() {
    let app = TestApp::failing(oncode_llm::LlmError::RateLimit);

    let req = Request::builder()
        .method(Method::POST)
        .uri("/chat")
        .header("origin", "https://codeforces.com")
        .header("content-type", "application/json")
        .body(Body::from(
            json!({"message": "hi", "problem_id": "4A"}).to_string(),
        ))
        .unwrap();
    let resp = app.send(req).await;

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        resp.headers()["access-control-allow-origin"],
        "https://codeforces.com"
    );
}

#[tokio::test]
async fn test_root_message() {
    let app = TestApp::new();

    let resp = app.get("/").await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = parse_body(resp).await;
    assert_eq!(body, json!({"message": "Codeforces Helper API is running!"}));
}

#[tokio::test]
async fn test_health_check() {
    let app = TestApp::new();

    let resp = app.get("/health").await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_bytes(resp).await, b"OK");
}
