//! OnCode Helper API composition root
//!
//! Wires the LLM service and conversation store into the domain router and
//! applies the CORS policy the browser extension depends on.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::Request,
    http::{header, HeaderValue, Method},
    middleware::{self, Next},
    response::Response,
    routing::get,
    Json, Router,
};
use oncode_common::Config;
use oncode_conversations::{ConversationsState, InMemoryConversationStore};
use oncode_llm::{LlmConfig, LlmServiceFactory};
use serde_json::{json, Value};
use tower_http::cors::{AllowHeaders, AllowOrigin, CorsLayer};

/// Preflight cache lifetime granted to browsers
const CORS_MAX_AGE: Duration = Duration::from_secs(86400);

/// Create the main application router from configuration
pub fn create_app(config: &Config) -> Result<Router, anyhow::Error> {
    let llm = LlmServiceFactory::create(LlmConfig::from(config))
        .map_err(|e| anyhow::anyhow!("Failed to create LLM service: {}", e))?;

    let state = ConversationsState::new(
        Arc::new(InMemoryConversationStore::new()),
        Arc::from(llm),
    );

    Ok(build_router(state))
}

/// Build the router around an already assembled domain state
pub fn build_router(state: ConversationsState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        .merge(oncode_conversations::routes().with_state(state))
        .layer(cors_layer())
        .layer(middleware::from_fn(wildcard_origin_for_bare_options))
}

/// CORS policy: any origin (mirrored so credentials are allowed), every
/// common method, any request header, one-day preflight cache.
///
/// Every `OPTIONS` request is answered here as a preflight.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_methods([
            Method::DELETE,
            Method::GET,
            Method::HEAD,
            Method::OPTIONS,
            Method::PATCH,
            Method::POST,
            Method::PUT,
        ])
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
        .max_age(CORS_MAX_AGE)
}

/// `OPTIONS` without an `Origin` header gets no origin from the mirroring
/// policy; answer it with `Access-Control-Allow-Origin: *` instead.
pub async fn wildcard_origin_for_bare_options(request: Request, next: Next) -> Response {
    let bare_options =
        request.method() == Method::OPTIONS && !request.headers().contains_key(header::ORIGIN);

    let mut response = next.run(request).await;

    if bare_options {
        let headers = response.headers_mut();
        headers
            .entry(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .or_insert(HeaderValue::from_static("*"));
        headers
            .entry(header::ACCESS_CONTROL_ALLOW_HEADERS)
            .or_insert(HeaderValue::from_static("content-type"));
    }

    response
}

/// Liveness message read by the extension
async fn root() -> Json<Value> {
    Json(json!({ "message": "Codeforces Helper API is running!" }))
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
