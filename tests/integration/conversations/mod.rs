//! Conversation history endpoint integration tests

use axum::http::StatusCode;
use oncode_conversations::ConversationStore;
use serde_json::json;

use crate::common::{parse_body, problem_data, TestApp};

#[tokio::test]
async fn test_unknown_problem_returns_empty_history() {
    let app = TestApp::new();

    let resp = app.get("/conversation/never-seen-999Z").await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = parse_body(resp).await;
    assert_eq!(body, json!({"conversation_history": []}));
}

#[tokio::test]
async fn test_history_matches_last_chat_response() {
    let app = TestApp::new();

    let chat = parse_body(
        app.post_json(
            "/chat",
            json!({"message": "hint?", "problem_id": "4A", "problem_data": problem_data()}),
        )
        .await,
    )
    .await;

    let resp = app.get("/conversation/4A").await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = parse_body(resp).await;
    assert_eq!(body["conversation_history"], chat["conversation_history"]);
}

#[tokio::test]
async fn test_history_lookup_does_not_create_conversation() {
    let app = TestApp::new();

    app.get("/conversation/4A").await;

    assert!(app.store.problem_ids().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_leetcode_slug_problem_id() {
    let app = TestApp::new();

    app.post_json(
        "/chat",
        json!({"message": "hint?", "problem_id": "two-sum", "problem_data": {"statement": "Two Sum"}}),
    )
    .await;

    let body = parse_body(app.get("/conversation/two-sum").await).await;
    assert_eq!(body["conversation_history"].as_array().unwrap().len(), 3);
}
