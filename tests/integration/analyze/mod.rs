//! One-shot analysis endpoint integration tests

use axum::http::StatusCode;
use oncode_conversations::ConversationStore;
use oncode_llm::{LlmError, LlmRole};
use serde_json::json;

use crate::common::{parse_body, problem_data, TestApp};

fn analyze_body() -> serde_json::Value {
    json!({
        "code": "w = int(input())\nprint('YES' if w % 2 == 0 else 'NO')",
        "problem_data": problem_data()
    })
}

#[tokio::test]
async fn test_reply_lines_split_in_half() {
    let app = TestApp::replying(
        "- w = 2 is even but cannot be split into two even parts\n\
         - Check w > 2\n\
         \n\
         - The solution is O(1)\n\
         - Consider reading input with sys.stdin",
    );

    let resp = app.post_json("/analyze", analyze_body()).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = parse_body(resp).await;
    assert_eq!(
        body,
        json!({
            "suggestions": [
                "w = 2 is even but cannot be split into two even parts",
                "Check w > 2"
            ],
            "hints": [
                "The solution is O(1)",
                "Consider reading input with sys.stdin"
            ]
        })
    );
}

#[tokio::test]
async fn test_counts_follow_positional_split() {
    for n in [2usize, 3, 7, 10] {
        let reply = (1..=n)
            .map(|i| format!("{}. point", i))
            .collect::<Vec<_>>()
            .join("\n");
        let app = TestApp::replying(&reply);

        let body = parse_body(app.post_json("/analyze", analyze_body()).await).await;
        let suggestions = body["suggestions"].as_array().unwrap().len();
        let hints = body["hints"].as_array().unwrap().len();

        assert_eq!(suggestions, n / 2, "n = {}", n);
        assert_eq!(suggestions + hints, n, "n = {}", n);
    }
}

#[tokio::test]
async fn test_empty_reply_uses_placeholders() {
    let app = TestApp::replying("\n  \n");

    let body = parse_body(app.post_json("/analyze", analyze_body()).await).await;
    assert_eq!(
        body,
        json!({
            "suggestions": ["No suggestions available"],
            "hints": ["No hints available"]
        })
    );
}

#[tokio::test]
async fn test_prompt_is_single_system_and_user_pair() {
    let app = TestApp::replying("a\nb");

    app.post_json("/analyze", analyze_body()).await;

    let sent = app.llm.last_request().unwrap();
    assert_eq!(sent.messages.len(), 2);
    assert_eq!(sent.messages[0].role, LlmRole::System);
    assert_eq!(sent.messages[1].role, LlmRole::User);
    assert!(sent.messages[1].content.contains("A. Watermelon"));
    assert!(sent.messages[1].content.contains("w % 2 == 0"));

    // Analysis never touches stored conversations
    assert!(app.store.problem_ids().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_model_failure_returns_500_with_error_text() {
    let app = TestApp::failing(LlmError::Request(
        "HTTP request failed: connection refused".to_string(),
    ));

    let resp = app.post_json("/analyze", analyze_body()).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = parse_body(resp).await;
    assert!(body["error"]
        .as_str()
        .unwrap()
        .contains("connection refused"));
}

#[tokio::test]
async fn test_missing_problem_data_is_client_error() {
    let app = TestApp::new();

    let resp = app.post_json("/analyze", json!({"code": "x"})).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert!(app.llm.requests().is_empty());
}

#[tokio::test]
async fn test_empty_problem_data_object_is_accepted() {
    let app = TestApp::replying("a\nb");

    let resp = app
        .post_json("/analyze", json!({"code": "x", "problem_data": {}}))
        .await;
    assert_eq!(resp.status(), StatusCode::OK);
}
