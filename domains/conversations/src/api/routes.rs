//! Route definitions for Conversations domain API

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{analyze, chat, conversations};
use super::state::ConversationsState;

/// Create chat routes
fn chat_routes() -> Router<ConversationsState> {
    Router::new()
        .route("/chat", post(chat::send_chat))
        .route(
            "/conversation/{problem_id}",
            get(conversations::get_conversation),
        )
}

/// Create one-shot analysis routes
fn analyze_routes() -> Router<ConversationsState> {
    Router::new().route("/analyze", post(analyze::analyze_code))
}

/// Create all Conversations domain API routes
pub fn routes() -> Router<ConversationsState> {
    Router::new().merge(chat_routes()).merge(analyze_routes())
}
