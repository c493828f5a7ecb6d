//! Conversation history API handler

use axum::{
    extract::{Path, State},
    Json,
};
use oncode_common::Result;
use serde::Serialize;

use crate::api::state::ConversationsState;
use crate::domain::entities::Turn;

/// Stored history of one conversation
#[derive(Debug, Serialize)]
pub struct ConversationHistoryResponse {
    pub conversation_history: Vec<Turn>,
}

/// Get the stored conversation for a problem; unknown ids yield an empty list
pub async fn get_conversation(
    State(state): State<ConversationsState>,
    Path(problem_id): Path<String>,
) -> Result<Json<ConversationHistoryResponse>> {
    let conversation_history = state.chat.history(&problem_id).await?;
    Ok(Json(ConversationHistoryResponse {
        conversation_history,
    }))
}
