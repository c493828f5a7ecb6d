//! Chat API handler

use axum::{extract::State, Json};
use oncode_common::{ApiJson, Result};
use serde::{Deserialize, Serialize};

use crate::api::state::ConversationsState;
use crate::domain::entities::{ProblemContext, Turn};
use crate::orchestrator::ChatInput;

/// Request for one chat exchange
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    /// Current editor contents, if the user attached them
    #[serde(default)]
    pub code: Option<String>,
    /// Free-form question
    pub message: String,
    /// Key of the conversation
    pub problem_id: String,
    /// Scraped problem context, used on the first exchange only
    #[serde(default)]
    pub problem_data: Option<ProblemContext>,
}

impl From<ChatRequest> for ChatInput {
    fn from(req: ChatRequest) -> Self {
        Self {
            problem_id: req.problem_id,
            message: req.message,
            code: req.code,
            problem_data: req.problem_data,
        }
    }
}

/// Response for a chat exchange
#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub response: String,
    pub conversation_history: Vec<Turn>,
}

/// Append the user's turns to the problem conversation and return the reply
pub async fn send_chat(
    State(state): State<ConversationsState>,
    ApiJson(req): ApiJson<ChatRequest>,
) -> Result<Json<ChatResponse>> {
    let outcome = state.chat.chat(req.into()).await?;

    Ok(Json(ChatResponse {
        response: outcome.response,
        conversation_history: outcome.conversation_history,
    }))
}
