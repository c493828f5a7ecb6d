//! One-shot analysis API handler

use axum::{extract::State, Json};
use oncode_common::{ApiJson, Result};
use serde::Deserialize;

use crate::api::state::ConversationsState;
use crate::domain::analysis::Analysis;
use crate::domain::entities::ProblemContext;

/// Request for a one-shot code analysis
#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub code: String,
    pub problem_data: ProblemContext,
}

/// Analyze code against the problem without touching any conversation
pub async fn analyze_code(
    State(state): State<ConversationsState>,
    ApiJson(req): ApiJson<AnalyzeRequest>,
) -> Result<Json<Analysis>> {
    let analysis = state.chat.analyze(&req.code, &req.problem_data).await?;
    Ok(Json(analysis))
}
