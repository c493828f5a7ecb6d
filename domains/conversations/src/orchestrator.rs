//! Chat orchestration
//!
//! Extends a problem's stored conversation with the user's turns, sends the
//! whole conversation to the model, and records the reply. Also hosts the
//! stateless one-shot analysis.

use std::sync::Arc;

use oncode_common::{Error, Result};
use oncode_llm::{CompletionRequest, LlmError, LlmService};

use crate::domain::analysis::Analysis;
use crate::domain::entities::{ProblemContext, Turn};
use crate::domain::prompt;
use crate::repository::ConversationStore;

/// One chat exchange requested by the client
#[derive(Debug, Clone, PartialEq)]
pub struct ChatInput {
    pub problem_id: String,
    pub message: String,
    pub code: Option<String>,
    pub problem_data: Option<ProblemContext>,
}

/// Result of a chat exchange
#[derive(Debug, Clone, PartialEq)]
pub struct ChatOutcome {
    pub response: String,
    pub conversation_history: Vec<Turn>,
}

#[derive(Clone)]
pub struct ChatOrchestrator {
    store: Arc<dyn ConversationStore>,
    llm: Arc<dyn LlmService>,
}

fn upstream(err: LlmError) -> Error {
    Error::Upstream(err.to_string())
}

impl ChatOrchestrator {
    pub fn new(store: Arc<dyn ConversationStore>, llm: Arc<dyn LlmService>) -> Self {
        Self { store, llm }
    }

    /// Run one chat exchange.
    ///
    /// Turns appended before a failing model call stay in the store; a
    /// retry therefore sends the earlier user turns again.
    pub async fn chat(&self, input: ChatInput) -> Result<ChatOutcome> {
        let problem_id = input.problem_id.as_str();

        let initialized = self
            .store
            .initialize(problem_id, input.problem_data.as_ref())
            .await?;

        if let Some(code) = input.code.as_deref().filter(|c| !c.trim().is_empty()) {
            self.store
                .append(problem_id, prompt::code_turn(code))
                .await?;
        }

        self.store
            .append(problem_id, Turn::user(input.message))
            .await?;

        let history = self.store.get(problem_id).await?;
        tracing::info!(
            problem_id,
            turns = history.len(),
            initialized,
            "Sending conversation to model"
        );

        let request = CompletionRequest::new(history.iter().map(Turn::to_llm_message).collect());
        let reply = self.llm.complete(request).await.map_err(|e| {
            tracing::warn!(problem_id, error = %e, "Model call failed");
            upstream(e)
        })?;

        self.store
            .append(problem_id, Turn::assistant(reply.content.clone()))
            .await?;

        let conversation_history = self.store.get(problem_id).await?;

        Ok(ChatOutcome {
            response: reply.content,
            conversation_history,
        })
    }

    /// Stored conversation for `problem_id`, empty if unknown
    pub async fn history(&self, problem_id: &str) -> Result<Vec<Turn>> {
        self.store.get(problem_id).await
    }

    /// One-shot analysis of `code`; nothing is stored
    pub async fn analyze(&self, code: &str, context: &ProblemContext) -> Result<Analysis> {
        let request = CompletionRequest::new(prompt::analysis_messages(code, context));

        let reply = self.llm.complete(request).await.map_err(|e| {
            tracing::warn!(error = %e, "Analysis model call failed");
            upstream(e)
        })?;

        Ok(Analysis::from_reply(&reply.content))
    }
}
