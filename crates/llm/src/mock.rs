//! Mock LLM Service Implementation
//!
//! Used by `LlmServiceFactory` when provider is `"mock"` and by tests.
//! Returns deterministic responses and records every request it receives.

use std::sync::{Arc, Mutex};

use crate::{CompletionRequest, CompletionResponse, LlmError, LlmService};

const MOCK_MODEL: &str = "mock-model";

#[derive(Debug, Clone)]
enum Behavior {
    /// Echo the last message back
    Echo,
    /// Always answer with fixed text
    Reply(String),
    /// Always fail with the given error
    Fail(LlmError),
}

/// Mock LLM service for testing and offline runs
#[derive(Debug, Clone)]
pub struct MockLlmService {
    behavior: Behavior,
    requests: Arc<Mutex<Vec<CompletionRequest>>>,
}

impl MockLlmService {
    /// Create a mock that echoes the last message
    pub fn new() -> Self {
        Self::with_behavior(Behavior::Echo)
    }

    /// Create a mock that always replies with `content`
    pub fn with_reply(content: impl Into<String>) -> Self {
        Self::with_behavior(Behavior::Reply(content.into()))
    }

    /// Create a mock whose every call fails with `error`
    pub fn failing(error: LlmError) -> Self {
        Self::with_behavior(Behavior::Fail(error))
    }

    fn with_behavior(behavior: Behavior) -> Self {
        Self {
            behavior,
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// All requests received so far, oldest first
    pub fn requests(&self) -> Vec<CompletionRequest> {
        self.requests
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }

    /// Most recent request, if any
    pub fn last_request(&self) -> Option<CompletionRequest> {
        self.requests().pop()
    }
}

impl Default for MockLlmService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl LlmService for MockLlmService {
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, LlmError> {
        tracing::info!(
            messages = request.messages.len(),
            "Mock LLM service processing completion request"
        );

        if let Ok(mut guard) = self.requests.lock() {
            guard.push(request.clone());
        }

        let content = match &self.behavior {
            Behavior::Fail(error) => return Err(error.clone()),
            Behavior::Reply(text) => text.clone(),
            Behavior::Echo => {
                let last_message = request
                    .messages
                    .last()
                    .map(|m| m.content.as_str())
                    .unwrap_or("empty");
                format!("Mock response to: {}", last_message)
            }
        };

        let model = if request.model.is_empty() {
            MOCK_MODEL.to_string()
        } else {
            request.model
        };

        let input_tokens = request
            .messages
            .iter()
            .map(|m| m.content.len() as u32 / 4)
            .sum::<u32>();
        let output_tokens = content.len() as u32 / 4;

        Ok(CompletionResponse {
            content,
            model,
            input_tokens,
            output_tokens,
            stop_reason: "stop".to_string(),
        })
    }

    fn default_model(&self) -> &str {
        MOCK_MODEL
    }
}
