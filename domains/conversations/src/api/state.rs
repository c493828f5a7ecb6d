//! Conversations domain application state

use std::sync::Arc;

use oncode_llm::LlmService;

use crate::orchestrator::ChatOrchestrator;
use crate::repository::ConversationStore;

/// Application state for the Conversations domain
#[derive(Clone)]
pub struct ConversationsState {
    pub chat: ChatOrchestrator,
}

impl ConversationsState {
    pub fn new(store: Arc<dyn ConversationStore>, llm: Arc<dyn LlmService>) -> Self {
        Self {
            chat: ChatOrchestrator::new(store, llm),
        }
    }
}
