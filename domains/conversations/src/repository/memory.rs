//! In-memory conversation store
//!
//! Lives for the process lifetime. Nothing is persisted or evicted.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use oncode_common::{Error, Result};

use super::ConversationStore;
use crate::domain::entities::{ProblemContext, Turn};
use crate::domain::prompt;

#[derive(Debug, Default)]
pub struct InMemoryConversationStore {
    conversations: RwLock<HashMap<String, Vec<Turn>>>,
}

impl InMemoryConversationStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned() -> Error {
    Error::Internal("Conversation store lock poisoned".to_string())
}

#[async_trait]
impl ConversationStore for InMemoryConversationStore {
    async fn get(&self, problem_id: &str) -> Result<Vec<Turn>> {
        let conversations = self.conversations.read().map_err(|_| poisoned())?;
        Ok(conversations.get(problem_id).cloned().unwrap_or_default())
    }

    async fn initialize(
        &self,
        problem_id: &str,
        context: Option<&ProblemContext>,
    ) -> Result<bool> {
        let mut conversations = self.conversations.write().map_err(|_| poisoned())?;
        let turns = conversations.entry(problem_id.to_string()).or_default();

        match context {
            Some(context) if turns.is_empty() => {
                turns.push(prompt::system_turn(context));
                tracing::debug!(problem_id, "Initialized conversation with problem context");
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    async fn append(&self, problem_id: &str, turn: Turn) -> Result<()> {
        let mut conversations = self.conversations.write().map_err(|_| poisoned())?;
        conversations
            .entry(problem_id.to_string())
            .or_default()
            .push(turn);
        Ok(())
    }

    async fn problem_ids(&self) -> Result<Vec<String>> {
        let conversations = self.conversations.read().map_err(|_| poisoned())?;
        let mut ids: Vec<String> = conversations.keys().cloned().collect();
        ids.sort();
        Ok(ids)
    }
}
