//! Conversation storage for the Conversations domain
//!
//! The orchestrator talks to storage only through `ConversationStore`, so the
//! in-memory map can be swapped for another backing store.

pub mod memory;

use async_trait::async_trait;
use oncode_common::Result;

use crate::domain::entities::{ProblemContext, Turn};

pub use memory::InMemoryConversationStore;

/// Keyed, append-only store of conversation turns.
///
/// Each call is atomic on its own; a sequence of calls is not a transaction.
#[async_trait]
pub trait ConversationStore: Send + Sync {
    /// Turns recorded for `problem_id`, oldest first. Empty if unknown.
    async fn get(&self, problem_id: &str) -> Result<Vec<Turn>>;

    /// Create the conversation if absent. When it holds no turns and a
    /// context is given, append the synthesized system turn.
    ///
    /// Returns `true` if a system turn was written.
    async fn initialize(&self, problem_id: &str, context: Option<&ProblemContext>)
        -> Result<bool>;

    /// Append a turn, creating the conversation if absent
    async fn append(&self, problem_id: &str, turn: Turn) -> Result<()>;

    /// Identifiers of every known conversation, sorted
    async fn problem_ids(&self) -> Result<Vec<String>>;
}
