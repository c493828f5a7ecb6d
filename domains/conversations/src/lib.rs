//! Conversations domain: per-problem chat history, prompt synthesis, and
//! one-shot code analysis

pub mod api;
pub mod domain;
pub mod orchestrator;
pub mod repository;

// Re-export domain types at the crate root for convenience
pub use domain::analysis::Analysis;
pub use domain::entities::{ProblemContext, SampleTests, Turn, TurnRole};

pub use orchestrator::{ChatInput, ChatOrchestrator, ChatOutcome};

// Re-export repository types
pub use repository::{ConversationStore, InMemoryConversationStore};

// Re-export API types
pub use api::routes::routes;
pub use api::ConversationsState;
