//! HTTP API layer for the Conversations domain

pub mod handlers;
pub mod routes;
pub mod state;

pub use state::ConversationsState;
