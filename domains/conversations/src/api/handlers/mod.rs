//! Conversations domain request handlers

pub mod analyze;
pub mod chat;
pub mod conversations;
