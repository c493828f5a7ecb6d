//! Domain types and pure logic for the Conversations domain

pub mod analysis;
pub mod entities;
pub mod prompt;
