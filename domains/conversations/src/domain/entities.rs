//! Domain entities for the Conversations domain
//!
//! A conversation is an append-only list of turns keyed by problem
//! identifier. Problem context arrives with requests and is only used to
//! synthesize prompts; it is never stored on its own.

use oncode_llm::{LlmMessage, LlmRole};
use serde::{Deserialize, Serialize};

/// Turn role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TurnRole {
    System,
    User,
    Assistant,
}

impl std::fmt::Display for TurnRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TurnRole::System => write!(f, "system"),
            TurnRole::User => write!(f, "user"),
            TurnRole::Assistant => write!(f, "assistant"),
        }
    }
}

impl From<TurnRole> for LlmRole {
    fn from(role: TurnRole) -> Self {
        match role {
            TurnRole::System => LlmRole::System,
            TurnRole::User => LlmRole::User,
            TurnRole::Assistant => LlmRole::Assistant,
        }
    }
}

/// One message unit in a conversation. Serialized as `{role, content}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    pub role: TurnRole,
    pub content: String,
}

impl Turn {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: TurnRole::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: TurnRole::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: TurnRole::Assistant,
            content: content.into(),
        }
    }

    pub fn to_llm_message(&self) -> LlmMessage {
        LlmMessage {
            role: self.role.into(),
            content: self.content.clone(),
        }
    }
}

/// Sample tests scraped from the problem page. Inputs and outputs pair up
/// by position; either list may be shorter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SampleTests {
    #[serde(default)]
    pub inputs: Vec<String>,
    #[serde(default)]
    pub outputs: Vec<String>,
}

impl SampleTests {
    pub fn is_empty(&self) -> bool {
        self.inputs.is_empty() && self.outputs.is_empty()
    }
}

/// Problem context sent by the extension as `problem_data`.
///
/// Every field is independently optional; unknown fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProblemContext {
    #[serde(default)]
    pub statement: Option<String>,
    #[serde(default)]
    pub input_spec: Option<String>,
    #[serde(default)]
    pub output_spec: Option<String>,
    #[serde(default)]
    pub sample_tests: Option<SampleTests>,
}

impl ProblemContext {
    pub fn statement(&self) -> &str {
        self.statement.as_deref().unwrap_or_default()
    }

    pub fn input_spec(&self) -> &str {
        self.input_spec.as_deref().unwrap_or_default()
    }

    pub fn output_spec(&self) -> &str {
        self.output_spec.as_deref().unwrap_or_default()
    }

    /// Sample tests, if any were supplied and at least one list is non-empty
    pub fn samples(&self) -> Option<&SampleTests> {
        self.sample_tests.as_ref().filter(|s| !s.is_empty())
    }
}
