//! LLM service abstraction
//!
//! Defines the `LlmService` trait consumed by the chat orchestrator, the
//! request/response types exchanged with it, and a factory that picks the
//! implementation named by configuration:
//! - `mistral`: Mistral chat completions over HTTPS
//! - `mock`: deterministic in-process responses

pub mod mistral;
pub mod mock;

use oncode_common::config::{Config, PROVIDER_MISTRAL, PROVIDER_MOCK};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use mistral::MistralService;
pub use mock::MockLlmService;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LlmError {
    #[error("LLM configuration error: {0}")]
    Configuration(String),

    #[error("{0}")]
    Request(String),

    #[error("{0}")]
    Response(String),

    #[error("Rate limit exceeded by the LLM provider")]
    RateLimit,

    #[error("LLM request timed out after {0}s")]
    Timeout(u64),
}

/// Role of a chat message sent to the model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LlmRole {
    System,
    User,
    Assistant,
}

impl LlmRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            LlmRole::System => "system",
            LlmRole::User => "user",
            LlmRole::Assistant => "assistant",
        }
    }
}

/// A single chat message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LlmMessage {
    pub role: LlmRole,
    pub content: String,
}

impl LlmMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: LlmRole::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: LlmRole::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: LlmRole::Assistant,
            content: content.into(),
        }
    }
}

/// Completion request: the full ordered message list plus model selection.
/// An empty `model` selects the service default.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    pub model: String,
    pub messages: Vec<LlmMessage>,
}

impl CompletionRequest {
    /// Request using the service's default model
    pub fn new(messages: Vec<LlmMessage>) -> Self {
        Self {
            model: String::new(),
            messages,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CompletionResponse {
    pub content: String,
    pub model: String,
    pub input_tokens: u32,
    pub output_tokens: u32,
    pub stop_reason: String,
}

/// Settings shared by LLM service implementations
#[derive(Debug, Clone)]
pub struct LlmConfig {
    pub provider: String,
    pub api_key: String,
    pub default_model: String,
    pub base_url: Option<String>,
    pub timeout_secs: Option<u64>,
}

impl From<&Config> for LlmConfig {
    fn from(config: &Config) -> Self {
        Self {
            provider: config.llm_provider.clone(),
            api_key: config.mistral_api_key.clone().unwrap_or_default(),
            default_model: config.mistral_model.clone(),
            base_url: Some(config.mistral_base_url.clone()),
            timeout_secs: config.llm_timeout_secs,
        }
    }
}

/// External chat-completion service
#[async_trait::async_trait]
pub trait LlmService: Send + Sync {
    /// Send the ordered message list and return the model's single reply
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, LlmError>;

    /// Model used when a request leaves `model` empty
    fn default_model(&self) -> &str;
}

/// LLM service factory
pub struct LlmServiceFactory;

impl LlmServiceFactory {
    /// Create the LLM service named by `config.provider`
    pub fn create(config: LlmConfig) -> Result<Box<dyn LlmService>, LlmError> {
        match config.provider.as_str() {
            PROVIDER_MISTRAL => {
                if config.api_key.trim().is_empty() {
                    return Err(LlmError::Configuration(
                        "MISTRAL_API_KEY is required for the mistral provider".to_string(),
                    ));
                }
                tracing::info!(model = %config.default_model, "Creating Mistral LLM service");
                Ok(Box::new(MistralService::new(config)?))
            }
            PROVIDER_MOCK => {
                tracing::info!("Creating mock LLM service");
                Ok(Box::new(MockLlmService::new()))
            }
            provider => Err(LlmError::Configuration(format!(
                "Unknown LLM provider: {}. Supported providers: {}, {}",
                provider, PROVIDER_MISTRAL, PROVIDER_MOCK
            ))),
        }
    }
}
