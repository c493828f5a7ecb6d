//! Configuration management following 12-factor app principles
//!
//! All configuration is loaded from environment variables (optionally seeded
//! from a `.env` file) to ensure clean separation between code and config.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::env;

/// Provider name that talks to the real Mistral API
pub const PROVIDER_MISTRAL: &str = "mistral";

/// Provider name that uses the in-process mock
pub const PROVIDER_MOCK: &str = "mock";

const DEFAULT_MODEL: &str = "mistral-medium";
const DEFAULT_BASE_URL: &str = "https://api.mistral.ai";
const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8000;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// LLM provider: "mistral" or "mock"
    pub llm_provider: String,

    /// Mistral API key, required for the "mistral" provider
    pub mistral_api_key: Option<String>,
    pub mistral_model: String,
    pub mistral_base_url: String,

    /// Upper bound on a single completion call; `None` waits indefinitely
    pub llm_timeout_secs: Option<u64>,

    /// Runtime configuration
    pub host: String,
    pub port: u16,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // Load .env file if it exists

        let llm_provider = env::var("LLM_PROVIDER")
            .map(|p| p.trim().to_lowercase())
            .unwrap_or_else(|_| PROVIDER_MISTRAL.to_string());

        let mistral_api_key = env::var("MISTRAL_API_KEY")
            .ok()
            .filter(|k| !k.trim().is_empty());

        match llm_provider.as_str() {
            PROVIDER_MISTRAL if mistral_api_key.is_none() => {
                return Err(anyhow::anyhow!(
                    "MISTRAL_API_KEY not found in environment variables"
                ));
            }
            PROVIDER_MISTRAL | PROVIDER_MOCK => {}
            other => {
                return Err(anyhow::anyhow!(
                    "Unknown LLM_PROVIDER: {}. Supported providers: {}, {}",
                    other,
                    PROVIDER_MISTRAL,
                    PROVIDER_MOCK
                ));
            }
        }

        let llm_timeout_secs = match env::var("LLM_TIMEOUT_SECS") {
            Ok(raw) => Some(raw.parse::<u64>().map_err(|_| {
                anyhow::anyhow!(
                    "LLM_TIMEOUT_SECS must be a whole number of seconds, got {:?}",
                    raw
                )
            })?),
            Err(_) => None,
        };

        let port = match env::var("PORT") {
            Ok(raw) => raw
                .parse::<u16>()
                .map_err(|_| anyhow::anyhow!("PORT must be a valid port number, got {:?}", raw))?,
            Err(_) => DEFAULT_PORT,
        };

        let config = Self {
            llm_provider,
            mistral_api_key,
            mistral_model: env::var("MISTRAL_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
            mistral_base_url: env::var("MISTRAL_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
            llm_timeout_secs,
            host: env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string()),
            port,
        };

        Ok(config)
    }

    /// Configuration backed by the mock provider, for tests and offline runs
    pub fn for_mock() -> Self {
        Self {
            llm_provider: PROVIDER_MOCK.to_string(),
            mistral_api_key: None,
            mistral_model: DEFAULT_MODEL.to_string(),
            mistral_base_url: DEFAULT_BASE_URL.to_string(),
            llm_timeout_secs: None,
            host: "127.0.0.1".to_string(),
            port: DEFAULT_PORT,
        }
    }

    /// Socket address string the server binds to
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
