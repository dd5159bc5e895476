use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur while talking to a command-generation provider
#[derive(Debug, Error)]
pub enum LLMError {
    #[error("API request failed: {0}")]
    ApiError(String),

    #[error("rate limit exceeded, retry after {0}s")]
    RateLimitExceeded(u64),

    #[error("invalid API response: {0}")]
    InvalidResponse(String),

    #[error("network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("JSON parsing error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl LLMError {
    /// Whether this failure is network-shaped (connectivity, DNS,
    /// timeout), used to pick the user-facing message.
    pub fn is_network_related(&self) -> bool {
        matches!(self, LLMError::NetworkError(_))
    }
}

/// A raw command candidate produced by a model, before validation.
#[derive(Debug, Clone)]
pub struct GeneratedCommand {
    pub command: String,
}

/// Command-generation providers: a natural-language prompt in, exactly
/// one candidate shell command out.
#[async_trait]
pub trait LLMClient: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<GeneratedCommand, LLMError>;
}
