pub mod anthropic;
pub mod client;
pub mod models;

pub use anthropic::AnthropicClient;
pub use client::{GeneratedCommand, LLMClient, LLMError};
pub use models::{ModelOption, Provider, SUPPORTED_MODELS, find_model, validate_model_id};
