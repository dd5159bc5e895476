use std::io;
use thiserror::Error;

// Import module-level errors for AppError
use crate::config::settings::ConfigError;
use crate::config::setup::SetupError;
use crate::history::HistoryError;
use crate::llm::client::LLMError;
use crate::security::validator::ValidationError;

/// Top-level application error that wraps all module-specific errors
///
/// This provides a unified error type for application-level code while
/// preserving the specific error context from each module. All module
/// errors automatically convert to AppError via the `From` trait.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Setup error: {0}")]
    Setup(#[from] SetupError),

    #[error("LLM error: {0}")]
    Llm(#[from] LLMError),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("History error: {0}")]
    History(#[from] HistoryError),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Result type for application-level operations
pub type AppResult<T> = std::result::Result<T, AppError>;
