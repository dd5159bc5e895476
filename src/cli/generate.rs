use crate::config::{Config, ConfigError};
use crate::error::AppResult;
use crate::history::{HistoryStatus, HistoryStore};
use crate::llm::{AnthropicClient, LLMClient, find_model};
use crate::security::CommandValidator;

use super::output::emit_command;

/// Generate a command for `prompt`, validate it, and show it to the
/// user. `autofill_active` selects the output mode; it is passed down
/// explicitly rather than read from the environment here.
pub async fn run(prompt: &str, autofill_active: bool) -> AppResult<()> {
    let config = Config::from_env().ok_or(ConfigError::NotConfigured)?;
    let model =
        find_model(&config.model_id).ok_or(ConfigError::UnknownModel(config.model_id.clone()))?;

    let client = AnthropicClient::new(config.api_key, model.api_model.to_string());
    let history = HistoryStore::new().ok();
    generate_with_client(&client, history.as_ref(), prompt, autofill_active).await
}

/// The flow behind `run`, parameterized over the provider and history
/// store so tests can substitute both.
pub async fn generate_with_client(
    client: &dyn LLMClient,
    history: Option<&HistoryStore>,
    prompt: &str,
    autofill_active: bool,
) -> AppResult<()> {
    let generated = match client.generate(prompt).await {
        Ok(generated) => generated,
        Err(e) => {
            if let Some(history) = history {
                history.record(prompt, "", HistoryStatus::Error, Some(e.to_string()));
            }
            return Err(e.into());
        }
    };

    tracing::debug!(raw = %generated.command, "model returned candidate");

    let validator = CommandValidator::new();
    match validator.validate(&generated.command) {
        Ok(command) => {
            if let Some(history) = history {
                history.record(prompt, &command, HistoryStatus::Success, None);
            }
            emit_command(&command, autofill_active);
            Ok(())
        }
        Err(e) => {
            if let Some(history) = history {
                history.record(
                    prompt,
                    &generated.command,
                    HistoryStatus::Rejected,
                    Some(e.to_string()),
                );
            }
            Err(e.into())
        }
    }
}
