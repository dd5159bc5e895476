use std::env;
use std::path::PathBuf;

use thiserror::Error;

use super::shell::ShellType;
use crate::rcfile::{BlockInstaller, snippets};

/// Environment variable holding the configured model id, exported by the
/// config block in the rc file.
pub const MODEL_ENV_VAR: &str = "QUCO_MODEL_ID";

/// Environment variable holding the API key, exported alongside it.
pub const API_KEY_ENV_VAR: &str = "QUCO_API_KEY";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("quco is not configured; run `quco --setup`")]
    NotConfigured,

    #[error("unknown model id '{0}'; run `quco --setup` to reconfigure")]
    UnknownModel(String),

    #[error("could not detect shell type; only zsh and bash are supported")]
    UnsupportedShell,

    #[error("HOME environment variable not set")]
    MissingHome,

    #[error("failed to update shell configuration: {0}")]
    RcWrite(#[from] std::io::Error),
}

/// Runtime configuration, read back from the environment the sourced
/// config block exports. Nothing is persisted outside the rc file.
#[derive(Debug, Clone)]
pub struct Config {
    pub model_id: String,
    pub api_key: String,
}

impl Config {
    /// Read configuration from the environment. `None` until the user
    /// has run setup and sourced their rc file.
    pub fn from_env() -> Option<Self> {
        let model_id = env::var(MODEL_ENV_VAR).ok().filter(|v| !v.is_empty())?;
        let api_key = env::var(API_KEY_ENV_VAR).ok().filter(|v| !v.is_empty())?;
        Some(Self { model_id, api_key })
    }

    /// Write this configuration into the shell rc file as an exported
    /// variable block, replacing any previous config block. Returns the
    /// rc path written.
    pub fn write_to_rc(&self) -> Result<PathBuf, ConfigError> {
        let shell = ShellType::current();
        if shell == ShellType::Unknown {
            return Err(ConfigError::UnsupportedShell);
        }
        let rc_path = shell.rc_path().ok_or(ConfigError::MissingHome)?;

        let installer = BlockInstaller::new();
        let backup = installer.install(&rc_path, &self.render_block(), &snippets::CONFIG_MARKERS, true)?;
        if let Some(backup) = backup {
            tracing::debug!(backup = %backup.display(), "rc file backed up before config write");
        }
        Ok(rc_path)
    }

    fn render_block(&self) -> String {
        format!(
            "{start}\nexport {model_var}=\"{model}\"\nexport {key_var}=\"{key}\"\n{end}",
            start = snippets::CONFIG_BLOCK_START,
            model_var = MODEL_ENV_VAR,
            model = self.model_id,
            key_var = API_KEY_ENV_VAR,
            key = self.api_key,
            end = snippets::CONFIG_BLOCK_END,
        )
    }

    /// Masked key for display: first and last four characters.
    pub fn masked_api_key(&self) -> String {
        let chars: Vec<char> = self.api_key.chars().collect();
        if chars.len() <= 8 {
            return "***".to_string();
        }
        let head: String = chars[..4].iter().collect();
        let tail: String = chars[chars.len() - 4..].iter().collect();
        format!("{head}...{tail}")
    }
}
