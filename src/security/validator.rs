use regex::Regex;
use thiserror::Error;

use super::patterns::first_match;

/// Why a candidate command was rejected. Rejection is an expected,
/// common outcome, so it travels as a value with a display string, not
/// as a panic or an I/O-style failure.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("model returned empty output")]
    EmptyOutput,

    #[error("model returned multiple lines, expected exactly one command")]
    MultipleLines,

    #[error("model returned markdown formatting, expected a plain command")]
    MarkdownFormatting,

    #[error("command matches a destructive pattern and is not allowed")]
    DestructivePattern,

    #[error("command contains null bytes")]
    NullBytes,

    #[error("command cannot start with a pipe, redirect, or control operator")]
    LeadingOperator,

    #[error("command contains a dangerous sudo rm combination")]
    DangerousSudoRm,

    #[error("command contains a dangerous sudo disk operation")]
    DangerousSudoDisk,
}

/// Ordered rejection pipeline over untrusted, model-generated command
/// strings. Checks run strictly in order and the first failure wins, so
/// rejection reasons are deterministic and cheap structural checks run
/// before the pattern set.
pub struct CommandValidator {
    sudo_rm: Regex,
    sudo_disk: Regex,
}

impl CommandValidator {
    pub fn new() -> Self {
        Self {
            sudo_rm: Regex::new(r"sudo\s+rm\s+-[rf]+.*/")
                .expect("sudo rm pattern must compile"),
            sudo_disk: Regex::new(r"sudo\s+(mkfs|dd|fdisk|parted)")
                .expect("sudo disk pattern must compile"),
        }
    }

    /// Validate a raw candidate command. On success the trimmed,
    /// single-line command is returned for display.
    pub fn validate(&self, raw_output: &str) -> Result<String, ValidationError> {
        let trimmed = raw_output.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::EmptyOutput);
        }

        let lines: Vec<&str> = trimmed
            .lines()
            .filter(|line| !line.trim().is_empty())
            .collect();
        if lines.len() > 1 {
            return Err(ValidationError::MultipleLines);
        }
        // trimmed is non-empty, so at least one line survives the filter
        let command = lines[0].trim();

        // One backtick or three; either way the model leaked formatting.
        if command.starts_with('`') {
            return Err(ValidationError::MarkdownFormatting);
        }

        if let Some(pattern) = first_match(command) {
            // The specific pattern stays out of the rejection message.
            tracing::debug!(reason = pattern.description, "destructive command rejected");
            return Err(ValidationError::DestructivePattern);
        }

        if command.contains('\0') {
            return Err(ValidationError::NullBytes);
        }

        if command.starts_with(['|', '&', ';', '<', '>']) {
            return Err(ValidationError::LeadingOperator);
        }

        if self.sudo_rm.is_match(command) {
            return Err(ValidationError::DangerousSudoRm);
        }
        if self.sudo_disk.is_match(command) {
            return Err(ValidationError::DangerousSudoDisk);
        }

        Ok(command.to_string())
    }
}

impl Default for CommandValidator {
    fn default() -> Self {
        Self::new()
    }
}
