use std::io::{self, Write};

use thiserror::Error;

use super::settings::{Config, ConfigError};
use super::shell::ShellType;
use crate::llm::models::{ModelOption, SUPPORTED_MODELS};

#[derive(Debug, Error)]
pub enum SetupError {
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("Config error: {0}")]
    ConfigError(#[from] ConfigError),

    #[error("Setup cancelled by user")]
    Cancelled,
}

/// Interactive first-run configuration: pick a model, provide an API
/// key, write both into the rc file's config block.
pub struct SetupWizard;

impl SetupWizard {
    pub fn run() -> Result<(), SetupError> {
        println!("\n{}", "=".repeat(70));
        println!("Quco Setup");
        println!("{}", "=".repeat(70));
        println!("\nThis will configure quco to use an AI model for command generation.");

        let model = Self::select_model()?;
        let api_key = Self::enter_api_key(model)?;

        let config = Config {
            model_id: model.id.to_string(),
            api_key,
        };
        let rc_path = config.write_to_rc()?;

        println!("\n✓ Configuration saved successfully!");
        println!("\nConfiguration written to: {}", rc_path.display());
        println!(
            "\nPlease restart your terminal or run: source {}",
            rc_path.display()
        );

        if matches!(ShellType::current(), ShellType::Zsh | ShellType::Bash) {
            println!("\n💡 Tip: for the best experience, enable autofill so generated");
            println!("   commands land directly in your shell buffer:");
            println!("   quco --autofill-on");
        }
        println!();

        Ok(())
    }

    fn select_model() -> Result<&'static ModelOption, SetupError> {
        println!("\nWhich AI model would you like to use?");
        for (i, model) in SUPPORTED_MODELS.iter().enumerate() {
            println!("  [{}] {}", i + 1, model.name);
        }
        print!("\nEnter your choice [1-{}]: ", SUPPORTED_MODELS.len());
        io::stdout().flush()?;

        let choice = Self::read_line()?;
        match choice.parse::<usize>() {
            Ok(n) if (1..=SUPPORTED_MODELS.len()).contains(&n) => Ok(&SUPPORTED_MODELS[n - 1]),
            _ => {
                println!(
                    "\n⚠️  Invalid choice. Please enter 1-{}.",
                    SUPPORTED_MODELS.len()
                );
                Self::select_model()
            }
        }
    }

    fn enter_api_key(model: &ModelOption) -> Result<String, SetupError> {
        print!(
            "\nEnter your {} API key: ",
            model.provider.to_string().to_uppercase()
        );
        io::stdout().flush()?;

        let api_key = Self::read_line()?;
        if api_key.is_empty() {
            println!("\n⚠️  API key cannot be empty.");
            return Self::enter_api_key(model);
        }
        Ok(api_key)
    }

    /// Read one trimmed line; EOF on stdin counts as cancellation.
    fn read_line() -> Result<String, SetupError> {
        let mut input = String::new();
        let bytes = io::stdin().read_line(&mut input)?;
        if bytes == 0 {
            return Err(SetupError::Cancelled);
        }
        Ok(input.trim().to_string())
    }
}
