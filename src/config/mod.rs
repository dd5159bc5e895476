pub mod settings;
pub mod setup;
pub mod shell;

pub use settings::{API_KEY_ENV_VAR, Config, ConfigError, MODEL_ENV_VAR};
pub use setup::{SetupError, SetupWizard};
pub use shell::ShellType;
