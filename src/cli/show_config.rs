use crate::config::{Config, ShellType};
use crate::history::HistoryStore;
use crate::llm::find_model;

/// Print the active configuration, or a setup hint when unconfigured.
pub fn run() {
    let Some(config) = Config::from_env() else {
        println!("Quco is not configured yet.");
        println!("Run: quco --setup");
        return;
    };

    let model = find_model(&config.model_id);

    println!("\nQuco configuration:\n");
    println!(
        "Model:       {}",
        model.map(|m| m.name).unwrap_or(config.model_id.as_str())
    );
    println!(
        "Provider:    {}",
        model
            .map(|m| m.provider.to_string())
            .unwrap_or_else(|| "unknown".to_string())
    );
    println!("API key:     {}", config.masked_api_key());
    if let Some(rc_path) = ShellType::current().rc_path() {
        println!("Config file: {}", rc_path.display());
    }
    if let Ok(history) = HistoryStore::new() {
        println!("History:     {}", history.path().display());
    }
    println!();
}
