use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Maximum number of entries retained in the history file.
pub const MAX_HISTORY_ENTRIES: usize = 100;

#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("HOME environment variable not set")]
    MissingHome,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Outcome recorded for a single generation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HistoryStatus {
    Success,
    Rejected,
    Error,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub timestamp: String,
    pub prompt: String,
    pub response: String,
    pub status: HistoryStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Newest-first JSON history of generation requests.
///
/// History is a convenience, not a requirement: reads treat missing or
/// corrupt files as empty, and writes are best-effort.
pub struct HistoryStore {
    path: PathBuf,
}

impl HistoryStore {
    /// Store at the default location, `~/.quco/history.json`.
    pub fn new() -> Result<Self, HistoryError> {
        let home = std::env::var("HOME").map_err(|_| HistoryError::MissingHome)?;
        Ok(Self {
            path: PathBuf::from(home).join(".quco").join("history.json"),
        })
    }

    pub fn with_path<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// All entries, newest first. Missing or unreadable history is empty.
    pub fn load(&self) -> Vec<HistoryEntry> {
        match fs::read_to_string(&self.path) {
            Ok(content) => serde_json::from_str(&content).unwrap_or_default(),
            Err(_) => Vec::new(),
        }
    }

    /// Record an entry at the front, dropping the oldest beyond the cap.
    /// Failures are logged and swallowed; history never blocks a request.
    pub fn record(
        &self,
        prompt: &str,
        response: &str,
        status: HistoryStatus,
        error: Option<String>,
    ) {
        let entry = HistoryEntry {
            timestamp: Utc::now().to_rfc3339(),
            prompt: prompt.to_string(),
            response: response.to_string(),
            status,
            error,
        };
        if let Err(e) = self.append(entry) {
            tracing::debug!(error = %e, "failed to write history");
        }
    }

    fn append(&self, entry: HistoryEntry) -> Result<(), HistoryError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut entries = self.load();
        entries.insert(0, entry);
        entries.truncate(MAX_HISTORY_ENTRIES);
        fs::write(&self.path, serde_json::to_string_pretty(&entries)?)?;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
