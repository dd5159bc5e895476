use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

/// Filename infix for rc-file backups: `<name>.quco-backup-<millis>`.
pub const BACKUP_INFIX: &str = ".quco-backup-";

/// Default number of backups kept per source file.
pub const DEFAULT_RETENTION: usize = 3;

/// Creates timestamped sibling copies of a file before destructive
/// writes, pruning stale copies beyond a retention count.
#[derive(Debug, Clone)]
pub struct BackupRotator {
    retention: usize,
}

impl BackupRotator {
    pub fn new() -> Self {
        Self {
            retention: DEFAULT_RETENTION,
        }
    }

    pub fn with_retention(retention: usize) -> Self {
        Self { retention }
    }

    /// Copy `source` to a sibling named with the current epoch-millisecond
    /// timestamp, then prune stale backups. Returns the backup path.
    pub fn create(&self, source: &Path) -> io::Result<PathBuf> {
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis())
            .unwrap_or_default();
        let backup = backup_path(source, millis);
        fs::copy(source, &backup)?;
        tracing::debug!(backup = %backup.display(), "created backup");
        self.cleanup(source);
        Ok(backup)
    }

    /// Delete backups of `source` beyond the retention count, oldest
    /// first. Best-effort: enumeration and per-file delete failures are
    /// swallowed so cleanup can never abort the write it protects.
    pub fn cleanup(&self, source: &Path) {
        let Some(dir) = source.parent() else { return };
        let Some(name) = source.file_name().and_then(|n| n.to_str()) else {
            return;
        };
        let prefix = format!("{name}{BACKUP_INFIX}");

        let Ok(entries) = fs::read_dir(dir) else { return };
        let mut backups: Vec<(u128, String, PathBuf)> = Vec::new();
        for entry in entries.flatten() {
            let file_name = entry.file_name();
            let Some(file_name) = file_name.to_str() else { continue };
            if let Some(suffix) = file_name.strip_prefix(&prefix) {
                // Unparsable timestamps sort as 0, so malformed backup
                // names are pruned before any real one.
                let timestamp = suffix.parse::<u128>().unwrap_or(0);
                backups.push((timestamp, file_name.to_string(), entry.path()));
            }
        }

        // Newest first; equal timestamps fall back to filename order.
        backups.sort_by(|a, b| b.0.cmp(&a.0).then_with(|| a.1.cmp(&b.1)));

        for (_, _, path) in backups.into_iter().skip(self.retention) {
            if let Err(e) = fs::remove_file(&path) {
                tracing::debug!(path = %path.display(), error = %e, "failed to prune backup");
            }
        }
    }
}

impl Default for BackupRotator {
    fn default() -> Self {
        Self::new()
    }
}

/// Sibling backup path for `source` stamped with `millis`.
fn backup_path(source: &Path, millis: u128) -> PathBuf {
    let mut name = source.as_os_str().to_os_string();
    name.push(format!("{BACKUP_INFIX}{millis}"));
    PathBuf::from(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn backup_count(dir: &Path, name: &str) -> usize {
        fs::read_dir(dir)
            .unwrap()
            .flatten()
            .filter(|e| {
                e.file_name()
                    .to_str()
                    .is_some_and(|n| n.starts_with(&format!("{name}{BACKUP_INFIX}")))
            })
            .count()
    }

    #[test]
    fn test_create_copies_source_bytes() {
        let temp_dir = TempDir::new().unwrap();
        let source = temp_dir.path().join(".zshrc");
        fs::write(&source, "export PATH=$PATH\n").unwrap();

        let rotator = BackupRotator::new();
        let backup = rotator.create(&source).unwrap();

        assert!(backup.exists());
        assert_eq!(
            fs::read_to_string(&backup).unwrap(),
            "export PATH=$PATH\n"
        );
        let backup_name = backup.file_name().unwrap().to_str().unwrap();
        assert!(backup_name.starts_with(".zshrc.quco-backup-"));
    }

    #[test]
    fn test_create_fails_on_missing_source() {
        let temp_dir = TempDir::new().unwrap();
        let source = temp_dir.path().join(".zshrc");

        let rotator = BackupRotator::new();
        assert!(rotator.create(&source).is_err());
    }

    #[test]
    fn test_cleanup_keeps_newest_within_retention() {
        let temp_dir = TempDir::new().unwrap();
        let source = temp_dir.path().join(".zshrc");
        fs::write(&source, "content\n").unwrap();

        for ts in [1000u64, 2000, 3000, 4000, 5000] {
            fs::write(
                temp_dir.path().join(format!(".zshrc{BACKUP_INFIX}{ts}")),
                "old\n",
            )
            .unwrap();
        }

        BackupRotator::new().cleanup(&source);

        assert_eq!(backup_count(temp_dir.path(), ".zshrc"), 3);
        for ts in [3000u64, 4000, 5000] {
            assert!(
                temp_dir
                    .path()
                    .join(format!(".zshrc{BACKUP_INFIX}{ts}"))
                    .exists()
            );
        }
    }

    #[test]
    fn test_cleanup_prunes_malformed_names_first() {
        let temp_dir = TempDir::new().unwrap();
        let source = temp_dir.path().join(".bashrc");
        fs::write(&source, "content\n").unwrap();

        for ts in [1000u64, 2000, 3000] {
            fs::write(
                temp_dir.path().join(format!(".bashrc{BACKUP_INFIX}{ts}")),
                "old\n",
            )
            .unwrap();
        }
        let malformed = temp_dir.path().join(format!(".bashrc{BACKUP_INFIX}garbage"));
        fs::write(&malformed, "old\n").unwrap();

        BackupRotator::new().cleanup(&source);

        assert!(!malformed.exists());
        assert_eq!(backup_count(temp_dir.path(), ".bashrc"), 3);
    }

    #[test]
    fn test_cleanup_ignores_other_files() {
        let temp_dir = TempDir::new().unwrap();
        let source = temp_dir.path().join(".zshrc");
        fs::write(&source, "content\n").unwrap();

        let unrelated = temp_dir.path().join(".zshrc.orig");
        fs::write(&unrelated, "keep me\n").unwrap();
        let other_source = temp_dir.path().join(format!(".bashrc{BACKUP_INFIX}1"));
        fs::write(&other_source, "keep me too\n").unwrap();

        BackupRotator::with_retention(0).cleanup(&source);

        assert!(unrelated.exists());
        assert!(other_source.exists());
    }

    #[test]
    fn test_custom_retention() {
        let temp_dir = TempDir::new().unwrap();
        let source = temp_dir.path().join(".zshrc");
        fs::write(&source, "content\n").unwrap();

        for ts in [1000u64, 2000, 3000] {
            fs::write(
                temp_dir.path().join(format!(".zshrc{BACKUP_INFIX}{ts}")),
                "old\n",
            )
            .unwrap();
        }

        BackupRotator::with_retention(1).cleanup(&source);

        assert_eq!(backup_count(temp_dir.path(), ".zshrc"), 1);
        assert!(
            temp_dir
                .path()
                .join(format!(".zshrc{BACKUP_INFIX}3000"))
                .exists()
        );
    }
}
