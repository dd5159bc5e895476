use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::backup::BackupRotator;
use super::remover::remove_blocks;
use super::scanner::BlockMarkers;

/// Appends marker-delimited blocks to an rc file and performs the
/// file-level read-modify-write around the pure text operations.
///
/// The installer never decides *whether* an existing block should be
/// replaced; callers scan for markers and pass their decision through
/// `replace_existing`.
pub struct BlockInstaller {
    rotator: BackupRotator,
}

impl BlockInstaller {
    pub fn new() -> Self {
        Self {
            rotator: BackupRotator::new(),
        }
    }

    pub fn with_rotator(rotator: BackupRotator) -> Self {
        Self { rotator }
    }

    /// Append `block` to `text`, separated from existing content by one
    /// blank line, ending with a single trailing newline.
    pub fn append_block(text: &str, block: &str) -> String {
        let trimmed = text.trim_end();
        if trimmed.is_empty() {
            format!("{}\n", block.trim())
        } else {
            format!("{}\n\n{}\n", trimmed, block.trim())
        }
    }

    /// Install `block` into the file at `path`, creating it if absent.
    ///
    /// A backup is taken whenever the file already exists, before any
    /// byte of it is rewritten. With `replace_existing`, current blocks
    /// for `markers` are stripped first (the reinstall path). The result
    /// lands in a single buffered write. Returns the backup path when
    /// one was made.
    pub fn install(
        &self,
        path: &Path,
        block: &str,
        markers: &BlockMarkers,
        replace_existing: bool,
    ) -> io::Result<Option<PathBuf>> {
        let mut backup = None;
        let mut content = String::new();
        if path.exists() {
            content = fs::read_to_string(path)?;
            backup = Some(self.rotator.create(path)?);
        }
        if replace_existing {
            content = remove_blocks(&content, markers);
        }
        let updated = Self::append_block(&content, block);
        fs::write(path, updated)?;
        tracing::debug!(path = %path.display(), "installed block");
        Ok(backup)
    }

    /// Remove every block for `markers` from the file at `path`,
    /// backing the file up first. Returns the backup path.
    pub fn remove(&self, path: &Path, markers: &BlockMarkers) -> io::Result<PathBuf> {
        let content = fs::read_to_string(path)?;
        let backup = self.rotator.create(path)?;
        let cleaned = remove_blocks(&content, markers);
        fs::write(path, cleaned)?;
        tracing::debug!(path = %path.display(), "removed blocks");
        Ok(backup)
    }
}

impl Default for BlockInstaller {
    fn default() -> Self {
        Self::new()
    }
}
