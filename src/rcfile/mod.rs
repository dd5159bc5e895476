pub mod backup;
pub mod installer;
pub mod remover;
pub mod scanner;
pub mod snippets;

pub use backup::BackupRotator;
pub use installer::BlockInstaller;
pub use remover::remove_blocks;
pub use scanner::{BlockMarkers, MarkerPositions, locate_markers};
