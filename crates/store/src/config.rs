use std::path::PathBuf;

/// Storage root used when nothing else is configured.
pub const DEFAULT_STORAGE_ROOT: &str = "data";

/// Artifact store configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Directory artifacts are written to and read from. Created on first
    /// write if missing.
    pub storage_root: PathBuf,
}

impl StoreConfig {
    pub fn new(storage_root: impl Into<PathBuf>) -> Self {
        Self {
            storage_root: storage_root.into(),
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::new(DEFAULT_STORAGE_ROOT)
    }
}
