use std::io;
use std::path::{Path, PathBuf};

use playersearch_core::error::CoreError;

/// Errors from the artifact store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// No artifact with the requested name exists.
    #[error("Artifact not found: {name}")]
    NotFound { name: String },

    /// The requested name was rejected before touching the filesystem.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Directory creation, read, or write failed.
    #[error("Storage failure at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl StoreError {
    pub(crate) fn io(path: &Path, source: io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}
