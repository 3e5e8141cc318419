//! Persisting, listing, and retrieving encoded result tables.

use std::io;
use std::path::{Path, PathBuf};

use serde::Serialize;

use playersearch_core::naming::{
    artifact_filename, derive_identifier, is_table_file, validate_artifact_name,
};

use crate::config::StoreConfig;
use crate::error::StoreError;

/// A table that has just been written by [`ArtifactStore::persist`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Artifact {
    /// Sanitized form of the query the artifact was written for.
    pub identifier: String,
    /// Filename within the storage root, e.g. `results_Smith.csv`.
    pub name: String,
    /// Full path of the written file.
    pub path: PathBuf,
    /// Number of bytes written.
    pub size_bytes: u64,
}

/// A table found in the storage root by [`ArtifactStore::list`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtifactEntry {
    pub name: String,
    pub path: PathBuf,
    pub size_bytes: u64,
}

/// Flat-file artifact store rooted at [`StoreConfig::storage_root`].
///
/// Holds no state beyond its configuration; every call goes to the
/// filesystem, so sizes and listings are never cached.
#[derive(Debug, Clone)]
pub struct ArtifactStore {
    config: StoreConfig,
}

impl ArtifactStore {
    pub fn new(config: StoreConfig) -> Self {
        Self { config }
    }

    /// The directory artifacts are stored in.
    pub fn root(&self) -> &Path {
        &self.config.storage_root
    }

    /// Resolve an artifact name to its path inside the storage root.
    ///
    /// The name must be a single path component (see
    /// [`validate_artifact_name`]).
    pub fn artifact_path(&self, name: &str) -> Result<PathBuf, StoreError> {
        validate_artifact_name(name)?;
        Ok(self.root().join(name))
    }

    /// Write `encoded` as the artifact for `query`, replacing any previous
    /// content under the same derived identifier.
    ///
    /// The storage root is created (with parents) if it does not exist.
    pub async fn persist(&self, encoded: &str, query: &str) -> Result<Artifact, StoreError> {
        let root = self.root();
        tokio::fs::create_dir_all(root)
            .await
            .map_err(|e| StoreError::io(root, e))?;

        let name = artifact_filename(query);
        let path = root.join(&name);

        tokio::fs::write(&path, encoded)
            .await
            .map_err(|e| StoreError::io(&path, e))?;

        let artifact = Artifact {
            identifier: derive_identifier(query),
            name,
            path,
            size_bytes: encoded.len() as u64,
        };

        tracing::info!(
            query,
            name = %artifact.name,
            size_bytes = artifact.size_bytes,
            "Persisted search results",
        );

        Ok(artifact)
    }

    /// List every table file in the storage root, sorted by name.
    ///
    /// A missing storage root is an empty listing, not an error.
    pub async fn list(&self) -> Result<Vec<ArtifactEntry>, StoreError> {
        let root = self.root();
        let mut dir = match tokio::fs::read_dir(root).await {
            Ok(dir) => dir,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(StoreError::io(root, e)),
        };

        let mut entries = Vec::new();
        while let Some(entry) = dir
            .next_entry()
            .await
            .map_err(|e| StoreError::io(root, e))?
        {
            let Ok(name) = entry.file_name().into_string() else {
                continue;
            };
            if !is_table_file(&name) {
                continue;
            }

            let path = entry.path();
            let metadata = match tokio::fs::metadata(&path).await {
                Ok(metadata) => metadata,
                // Removed between enumeration and stat.
                Err(e) if e.kind() == io::ErrorKind::NotFound => continue,
                Err(e) => return Err(StoreError::io(&path, e)),
            };
            if !metadata.is_file() {
                continue;
            }

            entries.push(ArtifactEntry {
                name,
                path,
                size_bytes: metadata.len(),
            });
        }

        entries.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(entries)
    }

    /// Read the full text of the artifact called `name`.
    pub async fn retrieve(&self, name: &str) -> Result<String, StoreError> {
        let path = self.artifact_path(name)?;
        let not_found = || StoreError::NotFound {
            name: name.to_string(),
        };

        match tokio::fs::metadata(&path).await {
            Ok(metadata) if metadata.is_file() => {}
            Ok(_) => return Err(not_found()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Err(not_found()),
            Err(e) => return Err(StoreError::io(&path, e)),
        }

        tokio::fs::read_to_string(&path).await.map_err(|e| {
            if e.kind() == io::ErrorKind::NotFound {
                not_found()
            } else {
                StoreError::io(&path, e)
            }
        })
    }
}
