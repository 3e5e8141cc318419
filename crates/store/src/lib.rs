//! Filesystem-backed store for encoded search results.
//!
//! Artifacts live as flat files directly under a configured storage root.
//! There is no locking: concurrent writers to the same artifact race and
//! the last completed write wins.

pub mod artifact;
pub mod config;
pub mod error;

pub use artifact::{Artifact, ArtifactEntry, ArtifactStore};
pub use config::StoreConfig;
pub use error::StoreError;
