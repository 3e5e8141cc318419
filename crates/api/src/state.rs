use std::sync::Arc;

use playersearch_lookup::PlayerLookup;
use playersearch_store::ArtifactStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable; everything is behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Source of player records.
    pub lookup: Arc<dyn PlayerLookup>,
    /// Persisted search results.
    pub store: Arc<ArtifactStore>,
}

impl AppState {
    /// Build state from configuration, taking the store root from
    /// `config.data_dir`.
    pub fn new(config: ServerConfig, lookup: Arc<dyn PlayerLookup>) -> Self {
        let store = ArtifactStore::new(config.store_config());
        Self {
            config: Arc::new(config),
            lookup,
            store: Arc::new(store),
        }
    }
}
