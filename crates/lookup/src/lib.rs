//! Player lookup providers.
//!
//! The search pipeline treats the player directory as an opaque
//! collaborator behind [`PlayerLookup`]. [`HttpPlayerLookup`] talks to an
//! upstream player-search service over HTTP; [`StaticLookup`] serves a
//! fixed set of records for tests and offline use.

pub mod fixed;
pub mod http;

use async_trait::async_trait;
use playersearch_core::player::PlayerRecord;

pub use fixed::StaticLookup;
pub use http::HttpPlayerLookup;

/// Errors from a lookup provider. Never retried.
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    /// The HTTP request itself failed (network, DNS, TLS, timeout, decode).
    #[error("Lookup request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The upstream service answered with a non-2xx status.
    #[error("Lookup service error ({status}): {body}")]
    Upstream { status: u16, body: String },
}

/// Source of player records for a name query.
#[async_trait]
pub trait PlayerLookup: Send + Sync {
    /// Return at most `max_results` players matching `query`.
    async fn search(
        &self,
        query: &str,
        max_results: usize,
    ) -> Result<Vec<PlayerRecord>, LookupError>;
}
