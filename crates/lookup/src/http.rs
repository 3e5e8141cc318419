//! HTTP client for an upstream player-search service.
//!
//! The upstream speaks the same `/api/search` contract this project
//! exposes: `GET /api/search?name=<query>&max=<n>` answering
//! `{ "query", "count", "players": [...] }`.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;

use playersearch_core::player::PlayerRecord;

use crate::{LookupError, PlayerLookup};

/// Public player-search service used when no upstream is configured.
pub const DEFAULT_LOOKUP_URL: &str = "https://player-search-api-60b22a3031bd.herokuapp.com";

/// Upstream request timeout used when none is configured.
pub const DEFAULT_LOOKUP_TIMEOUT_SECS: u64 = 60;

/// Search payload; older upstreams answer with a bare array.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum SearchPayload {
    Envelope {
        #[serde(default)]
        players: Vec<PlayerRecord>,
    },
    Bare(Vec<PlayerRecord>),
}

impl SearchPayload {
    fn into_players(self) -> Vec<PlayerRecord> {
        match self {
            Self::Envelope { players } | Self::Bare(players) => players,
        }
    }
}

/// [`PlayerLookup`] backed by an upstream HTTP service.
pub struct HttpPlayerLookup {
    client: reqwest::Client,
    base_url: String,
}

impl HttpPlayerLookup {
    /// Create a client for `base_url` (e.g. `http://host:3000`) with a
    /// per-request timeout.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, LookupError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(client, base_url))
    }

    /// Create a client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Return the response unchanged on 2xx, otherwise an
    /// [`LookupError::Upstream`] carrying the status and body text.
    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, LookupError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(LookupError::Upstream {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }
}

#[async_trait]
impl PlayerLookup for HttpPlayerLookup {
    async fn search(
        &self,
        query: &str,
        max_results: usize,
    ) -> Result<Vec<PlayerRecord>, LookupError> {
        tracing::debug!(query, max_results, base_url = %self.base_url, "Querying upstream lookup");

        let response = self
            .client
            .get(format!("{}/api/search", self.base_url))
            .query(&[("name", query.to_string()), ("max", max_results.to_string())])
            .send()
            .await?;

        let payload: SearchPayload = Self::ensure_success(response).await?.json().await?;
        let mut players = payload.into_players();
        players.truncate(max_results);

        tracing::debug!(query, count = players.len(), "Upstream lookup complete");
        Ok(players)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let lookup = HttpPlayerLookup::with_client(reqwest::Client::new(), "http://host:3000/");
        assert_eq!(lookup.base_url(), "http://host:3000");
    }

    #[test]
    fn payload_accepts_envelope_and_bare_array() {
        let envelope: SearchPayload =
            serde_json::from_str(r#"{"query": "Smith", "count": 1, "players": [{"name": "A"}]}"#)
                .unwrap();
        assert_eq!(envelope.into_players().len(), 1);

        let bare: SearchPayload = serde_json::from_str(r#"[{"name": "A"}, {"name": "B"}]"#).unwrap();
        assert_eq!(bare.into_players().len(), 2);

        let empty: SearchPayload = serde_json::from_str(r#"{"query": "Nobody"}"#).unwrap();
        assert!(empty.into_players().is_empty());
    }
}
