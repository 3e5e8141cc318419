//! Response bodies for the search and file endpoints.
//!
//! These shapes are a compatibility contract with existing clients, so
//! they are serialized bare rather than inside a `{ "data": ... }` envelope.

use serde::Serialize;

use playersearch_core::player::PlayerRecord;

/// Mount point under which persisted artifacts are served statically.
pub const DATA_MOUNT: &str = "/data";

/// Public URL of a persisted artifact, e.g. `/data/results_Smith.csv`.
pub fn data_url(name: &str) -> String {
    format!("{DATA_MOUNT}/{name}")
}

/// `GET /api/search` response.
#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub query: String,
    pub count: usize,
    pub players: Vec<PlayerRecord>,
}

/// `POST /api/search-and-save` response.
#[derive(Debug, Serialize)]
pub struct SavedSearchResponse {
    pub query: String,
    pub count: usize,
    /// Public-relative URL of the persisted CSV.
    pub filepath: String,
    pub players: Vec<PlayerRecord>,
}

/// One entry of `GET /api/files`.
#[derive(Debug, Serialize)]
pub struct FileInfo {
    pub name: String,
    pub url: String,
    pub size: u64,
}

/// `GET /api/files` response.
#[derive(Debug, Serialize)]
pub struct FilesResponse {
    pub files: Vec<FileInfo>,
}
