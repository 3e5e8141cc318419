//! Handlers for player search, CSV export, and saved searches.

use axum::body::Bytes;
use axum::extract::{Query, State};
use axum::response::Response;
use axum::Json;

use playersearch_core::csv::encode_records;
use playersearch_core::naming::export_filename;
use playersearch_core::search::{DEFAULT_EXPORT_MAX, DEFAULT_SEARCH_MAX};

use crate::error::{AppError, AppResult};
use crate::handlers::csv_attachment;
use crate::query::SearchParams;
use crate::response::{data_url, SavedSearchResponse, SearchResponse};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// GET /api/search
// ---------------------------------------------------------------------------

/// Search for players and return them as JSON.
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> AppResult<Json<SearchResponse>> {
    let query = params.query();
    let max = params.max_results(DEFAULT_SEARCH_MAX)?;
    tracing::info!(query = %query, max, "Search request");

    let players = state.lookup.search(&query, max).await?;

    Ok(Json(SearchResponse {
        query,
        count: players.len(),
        players,
    }))
}

// ---------------------------------------------------------------------------
// GET /api/export
// ---------------------------------------------------------------------------

/// Search for players and return the results as a CSV download.
pub async fn export(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> AppResult<Response> {
    let query = params.query();
    let max = params.max_results(DEFAULT_EXPORT_MAX)?;
    tracing::info!(query = %query, max, "Export request");

    let players = state.lookup.search(&query, max).await?;
    let csv = encode_records(&players);

    Ok(csv_attachment(&export_filename(&query), csv))
}

// ---------------------------------------------------------------------------
// POST /api/search-and-save
// ---------------------------------------------------------------------------

/// Search for players, persist the CSV, and return the players along with
/// the public URL of the saved file.
///
/// An empty body is treated like `{}`: default name and bound.
pub async fn search_and_save(
    State(state): State<AppState>,
    body: Bytes,
) -> AppResult<Json<SavedSearchResponse>> {
    let params = parse_body(&body)?;
    let query = params.query();
    let max = params.max_results(DEFAULT_EXPORT_MAX)?;
    tracing::info!(query = %query, max, "Search and save request");

    let players = state.lookup.search(&query, max).await?;
    let csv = encode_records(&players);
    let artifact = state.store.persist(&csv, &query).await?;

    Ok(Json(SavedSearchResponse {
        query,
        count: players.len(),
        filepath: data_url(&artifact.name),
        players,
    }))
}

/// Decode a JSON search body; an empty body yields default parameters.
fn parse_body(body: &[u8]) -> AppResult<SearchParams> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(SearchParams::default());
    }
    serde_json::from_slice(body)
        .map_err(|e| AppError::BadRequest(format!("Invalid JSON body: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_body_uses_defaults() {
        let params = parse_body(b"").unwrap();
        assert_eq!(params.query(), "Smith");
        assert_eq!(params.max_results(DEFAULT_EXPORT_MAX).unwrap(), 50);

        let params = parse_body(b"  \n").unwrap();
        assert_eq!(params.query(), "Smith");
    }

    #[test]
    fn body_fields_are_read() {
        let params = parse_body(br#"{"player": "Nakamura", "max": "5"}"#).unwrap();
        assert_eq!(params.query(), "Nakamura");
        assert_eq!(params.max_results(DEFAULT_EXPORT_MAX).unwrap(), 5);
    }

    #[test]
    fn malformed_body_is_bad_request() {
        assert!(matches!(parse_body(b"{name:"), Err(AppError::BadRequest(_))));
    }
}
