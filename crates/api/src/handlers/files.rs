//! Handlers for browsing persisted CSV files.

use axum::extract::{Path, State};
use axum::response::Response;
use axum::Json;

use crate::error::AppResult;
use crate::handlers::csv_attachment;
use crate::response::{data_url, FileInfo, FilesResponse};
use crate::state::AppState;

/// GET /api/files -- list persisted CSV files.
pub async fn list_files(State(state): State<AppState>) -> AppResult<Json<FilesResponse>> {
    let files = state
        .store
        .list()
        .await?
        .into_iter()
        .map(|entry| FileInfo {
            url: data_url(&entry.name),
            name: entry.name,
            size: entry.size_bytes,
        })
        .collect();

    Ok(Json(FilesResponse { files }))
}

/// GET /api/file/{filename} -- download one persisted CSV file.
pub async fn get_file(
    State(state): State<AppState>,
    Path(filename): Path<String>,
) -> AppResult<Response> {
    let content = state.store.retrieve(&filename).await?;
    Ok(csv_attachment(&filename, content))
}
