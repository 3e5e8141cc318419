pub mod health;
pub mod index;

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{files, players};
use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// GET  /search              search players, JSON          (?name=&max=, max 10)
/// GET  /export              search players, CSV download  (?name=&max=, max 50)
/// POST /search-and-save     search, persist CSV, JSON     ({name, max}, max 50)
/// GET  /files               list persisted CSV files
/// GET  /file/{filename}     download one persisted CSV file
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/search", get(players::search))
        .route("/export", get(players::export))
        .route("/search-and-save", post(players::search_and_save))
        .route("/files", get(files::list_files))
        .route("/file/{filename}", get(files::get_file))
}
