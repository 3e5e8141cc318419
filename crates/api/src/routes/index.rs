use axum::{routing::get, Json, Router};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET / -- self-describing endpoint listing.
async fn index() -> Json<Value> {
    Json(json!({
        "name": "Player Search API",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "GET /health": "Health check",
            "GET /api/search?name=<player_name>&max=<number>": "Search for players (returns JSON)",
            "GET /api/export?name=<player_name>&max=<number>": "Export players as CSV",
            "POST /api/search-and-save": "Search and save CSV to disk (body: {name, max})",
            "GET /api/files": "List available CSV files",
            "GET /api/file/{filename}": "Download specific CSV file",
            "GET /data/{filename}": "Serve CSV file directly"
        },
        "example": {
            "search": "GET /api/search?name=Smith&max=10",
            "export": "GET /api/export?name=Smith&max=50",
            "files": "GET /api/files"
        }
    }))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(index))
}
