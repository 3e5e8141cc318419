#![allow(dead_code)]

use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use playersearch_api::config::{CorsOrigins, ServerConfig};
use playersearch_api::router::build_app_router;
use playersearch_api::state::AppState;
use playersearch_core::player::{PlayerRecord, Ratings};
use playersearch_lookup::{LookupError, PlayerLookup, StaticLookup};

/// Build a test `ServerConfig` storing artifacts under `data_dir`.
pub fn test_config(data_dir: &Path) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: CorsOrigins::Any,
        request_timeout_secs: 30,
        data_dir: data_dir.to_path_buf(),
        lookup_url: "http://127.0.0.1:9".to_string(),
        lookup_timeout_secs: 5,
    }
}

/// Build the full application router (same middleware stack as
/// production) over the given lookup provider.
pub fn build_test_app_with(data_dir: &Path, lookup: Arc<dyn PlayerLookup>) -> Router {
    build_app_router(AppState::new(test_config(data_dir), lookup))
}

/// Build the full application router over the [`sample_players`] directory.
pub fn build_test_app(data_dir: &Path) -> Router {
    build_test_app_with(data_dir, Arc::new(StaticLookup::new(sample_players())))
}

/// Lookup provider that always fails, for error-path tests.
pub struct FailingLookup;

#[async_trait]
impl PlayerLookup for FailingLookup {
    async fn search(&self, _query: &str, _max: usize) -> Result<Vec<PlayerRecord>, LookupError> {
        Err(LookupError::Upstream {
            status: 503,
            body: "directory offline".to_string(),
        })
    }
}

/// A small directory with varying field completeness.
pub fn sample_players() -> Vec<PlayerRecord> {
    vec![
        PlayerRecord::named("SMITH, JOHN")
            .with_member_id("12345678")
            .with_uscf_id("12345678")
            .with_state("NY")
            .with_ratings(Ratings {
                regular: Some(1834u32.into()),
                quick: Some(1790u32.into()),
                blitz: Some(1755u32.into()),
                online_regular: Some(1600u32.into()),
                online_quick: Some(1580u32.into()),
                online_blitz: Some(1550u32.into()),
                ..Ratings::default()
            })
            .with_expiration_date("2027-03-31"),
        PlayerRecord::named("SMITH, JANE")
            .with_member_id("87654321")
            .with_state("CA")
            .with_ratings(Ratings {
                quick: Some("1402/12".into()),
                ..Ratings::default()
            }),
        PlayerRecord::named("O'BRIEN, PAT \"THE ROOK\"").with_member_id("30012345"),
        PlayerRecord::named("JONES, MARY").with_member_id("11112222"),
    ]
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(app, request).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn post_empty(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn body_text(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

pub fn header<'a>(response: &'a Response<Body>, name: &str) -> &'a str {
    response
        .headers()
        .get(name)
        .unwrap_or_else(|| panic!("missing {name} header"))
        .to_str()
        .unwrap()
}
