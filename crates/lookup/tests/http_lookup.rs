//! Tests for `HttpPlayerLookup` against an in-process upstream server.

use std::collections::HashMap;
use std::time::Duration;

use assert_matches::assert_matches;
use axum::extract::Query;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;

use playersearch_lookup::{HttpPlayerLookup, LookupError, PlayerLookup};

/// Serve `router` on an ephemeral local port and return its base URL.
async fn spawn_upstream(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

fn client(base_url: &str) -> HttpPlayerLookup {
    HttpPlayerLookup::new(base_url, Duration::from_secs(5)).unwrap()
}

/// Upstream that echoes the received query parameters back as player data.
async fn echo_search(Query(params): Query<HashMap<String, String>>) -> Json<serde_json::Value> {
    let name = params.get("name").cloned().unwrap_or_default();
    let max = params.get("max").cloned().unwrap_or_default();
    Json(json!({
        "query": name,
        "count": 3,
        "players": [
            { "name": name, "memberId": max, "ratings": { "regular": 1834 } },
            { "name": "Second", "memberId": "2" },
            { "name": "Third", "memberId": "3" }
        ]
    }))
}

#[tokio::test]
async fn sends_name_and_max_and_parses_players() {
    let base = spawn_upstream(Router::new().route("/api/search", get(echo_search))).await;

    let players = client(&base).search("O'Brien Jr.", 10).await.unwrap();

    assert_eq!(players.len(), 3);
    assert_eq!(players[0].name.as_deref(), Some("O'Brien Jr."));
    assert_eq!(players[0].member_id.as_ref().unwrap().to_string(), "10");
    assert_eq!(
        players[0]
            .ratings
            .as_ref()
            .and_then(|r| r.regular.as_ref())
            .map(ToString::to_string)
            .as_deref(),
        Some("1834")
    );
}

#[tokio::test]
async fn truncates_to_max_results() {
    let base = spawn_upstream(Router::new().route("/api/search", get(echo_search))).await;

    let players = client(&base).search("Smith", 2).await.unwrap();

    assert_eq!(players.len(), 2);
}

#[tokio::test]
async fn trailing_slash_in_base_url_is_tolerated() {
    let base = spawn_upstream(Router::new().route("/api/search", get(echo_search))).await;

    let players = client(&format!("{base}/")).search("Smith", 10).await.unwrap();

    assert_eq!(players.len(), 3);
}

#[tokio::test]
async fn non_success_status_is_upstream_error() {
    let router = Router::new().route(
        "/api/search",
        get(|| async { (StatusCode::BAD_GATEWAY, "directory unavailable") }),
    );
    let base = spawn_upstream(router).await;

    let err = client(&base).search("Smith", 10).await.unwrap_err();

    assert_matches!(
        err,
        LookupError::Upstream { status: 502, ref body } if body == "directory unavailable"
    );
}

#[tokio::test]
async fn malformed_body_is_request_error() {
    let router = Router::new().route("/api/search", get(|| async { "not json" }));
    let base = spawn_upstream(router).await;

    let err = client(&base).search("Smith", 10).await.unwrap_err();

    assert_matches!(err, LookupError::Request(_));
}

#[tokio::test]
async fn unreachable_upstream_is_request_error() {
    // Bind and immediately release a port so nothing is listening on it.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = client(&format!("http://{addr}"))
        .search("Smith", 10)
        .await
        .unwrap_err();

    assert_matches!(err, LookupError::Request(_));
}

#[tokio::test]
async fn one_malformed_player_does_not_fail_the_lookup() {
    let router = Router::new().route(
        "/api/search",
        get(|| async {
            Json(json!({
                "query": "Smith",
                "count": 3,
                "players": [
                    { "name": "SMITH, JOHN", "memberId": "1", "state": "NY" },
                    { "name": "SMITH, JANE", "memberId": "2", "state": false, "ratings": [] },
                    { "name": "SMITH, JOE", "memberId": "3", "fideId": "2000001" }
                ]
            }))
        }),
    );
    let base = spawn_upstream(router).await;

    let players = client(&base).search("Smith", 10).await.unwrap();

    assert_eq!(players.len(), 3);
    assert!(players[1].state.is_none());
    assert!(players[1].ratings.is_none());
    assert_eq!(players[1].member_id.as_ref().unwrap().to_string(), "2");
    assert_eq!(players[2].extra["fideId"], "2000001");
}
