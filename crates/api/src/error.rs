use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use playersearch_core::error::CoreError;
use playersearch_lookup::LookupError;
use playersearch_store::StoreError;

/// Application-level error type for HTTP handlers.
///
/// Wraps the domain, lookup, and storage errors and implements
/// [`IntoResponse`] to produce consistent `{ "error", "code" }` JSON bodies.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `playersearch_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The lookup provider could not be reached or failed.
    #[error(transparent)]
    Lookup(#[from] LookupError),

    /// Reading or writing an artifact failed.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Core(core) => classify_core_error(core),

            AppError::Lookup(err) => {
                tracing::error!(error = %err, "Player lookup failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "LOOKUP_FAILED",
                    err.to_string(),
                )
            }

            AppError::Store(err) => match err {
                StoreError::NotFound { .. } => (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    "File not found".to_string(),
                ),
                StoreError::Core(core) => classify_core_error(core),
                StoreError::Io { .. } => {
                    tracing::error!(error = %err, "Artifact storage failed");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "STORAGE_FAILED",
                        err.to_string(),
                    )
                }
            },

            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

fn classify_core_error(err: &CoreError) -> (StatusCode, &'static str, String) {
    match err {
        CoreError::InvalidName { .. } => (StatusCode::BAD_REQUEST, "INVALID_NAME", err.to_string()),
        CoreError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
    }
}
