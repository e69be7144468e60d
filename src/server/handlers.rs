//! HTTP handlers.

use axum::body::Bytes;
use axum::extract::State;
use axum::response::Html;
use axum::Json;
use serde_json::{json, Value};

use super::types::{ApiError, RunRequest, RunSuccess};
use super::ServerState;

const INDEX_HTML: &str = include_str!("index.html");

/// Serves the HTML form.
pub async fn index_handler() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// Runs a check for the posted target.
///
/// The body is parsed leniently: anything that is not a JSON object with a
/// string `target` counts as an empty target.
pub async fn run_handler(
    State(state): State<ServerState>,
    body: Bytes,
) -> Result<Json<RunSuccess>, ApiError> {
    let request: RunRequest = serde_json::from_slice(&body).unwrap_or_default();
    let target = request.target.trim();
    if target.is_empty() {
        return Err(ApiError::EmptyTarget);
    }

    match state.checker.check(target, None).await {
        Ok(report) => Ok(Json(RunSuccess { ok: true, report })),
        Err(err) => {
            log::warn!("Check for {target} failed: {err:?}");
            Err(err.into())
        }
    }
}

/// Liveness probe.
pub async fn health_handler() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
