//! Request and response types for the JSON API.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::error_handling::CheckError;
use crate::report::Report;

/// Message returned when the request has no usable target.
pub const EMPTY_TARGET_MESSAGE: &str = "Please provide a domain (example.com)";

/// Body of `POST /run`. A missing `target` is treated as empty.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RunRequest {
    /// Domain or URL to check
    #[serde(default)]
    pub target: String,
}

/// Successful `POST /run` response.
#[derive(Debug, Serialize)]
pub struct RunSuccess {
    /// Always `true`
    pub ok: bool,
    /// The check result
    pub report: Report,
}

/// Failed `POST /run` response.
#[derive(Debug, Serialize)]
pub struct RunFailure {
    /// Always `false`
    pub ok: bool,
    /// Human-readable reason
    pub error: String,
}

/// Why a `POST /run` request failed.
#[derive(Debug)]
pub enum ApiError {
    /// No target, or only whitespace
    EmptyTarget,
    /// The check itself failed
    Check(CheckError),
}

impl From<CheckError> for ApiError {
    fn from(err: CheckError) -> Self {
        ApiError::Check(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Only the display message is returned; source chains and debug
        // output stay in the server log.
        let (status, error) = match self {
            ApiError::EmptyTarget => (StatusCode::BAD_REQUEST, EMPTY_TARGET_MESSAGE.to_string()),
            ApiError::Check(err) => (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()),
        };
        (status, Json(RunFailure { ok: false, error })).into_response()
    }
}
