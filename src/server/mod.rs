//! Web front end for header checks.
//!
//! Provides three endpoints:
//! - `GET /` - HTML form that submits a target and renders the report
//! - `POST /run` - JSON API: `{"target": "example.com"}` in, report out
//! - `GET /health` - liveness probe
//!
//! Each `POST /run` performs one blocking-for-the-caller check; axum runs
//! concurrent requests on the tokio runtime.

mod handlers;
mod types;

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;

use crate::checker::Checker;
use handlers::{health_handler, index_handler, run_handler};
pub use types::{ApiError, RunFailure, RunRequest, RunSuccess, EMPTY_TARGET_MESSAGE};

/// Shared state for the web server.
#[derive(Clone)]
pub struct ServerState {
    /// Checker shared by all requests
    pub checker: Arc<Checker>,
}

impl ServerState {
    /// Wraps a checker for use as router state.
    pub fn new(checker: Checker) -> Self {
        Self {
            checker: Arc::new(checker),
        }
    }
}

/// Builds the router without binding a socket.
pub fn build_router(state: ServerState) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/run", post(run_handler))
        .route("/health", get(health_handler))
        .with_state(state)
}

/// Binds `bind` and serves until Ctrl-C.
pub async fn start_server(bind: &str, state: ServerState) -> Result<(), anyhow::Error> {
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(bind)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind server to {}: {}", bind, e))?;
    let addr = listener.local_addr()?;

    log::info!("Listening on http://{}/", addr);
    log::info!("  - Form: http://{}/", addr);
    log::info!("  - API:  POST http://{}/run", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| anyhow::anyhow!("Server error: {}", e))?;

    log::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::warn!("Failed to listen for Ctrl-C: {e}");
        std::future::pending::<()>().await;
    }
}
