//! REST API over the calculation core.
//!
//! - `GET /project`: the project loaded at startup (meta, input, output)
//! - `GET /projection?years=N`: cash-flow projection of that project
//! - `GET /emissions`: its pollutant breakdown
//! - `GET /emission-factors`: the factor table
//! - `POST /recompute`: computes a posted `CalculationInput`
//! - `POST /validate`: plausibility checks on a posted `CalculationInput`

mod handlers;
mod types;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use tracing::info;

use crate::calc::CalculationRecord;
use crate::error::{Error, Result};

/// Application state shared across all request handlers.
///
/// Read-only; `POST` endpoints compute on the request body and never touch it.
pub struct AppState {
    /// Project computed at startup.
    pub record: CalculationRecord,
}

/// Builds the axum router with all API routes.
///
/// # Arguments
///
/// * `state` - Shared application state
///
/// # Returns
///
/// Configured `Router` ready to serve.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/project", get(handlers::get_project))
        .route("/projection", get(handlers::get_projection))
        .route("/emissions", get(handlers::get_emissions))
        .route("/emission-factors", get(handlers::get_emission_factors))
        .route("/recompute", post(handlers::post_recompute))
        .route("/validate", post(handlers::post_validate))
        .with_state(state)
}

/// Binds to the given address and serves the API until the server stops.
///
/// # Arguments
///
/// * `state` - Shared application state
/// * `addr` - Socket address to bind to
///
/// # Errors
///
/// Returns an error if the listener cannot bind to `addr` or the server fails.
pub async fn serve(state: Arc<AppState>, addr: SocketAddr) -> Result<()> {
    let app = router(state);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "API server listening");
    axum::serve(listener, app).await.map_err(Error::Io)
}
