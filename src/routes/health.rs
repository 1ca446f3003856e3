// src/routes/health.rs
//! Liveness endpoint for the plantwatch backend.
//!
//! Used by container orchestrators and CI to check that the service answers
//! HTTP requests. Exports a subrouter to the gateway (`mod.rs`) so `main.rs`
//! never sees individual endpoints.

use axum::{routing::get, Json, Router};
use serde::Serialize;

/// JSON response body for the `/health` endpoint.
#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
}

/// Handle `GET /health`.
///
/// Returns a static JSON object and never touches the spreadsheet, so a
/// spreadsheet outage does not make the service look dead.
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

/// Create a subrouter containing the `/health` route.
///
/// Generic over the application state so it merges into the gateway router
/// regardless of the state type.
pub fn router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route("/health", get(health))
}
