//! Route gateway: every endpoint module exports a subrouter, merged here.
use std::sync::Arc;

use axum::Router;
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};

use crate::{Config, Dashboard, RowSource};

mod dashboard;
mod data;
mod health;
mod plants;

// ---

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    // ---
    pub source: Arc<dyn RowSource>,
    pub config: Config,
    pub dashboard: Arc<Dashboard>,
}

impl AppState {
    pub fn new(source: Arc<dyn RowSource>, config: Config) -> Self {
        AppState {
            source,
            config,
            dashboard: Arc::new(Dashboard::default()),
        }
    }
}

pub fn router(state: AppState) -> Router {
    // ---
    let static_dir = state.config.static_dir.clone();

    let app = Router::new()
        .merge(data::router())
        .merge(dashboard::router())
        .merge(plants::router())
        .merge(health::router())
        .with_state(state);

    let app = if static_dir.is_dir() {
        tracing::info!("Serving dashboard page from {}", static_dir.display());
        app.fallback_service(ServeDir::new(static_dir))
    } else {
        tracing::debug!("No static directory at {}", static_dir.display());
        app
    };

    app.layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
