use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use tracing::{debug, info};

use super::AppState;
use crate::{alerts, models, plants, source, AppResult, DashboardState, DashboardView};

// ---

pub fn router() -> Router<AppState> {
    // ---
    Router::new().route("/api/dashboard", get(handler))
}

/// Query parameters for the dashboard view
#[derive(Debug, Deserialize)]
pub struct DashboardQuery {
    /// Plant profile id; unknown or missing ids use the default profile.
    plant: Option<String>,
}

/// `GET /api/dashboard?plant=<id>`: one poll's readings, alerts, summary
/// card and chart series for the selected plant.
async fn handler(
    Query(params): Query<DashboardQuery>,
    State(state): State<AppState>,
) -> AppResult<Json<DashboardView>> {
    // ---
    let plant = plants::thresholds(params.plant.as_deref().unwrap_or_default());
    info!("GET /api/dashboard - plant {}", plant.id);

    let rows = source::latest_rows(
        state.source.as_ref(),
        &state.config.sheets_range,
        state.config.max_rows,
    )
    .await?;

    debug!("GET /api/dashboard - normalizing {} rows", rows.len());
    let readings = models::normalize_rows(&rows);
    let alerts = alerts::evaluate_latest(&readings, plant);

    let view = state.dashboard.render(&DashboardState {
        plant,
        readings: &readings,
        alerts: &alerts,
    });

    info!(
        "GET /api/dashboard - {} readings, {} alerts",
        view.readings.len(),
        view.alerts.len()
    );
    Ok(Json(view))
}
