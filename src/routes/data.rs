use axum::{extract::State, routing::get, Json, Router};
use tracing::info;

use super::AppState;
use crate::{source, AppResult, RawRow};

// ---

pub fn router() -> Router<AppState> {
    // ---
    Router::new().route("/api/data", get(handler))
}

/// `GET /api/data`: the latest raw rows, unmodified.
async fn handler(State(state): State<AppState>) -> AppResult<Json<Vec<RawRow>>> {
    // ---
    let rows = source::latest_rows(
        state.source.as_ref(),
        &state.config.sheets_range,
        state.config.max_rows,
    )
    .await?;

    info!("GET /api/data - returning {} rows", rows.len());
    Ok(Json(rows))
}
