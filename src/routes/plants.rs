use axum::{routing::get, Json, Router};

use crate::plants::{self, PlantSummary};

// ---

/// `GET /api/plants`: static list for the plant selector.
async fn list() -> Json<Vec<PlantSummary>> {
    Json(plants::list())
}

pub fn router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route("/api/plants", get(list))
}
