//! Request-path errors and their HTTP mapping.
//!
//! Internal details stay in the logs; clients only ever see a fixed message.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::SourceError;

// ---

pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch data";

#[derive(Debug, Error)]
pub enum AppError {
    #[error("data source unavailable: {0}")]
    DataSource(#[from] SourceError),
}

pub type AppResult<T> = Result<T, AppError>;

/// JSON body of every error response: `{"error": "..."}`.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: &'static str,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // ---
        tracing::error!("{}", self);

        let (status, message) = match &self {
            AppError::DataSource(_) => (StatusCode::INTERNAL_SERVER_ERROR, FETCH_FAILED_MESSAGE),
        };

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}
