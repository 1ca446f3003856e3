//! Spreadsheet data source.
//!
//! The service only needs one capability from the spreadsheet: hand back the
//! rows of a fixed range. [`RowSource`] captures that, [`SheetsSource`]
//! implements it against the Google Sheets v4 REST API, and [`latest_rows`]
//! applies the header/tail/ordering rules on top of any source.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::Deserialize;
use thiserror::Error;

use crate::{Config, RawRow};

// ---

/// First cell of the optional header row.
pub const HEADER_SENTINEL: &str = "Timestamp";

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("request to data source failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid data source URL '{0}'")]
    Url(String),
}

/// Supplier of raw spreadsheet rows, top-to-bottom in sheet order.
#[async_trait]
pub trait RowSource: Send + Sync {
    async fn fetch_rows(&self, range: &str) -> Result<Vec<RawRow>, SourceError>;
}

/// Fetch `range` and keep the rows the dashboard shows.
///
/// A leading header row (first cell `Timestamp`) is dropped, then the last
/// `max_rows` rows are kept and reversed. An empty sheet is `Ok(vec![])`,
/// not an error.
pub async fn latest_rows(
    source: &dyn RowSource,
    range: &str,
    max_rows: usize,
) -> Result<Vec<RawRow>, SourceError> {
    // ---
    let mut rows = source.fetch_rows(range).await?;
    tracing::debug!("Fetched {} rows from range {}", rows.len(), range);

    if rows.first().is_some_and(|r| r.cell(0) == HEADER_SENTINEL) {
        rows.remove(0);
    }

    let start = rows.len().saturating_sub(max_rows);
    let mut tail = rows.split_off(start);
    tail.reverse();
    Ok(tail)
}

// ---

/// `spreadsheets.values.get` response body.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ValueRange {
    #[serde(default)]
    values: Vec<Vec<String>>,
}

/// Google Sheets v4 client holding one long-lived HTTP connection pool.
///
/// Authenticates with an API key, a bearer access token, both, or neither
/// (public sheets behind a proxy).
#[derive(Debug, Clone)]
pub struct SheetsSource {
    // ---
    client: Client,
    base_url: Url,
    spreadsheet_id: String,
    api_key: Option<String>,
    access_token: Option<String>,
}

impl SheetsSource {
    // ---
    pub fn new(config: &Config) -> Result<Self, SourceError> {
        // ---
        let base_url = Url::parse(&config.sheets_api_url)
            .map_err(|_| SourceError::Url(config.sheets_api_url.clone()))?;
        if base_url.cannot_be_a_base() {
            return Err(SourceError::Url(config.sheets_api_url.clone()));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.http_timeout_secs))
            .build()?;

        Ok(SheetsSource {
            client,
            base_url,
            spreadsheet_id: config.spreadsheet_id.clone(),
            api_key: config.sheets_api_key.clone(),
            access_token: config.sheets_access_token.clone(),
        })
    }

    /// `<base>/<spreadsheet id>/values/<range>`, each segment percent-encoded.
    fn values_url(&self, range: &str) -> Url {
        // ---
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments
                .pop_if_empty()
                .push(&self.spreadsheet_id)
                .push("values")
                .push(range);
        }
        url
    }
}

#[async_trait]
impl RowSource for SheetsSource {
    async fn fetch_rows(&self, range: &str) -> Result<Vec<RawRow>, SourceError> {
        // ---
        let url = self.values_url(range);
        tracing::debug!("Fetching sheet values from: {}", url);

        let mut request = self.client.get(url).query(&[
            ("valueRenderOption", "FORMATTED_VALUE"),
            ("dateTimeRenderOption", "FORMATTED_STRING"),
        ]);
        if let Some(key) = &self.api_key {
            request = request.query(&[("key", key)]);
        }
        if let Some(token) = &self.access_token {
            request = request.bearer_auth(token);
        }

        let body: ValueRange = request.send().await?.error_for_status()?.json().await?;

        Ok(body.values.into_iter().map(RawRow).collect())
    }
}
