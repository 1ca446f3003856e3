//! Configuration loader for the `plantwatch` backend service.
//!
//! This module centralizes all runtime configuration values and their defaults,
//! loading from environment variables (with optional `.env` file support
//! provided by the caller). By consolidating configuration logic here, we
//! avoid scattering `env::var` calls throughout the codebase.
//!
use std::env;
use std::path::PathBuf;

use anyhow::{anyhow, Result};

/// Parse an optional numeric environment variable with a default value.
macro_rules! parse_env {
    ($var_name:expr, $ty:ty, $default:expr) => {
        env::var($var_name)
            .ok()
            .map(|v| v.parse::<$ty>())
            .transpose()
            .map_err(|e| anyhow!("Invalid {}: {}", $var_name, e))?
            .unwrap_or($default)
    };
}

/// Parse a required string environment variable.
macro_rules! require_env {
    ($var_name:expr) => {
        env::var($var_name)
            .map_err(|_| anyhow!("{} must be set in .env or environment", $var_name))?
    };
}

/// Read an optional string environment variable, treating empty as unset.
fn optional_env(var_name: &str) -> Option<String> {
    env::var(var_name).ok().filter(|v| !v.trim().is_empty())
}

pub const DEFAULT_SHEETS_API_URL: &str = "https://sheets.googleapis.com/v4/spreadsheets";
pub const DEFAULT_SHEETS_RANGE: &str = "Sheet1!A:F";

/// Strongly typed application configuration.
///
/// All fields are immutable after loading, ensuring a consistent configuration
/// snapshot for the lifetime of the application.
#[derive(Debug, Clone)]
pub struct Config {
    // ---
    /// Spreadsheet holding the sensor log.
    pub spreadsheet_id: String,

    /// Google API key, appended as `key=` to every request.
    pub sheets_api_key: Option<String>,

    /// OAuth access token, sent as a bearer token.
    pub sheets_access_token: Option<String>,

    /// Base URL of the `spreadsheets` collection.
    pub sheets_api_url: String,

    /// A1 range read on every poll.
    pub sheets_range: String,

    /// Number of most recent rows served per poll.
    pub max_rows: usize,

    /// Timeout for a single spreadsheet request.
    pub http_timeout_secs: u64,

    /// Port the HTTP server binds to.
    pub port: u16,

    /// Directory with the dashboard page, served at `/` when present.
    pub static_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            spreadsheet_id: String::new(),
            sheets_api_key: None,
            sheets_access_token: None,
            sheets_api_url: DEFAULT_SHEETS_API_URL.to_string(),
            sheets_range: DEFAULT_SHEETS_RANGE.to_string(),
            max_rows: 20,
            http_timeout_secs: 10,
            port: 3000,
            static_dir: PathBuf::from("static"),
        }
    }
}

/// Load configuration from environment variables with defaults.
///
/// Required:
/// - `SPREADSHEET_ID` – spreadsheet holding the sensor log
///
/// Optional:
/// - `SHEETS_API_KEY` / `SHEETS_ACCESS_TOKEN` – credentials (default: none)
/// - `SHEETS_API_URL` – Sheets API base (default: Google's v4 endpoint)
/// - `SHEETS_RANGE` – range to read (default: `Sheet1!A:F`)
/// - `MAX_ROWS` – rows served per poll (default: 20)
/// - `HTTP_TIMEOUT_SECS` – spreadsheet request timeout (default: 10)
/// - `PORT` – listen port (default: 3000)
/// - `STATIC_DIR` – dashboard page directory (default: `static`)
///
/// Returns an error if any required variable is missing or invalid.
pub fn load_from_env() -> Result<Config> {
    // ---
    let defaults = Config::default();

    let spreadsheet_id = require_env!("SPREADSHEET_ID");
    let max_rows = parse_env!("MAX_ROWS", usize, defaults.max_rows);
    let http_timeout_secs = parse_env!("HTTP_TIMEOUT_SECS", u64, defaults.http_timeout_secs);
    let port = parse_env!("PORT", u16, defaults.port);

    if max_rows == 0 {
        return Err(anyhow!("Invalid MAX_ROWS: must be at least 1"));
    }

    Ok(Config {
        spreadsheet_id,
        sheets_api_key: optional_env("SHEETS_API_KEY"),
        sheets_access_token: optional_env("SHEETS_ACCESS_TOKEN"),
        sheets_api_url: optional_env("SHEETS_API_URL").unwrap_or(defaults.sheets_api_url),
        sheets_range: optional_env("SHEETS_RANGE").unwrap_or(defaults.sheets_range),
        max_rows,
        http_timeout_secs,
        port,
        static_dir: optional_env("STATIC_DIR")
            .map(PathBuf::from)
            .unwrap_or(defaults.static_dir),
    })
}

/// Show only the last four characters of a secret.
fn mask(secret: &Option<String>) -> String {
    // ---
    match secret {
        None => "(not set)".to_string(),
        Some(s) if s.chars().count() <= 4 => "****".to_string(),
        Some(s) => {
            let tail: String = s.chars().skip(s.chars().count() - 4).collect();
            format!("****{}", tail)
        }
    }
}

impl Config {
    /// Log the loaded configuration for debugging purposes.
    ///
    /// Masks the API key and access token while showing all other
    /// configuration values that were loaded.
    pub fn log_config(&self) {
        // ---
        tracing::info!("Configuration loaded:");
        tracing::info!("  SPREADSHEET_ID      : {}", self.spreadsheet_id);
        tracing::info!("  SHEETS_API_KEY      : {}", mask(&self.sheets_api_key));
        tracing::info!("  SHEETS_ACCESS_TOKEN : {}", mask(&self.sheets_access_token));
        tracing::info!("  SHEETS_API_URL      : {}", self.sheets_api_url);
        tracing::info!("  SHEETS_RANGE        : {}", self.sheets_range);
        tracing::info!("  MAX_ROWS            : {}", self.max_rows);
        tracing::info!("  HTTP_TIMEOUT_SECS   : {}", self.http_timeout_secs);
        tracing::info!("  PORT                : {}", self.port);
        tracing::info!("  STATIC_DIR          : {}", self.static_dir.display());
    }
}

#[cfg(test)]
mod tests {
    // ---
    use super::*;

    #[test]
    fn test_mask_hides_secrets() {
        // ---
        assert_eq!(mask(&None), "(not set)");
        assert_eq!(mask(&Some("abc".into())), "****");
        assert_eq!(mask(&Some("AIzaSyExampleKey1234".into())), "****1234");
    }

    #[test]
    fn test_defaults() {
        // ---
        let cfg = Config::default();
        assert_eq!(cfg.sheets_range, "Sheet1!A:F");
        assert_eq!(cfg.max_rows, 20);
        assert_eq!(cfg.port, 3000);
    }
}
