//! Application entry point for the `plantwatch` backend service.
//!
//! This binary orchestrates the full startup sequence for the dashboard
//! API, including:
//! - Loading configuration from environment variables or `.env`
//! - Initializing structured logging/tracing
//! - Building the Google Sheets client used as the row source
//! - Mounting all API routes via the `routes` gateway (EMBP pattern)
//! - Binding the Axum HTTP server and serving requests
//!
//! # Environment Variables
//! - `SPREADSHEET_ID` (**required**) – spreadsheet holding the sensor log
//! - `SHEETS_API_KEY`, `SHEETS_ACCESS_TOKEN` (optional) – credentials
//! - `PORT` (optional) – listen port (default: 3000)
//! - `PLANTWATCH_LOG_LEVEL` (optional) – log verbosity (default: `debug`)
//! - `PLANTWATCH_SPAN_EVENTS` (optional) – span event mode for tracing
//!
//! See `config.rs` for the full list.
use std::{env, net::SocketAddr, sync::Arc};

use anyhow::Result;
use axum::Router;
use dotenvy::dotenv;
use is_terminal::IsTerminal;
use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::fmt::format::FmtSpan;

use plantwatch::{config, routes, AppState, SheetsSource};

// ---

#[tokio::main]
async fn main() -> Result<()> {
    // ---
    dotenv().ok();
    init_tracing();

    let cfg = config::load_from_env()?;
    cfg.log_config();

    let source = SheetsSource::new(&cfg)
        .map_err(|e| anyhow::anyhow!("Failed to initialize Sheets client: {}", e))?;
    tracing::info!("Google Sheets client initialized");

    let addr = SocketAddr::from(([0, 0, 0, 0], cfg.port));

    // Build app from routes gateway (EMBP)
    let app: Router = routes::router(AppState::new(Arc::new(source), cfg));

    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

// ---

/// Initialize the global tracing subscriber for structured logging.
///
/// This function configures the [`tracing_subscriber`] with:
/// - Log target, file, and line number output enabled
/// - Color output controlled by TTY detection and `FORCE_COLOR` env var:
///   - `FORCE_COLOR=1|true|yes`: force colors on
///   - `FORCE_COLOR=0|false|no`: force colors off
///   - unset or other values: auto-detect TTY
/// - Span event emission mode controlled by the `PLANTWATCH_SPAN_EVENTS` env var:
///   - `"full"`       : emit ENTER, EXIT, and CLOSE events with timing
///   - `"enter_exit"` : emit ENTER and EXIT only
///   - unset or other values: emit CLOSE events only (default)
/// - Log level controlled by the `PLANTWATCH_LOG_LEVEL` env var
///
/// Called once at startup, after `.env` is loaded so the variables above may
/// live there too.
fn init_tracing() {
    // ---
    let span_events = match env::var("PLANTWATCH_SPAN_EVENTS").as_deref() {
        Ok("full") => FmtSpan::FULL,
        Ok("enter_exit") => FmtSpan::ENTER | FmtSpan::EXIT,
        _ => FmtSpan::CLOSE,
    };

    // Determine if we should use colors
    let use_color = match env::var("FORCE_COLOR").as_deref() {
        Ok("1") | Ok("true") | Ok("yes") => true,
        Ok("0") | Ok("false") | Ok("no") => false,
        _ => std::io::stdout().is_terminal(),
    };

    // Use RUST_LOG if available, otherwise fall back to PLANTWATCH_LOG_LEVEL
    let env_filter = if env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        let level = match env::var("PLANTWATCH_LOG_LEVEL").ok().as_deref() {
            Some("trace") => "trace",
            Some("debug") => "debug",
            Some("info") => "info",
            Some("warn") => "warn",
            Some("error") => "error",
            _ => "debug",
        };
        EnvFilter::new(format!("{level},hyper=info,reqwest=info"))
    };

    tracing_subscriber::fmt()
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .with_span_events(span_events)
        .with_env_filter(env_filter)
        .with_ansi(use_color)
        .compact()
        .init();
}
