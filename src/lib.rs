//! Plant environment monitoring backend.
//!
//! Reads sensor rows from a spreadsheet, derives climate metrics, checks them
//! against the selected plant's safe ranges and serves the results to the
//! dashboard page.
//!
//! Module layout follows the Explicit Module Boundary Pattern (EMBP): sibling
//! modules import each other through the re-exports below rather than
//! reaching into one another's internals.

pub mod alerts;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod metrics;
pub mod models;
pub mod plants;
pub mod routes;
pub mod source;

pub use alerts::{Alert, Metric, Severity};
pub use config::Config;
pub use dashboard::{Dashboard, DashboardState, DashboardView};
pub use error::{AppError, AppResult};
pub use models::{RawRow, Reading, ReadingTimestamp};
pub use plants::PlantProfile;
pub use routes::AppState;
pub use source::{RowSource, SheetsSource, SourceError};
