//! View model for the dashboard page.
//!
//! A [`Dashboard`] owns the chart series it draws and turns one poll's worth
//! of state into a [`DashboardView`] through [`Dashboard::render`]. Nothing is
//! cached between renders; each poll produces a fresh view.

use serde::Serialize;

use crate::{plants::PlantSummary, Alert, PlantProfile, Reading};

// ---

/// One chart line: what it is called, how it is coloured, where its values
/// come from.
#[derive(Clone, Copy)]
pub struct SeriesDef {
    pub label: &'static str,
    pub rgb: (u8, u8, u8),
    pub value: fn(&Reading) -> Option<f64>,
}

impl SeriesDef {
    fn color(&self, alpha: f32) -> String {
        let (r, g, b) = self.rgb;
        format!("rgba({}, {}, {}, {})", r, g, b, alpha)
    }
}

fn finite(value: f64) -> Option<f64> {
    value.is_finite().then_some(value)
}

/// The four charts shown on the page.
pub const DEFAULT_SERIES: [SeriesDef; 4] = [
    SeriesDef {
        label: "Avg Temp (°C)",
        rgb: (255, 99, 132),
        value: |r| finite(r.avg_temp),
    },
    SeriesDef {
        label: "Avg Humidity (%)",
        rgb: (54, 162, 235),
        value: |r| finite(r.avg_humidity),
    },
    SeriesDef {
        label: "Soil Moisture (%)",
        rgb: (75, 192, 192),
        value: |r| r.soil_moisture_percent.map(f64::from),
    },
    SeriesDef {
        label: "Vapor Pressure Deficit (kPa)",
        rgb: (255, 206, 86),
        value: |r| r.vpd,
    },
];

/// Rendered chart line, ready for the charting library.
#[derive(Debug, Clone, Serialize)]
pub struct ChartSeries {
    pub label: &'static str,
    pub border_color: String,
    pub background_color: String,
    pub data: Vec<Option<f64>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Charts {
    /// Shared x-axis labels (display timestamps).
    pub labels: Vec<String>,
    pub series: Vec<ChartSeries>,
}

/// Summary card for the latest reading. Averages are rounded to one decimal.
#[derive(Debug, Clone, Serialize)]
pub struct Summary {
    pub plant_name: &'static str,
    pub timestamp: String,
    pub avg_temp: Option<f64>,
    pub avg_humidity: Option<f64>,
    pub soil_moisture_percent: Option<u8>,
    pub vpd: Option<f64>,
    pub dew_point: Option<f64>,
    pub heat_index: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewStatus {
    Ok,
    NoData,
}

/// Everything the page needs for one poll.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardView {
    pub status: ViewStatus,
    pub plant: PlantSummary,
    pub summary: Option<Summary>,
    pub readings: Vec<Reading>,
    pub alerts: Vec<Alert>,
    pub charts: Charts,
}

/// Input of a single render.
#[derive(Debug, Clone, Copy)]
pub struct DashboardState<'a> {
    pub plant: &'a PlantProfile,
    pub readings: &'a [Reading],
    pub alerts: &'a [Alert],
}

#[derive(Clone)]
pub struct Dashboard {
    series: Vec<SeriesDef>,
}

impl Default for Dashboard {
    fn default() -> Self {
        Dashboard::new(DEFAULT_SERIES.to_vec())
    }
}

impl Dashboard {
    // ---
    pub fn new(series: Vec<SeriesDef>) -> Self {
        Dashboard { series }
    }

    pub fn render(&self, state: &DashboardState<'_>) -> DashboardView {
        // ---
        let labels = state
            .readings
            .iter()
            .map(|r| r.timestamp.display())
            .collect();

        let series = self
            .series
            .iter()
            .map(|def| ChartSeries {
                label: def.label,
                border_color: def.color(1.0),
                background_color: def.color(0.2),
                data: state.readings.iter().map(def.value).collect(),
            })
            .collect();

        let summary = state.readings.last().map(|latest| Summary {
            plant_name: state.plant.name,
            timestamp: latest.timestamp.display(),
            avg_temp: finite(round1(latest.avg_temp)),
            avg_humidity: finite(round1(latest.avg_humidity)),
            soil_moisture_percent: latest.soil_moisture_percent,
            vpd: latest.vpd,
            dew_point: latest.dew_point,
            heat_index: latest.heat_index,
        });

        DashboardView {
            status: if state.readings.is_empty() {
                ViewStatus::NoData
            } else {
                ViewStatus::Ok
            },
            plant: PlantSummary {
                id: state.plant.id,
                name: state.plant.name,
            },
            summary,
            readings: state.readings.to_vec(),
            alerts: state.alerts.to_vec(),
            charts: Charts { labels, series },
        }
    }
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
