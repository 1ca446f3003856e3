//! Data models for the plant monitoring pipeline.
//!
//! A [`RawRow`] is exactly what the spreadsheet hands back: six formatted
//! cells. [`RawRow::to_reading`] turns it into the canonical [`Reading`] the
//! rest of the service works with, attaching the derived climate metrics.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize, Serializer};

use crate::metrics;

// ---

/// Upper end of the soil sensor's ADC range (bone dry).
pub const SOIL_ADC_DRY: f64 = 1023.0;

/// Lower end of the soil sensor's ADC range (saturated).
pub const SOIL_ADC_WET: f64 = 0.0;

/// Raw spreadsheet row:
/// `[timestamp, primary temp, primary humidity, secondary temp, secondary humidity, soil ADC]`.
///
/// Cells arrive as formatted text. Trailing empty cells may be missing
/// entirely, so every accessor tolerates short rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawRow(pub Vec<String>);

/// Point in time a reading was taken, or the original cell text if it could
/// not be parsed.
#[derive(Debug, Clone, PartialEq)]
pub enum ReadingTimestamp {
    Parsed(NaiveDateTime),
    Unparsed(String),
}

/// Canonical reading built fresh from one [`RawRow`] on every poll.
///
/// Non-numeric channel text becomes `NaN` (serialized as `null`), and derived
/// metrics that end up non-finite are left out as `None` rather than failing
/// the row.
#[derive(Debug, Clone, Serialize)]
pub struct Reading {
    // ---
    pub timestamp: ReadingTimestamp,
    pub primary_temp: f64,
    pub primary_humidity: f64,
    pub secondary_temp: f64,
    pub secondary_humidity: f64,
    pub avg_temp: f64,
    pub avg_humidity: f64,
    pub soil_moisture_percent: Option<u8>,
    pub vpd: Option<f64>,
    pub dew_point: Option<f64>,
    pub heat_index: Option<f64>,
}

impl RawRow {
    // ---
    pub fn new<S: Into<String>>(cells: impl IntoIterator<Item = S>) -> Self {
        RawRow(cells.into_iter().map(Into::into).collect())
    }

    /// Cell text at `index`, empty when the row is short.
    pub fn cell(&self, index: usize) -> &str {
        self.0.get(index).map(String::as_str).unwrap_or("")
    }

    /// Numeric value of the cell at `index`, `NaN` when it is not a number.
    fn number(&self, index: usize) -> f64 {
        self.cell(index).trim().parse::<f64>().unwrap_or(f64::NAN)
    }

    pub fn to_reading(&self) -> Reading {
        // ---
        let primary_temp = self.number(1);
        let primary_humidity = self.number(2);
        let secondary_temp = self.number(3);
        let secondary_humidity = self.number(4);

        let avg_temp = (primary_temp + secondary_temp) / 2.0;
        let avg_humidity = (primary_humidity + secondary_humidity) / 2.0;

        let raw_ts = self.cell(0);
        let timestamp = match parse_timestamp(raw_ts) {
            Some(ts) => ReadingTimestamp::Parsed(ts),
            None => {
                tracing::warn!("Invalid timestamp {:?}, keeping raw text", raw_ts);
                ReadingTimestamp::Unparsed(raw_ts.to_string())
            }
        };

        Reading {
            timestamp,
            primary_temp,
            primary_humidity,
            secondary_temp,
            secondary_humidity,
            avg_temp,
            avg_humidity,
            soil_moisture_percent: soil_moisture_percent(self.number(5)),
            vpd: finite(metrics::vpd(avg_temp, avg_humidity)),
            dew_point: finite(metrics::dew_point(avg_temp, avg_humidity)),
            heat_index: finite(metrics::heat_index(avg_temp, avg_humidity)),
        }
    }
}

impl ReadingTimestamp {
    /// Human-readable label, `DD/MM/YYYY, HH:MM:SS` or the raw text.
    pub fn display(&self) -> String {
        match self {
            ReadingTimestamp::Parsed(ts) => ts.format("%d/%m/%Y, %H:%M:%S").to_string(),
            ReadingTimestamp::Unparsed(raw) => raw.clone(),
        }
    }
}

impl Serialize for ReadingTimestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ReadingTimestamp::Parsed(ts) => ts.serialize(serializer),
            ReadingTimestamp::Unparsed(raw) => serializer.serialize_str(raw),
        }
    }
}

/// Parse the sheet's `M/D/YYYY H:MM:SS` timestamp format.
pub fn parse_timestamp(text: &str) -> Option<NaiveDateTime> {
    // ---
    let (date_part, time_part) = text.trim().split_once(' ')?;

    let date: Vec<u32> = date_part
        .split('/')
        .map(|p| p.trim().parse().ok())
        .collect::<Option<_>>()?;
    let time: Vec<u32> = time_part
        .split(':')
        .map(|p| p.trim().parse().ok())
        .collect::<Option<_>>()?;

    let ([month, day, year], [hour, minute, second]) = (date.as_slice(), time.as_slice()) else {
        return None;
    };

    chrono::NaiveDate::from_ymd_opt(i32::try_from(*year).ok()?, *month, *day)?
        .and_hms_opt(*hour, *minute, *second)
}

/// Convert a raw soil ADC value into a moisture percentage.
///
/// The sensor reads high when dry, so the scale is inverted. Values outside
/// the ADC range are clamped to `0..=100`.
pub fn soil_moisture_percent(raw: f64) -> Option<u8> {
    // ---
    if !raw.is_finite() {
        return None;
    }
    let percent = (100.0 * (1.0 - (raw - SOIL_ADC_WET) / (SOIL_ADC_DRY - SOIL_ADC_WET))).round();
    Some(percent.clamp(0.0, 100.0) as u8)
}

/// Normalize a batch of rows, preserving order. One bad row never fails the
/// batch.
pub fn normalize_rows(rows: &[RawRow]) -> Vec<Reading> {
    rows.iter().map(RawRow::to_reading).collect()
}

fn finite(value: f64) -> Option<f64> {
    value.is_finite().then_some(value)
}
