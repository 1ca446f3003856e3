//! Threshold alerts for the latest reading of the selected plant.
//!
//! Evaluation is stateless: every poll re-checks the newest reading from
//! scratch, so there is no suppression of repeated alerts and no hysteresis.

use serde::Serialize;

use crate::{PlantProfile, Reading};

// ---

/// Degrees above `max_temp` at which the extreme-temperature warning fires.
pub const EXTREME_TEMP_MARGIN: f64 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Critical,
    Warning,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    Temperature,
    Humidity,
    SoilMoisture,
}

/// One alert produced for a single reading and plant profile.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Alert {
    // ---
    pub severity: Severity,
    pub metric: Metric,
    pub message: String,
    pub observed_value: f64,
    pub safe_range_low: f64,
    pub safe_range_high: f64,
}

/// True when `value` lies strictly outside `[low, high]`. `NaN` never alerts.
fn out_of_range(value: f64, low: f64, high: f64) -> bool {
    value < low || value > high
}

/// Evaluate `reading` against `plant`.
///
/// Alerts come back in a fixed order: temperature, humidity, soil moisture,
/// then the extreme-temperature warning. The warning is independent of the
/// critical temperature alert and usually accompanies it.
pub fn evaluate(reading: &Reading, plant: &PlantProfile) -> Vec<Alert> {
    // ---
    let mut alerts = Vec::new();
    let temp = reading.avg_temp;
    let humidity = reading.avg_humidity;

    if out_of_range(temp, plant.min_temp, plant.max_temp) {
        alerts.push(Alert {
            severity: Severity::Critical,
            metric: Metric::Temperature,
            message: format!(
                "Critical Temperature: {:.1}°C (Safe: {}–{}°C)",
                temp, plant.min_temp, plant.max_temp
            ),
            observed_value: temp,
            safe_range_low: plant.min_temp,
            safe_range_high: plant.max_temp,
        });
    }

    if out_of_range(humidity, plant.min_humidity, plant.max_humidity) {
        alerts.push(Alert {
            severity: Severity::Critical,
            metric: Metric::Humidity,
            message: format!(
                "Critical Humidity: {:.1}% (Safe: {}–{}%)",
                humidity, plant.min_humidity, plant.max_humidity
            ),
            observed_value: humidity,
            safe_range_low: plant.min_humidity,
            safe_range_high: plant.max_humidity,
        });
    }

    if let Some(soil) = reading.soil_moisture_percent {
        let soil = f64::from(soil);
        if out_of_range(soil, plant.min_soil, plant.max_soil) {
            alerts.push(Alert {
                severity: Severity::Critical,
                metric: Metric::SoilMoisture,
                message: format!(
                    "Critical Soil Moisture: {}% (Safe: {}–{}%)",
                    soil, plant.min_soil, plant.max_soil
                ),
                observed_value: soil,
                safe_range_low: plant.min_soil,
                safe_range_high: plant.max_soil,
            });
        }
    }

    if temp > plant.max_temp + EXTREME_TEMP_MARGIN {
        alerts.push(Alert {
            severity: Severity::Warning,
            metric: Metric::Temperature,
            message: format!(
                "Temperature is more than {}°C above safe range for this plant!",
                EXTREME_TEMP_MARGIN
            ),
            observed_value: temp,
            safe_range_low: plant.min_temp,
            safe_range_high: plant.max_temp,
        });
    }

    if !alerts.is_empty() {
        tracing::debug!("{} alert(s) for {}", alerts.len(), plant.id);
    }
    alerts
}

/// Evaluate only the most recent reading (the last one). No readings, no alerts.
pub fn evaluate_latest(readings: &[Reading], plant: &PlantProfile) -> Vec<Alert> {
    readings
        .last()
        .map(|latest| evaluate(latest, plant))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    // ---
    use super::*;
    use crate::{plants, RawRow};

    fn create_test_reading(temp: &str, humidity: &str, soil: &str) -> Reading {
        // ---
        RawRow::new(["3/15/2024 10:30:00", temp, humidity, temp, humidity, soil]).to_reading()
    }

    fn metrics_of(alerts: &[Alert]) -> Vec<(Severity, Metric)> {
        alerts.iter().map(|a| (a.severity, a.metric)).collect()
    }

    #[test]
    fn test_reference_reading_is_safe() {
        // ---
        let reading =
            RawRow::new(["3/15/2024 10:30:00", "22.5", "60", "23.1", "58", "512"]).to_reading();
        assert!(evaluate(&reading, plants::thresholds("plant1")).is_empty());
    }

    #[test]
    fn test_boundaries_are_safe() {
        // ---
        let plant = plants::thresholds("plant1");

        // max temp, max humidity, max soil (raw 102 -> 90%)
        let upper = create_test_reading("37", "90", "102");
        assert_eq!(upper.soil_moisture_percent, Some(90));
        assert!(evaluate(&upper, plant).is_empty());

        // min temp, min humidity, min soil (raw 818 -> 20%)
        let lower = create_test_reading("15", "40", "818");
        assert_eq!(lower.soil_moisture_percent, Some(20));
        assert!(evaluate(&lower, plant).is_empty());
    }

    #[test]
    fn test_just_above_max_temp() {
        // ---
        let plant = plants::thresholds("plant1");
        let alerts = evaluate(&create_test_reading("37.1", "60", "512"), plant);

        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].severity, Severity::Critical);
        assert_eq!(alerts[0].metric, Metric::Temperature);
        assert_eq!(alerts[0].message, "Critical Temperature: 37.1°C (Safe: 15–37°C)");
        assert_eq!((alerts[0].safe_range_low, alerts[0].safe_range_high), (15.0, 37.0));
    }

    #[test]
    fn test_extreme_temperature_adds_warning() {
        // ---
        let plant = plants::thresholds("plant1");
        let alerts = evaluate(&create_test_reading("43", "60", "512"), plant);

        assert_eq!(
            metrics_of(&alerts),
            vec![
                (Severity::Critical, Metric::Temperature),
                (Severity::Warning, Metric::Temperature),
            ]
        );
        assert_eq!(
            alerts[1].message,
            "Temperature is more than 5°C above safe range for this plant!"
        );
    }

    #[test]
    fn test_exactly_five_above_is_not_extreme() {
        // ---
        let plant = plants::thresholds("plant1");
        let alerts = evaluate(&create_test_reading("42", "60", "512"), plant);
        assert_eq!(metrics_of(&alerts), vec![(Severity::Critical, Metric::Temperature)]);
    }

    #[test]
    fn test_fixed_alert_order() {
        // ---
        let plant = plants::thresholds("plant1");
        // Hot, humid and dry soil all at once
        let alerts = evaluate(&create_test_reading("50", "95", "1000"), plant);

        assert_eq!(
            metrics_of(&alerts),
            vec![
                (Severity::Critical, Metric::Temperature),
                (Severity::Critical, Metric::Humidity),
                (Severity::Critical, Metric::SoilMoisture),
                (Severity::Warning, Metric::Temperature),
            ]
        );
        assert_eq!(alerts[1].message, "Critical Humidity: 95.0% (Safe: 40–90%)");
        assert_eq!(alerts[2].message, "Critical Soil Moisture: 2% (Safe: 20–90%)");
    }

    #[test]
    fn test_low_values_alert() {
        // ---
        let plant = plants::thresholds("plant3");
        let alerts = evaluate(&create_test_reading("10", "20", "900"), plant);

        assert_eq!(alerts.len(), 3);
        assert!(alerts.iter().all(|a| a.severity == Severity::Critical));
        assert_eq!(alerts[0].observed_value, 10.0);
    }

    #[test]
    fn test_thresholds_depend_on_plant() {
        // ---
        // 38°C is too hot for plant1 but fine for plant2
        let reading = create_test_reading("38", "60", "512");
        assert_eq!(evaluate(&reading, plants::thresholds("plant1")).len(), 1);
        assert!(evaluate(&reading, plants::thresholds("plant2")).is_empty());
    }

    #[test]
    fn test_missing_values_do_not_alert() {
        // ---
        let reading = RawRow::new(["3/15/2024 10:30:00", "", "", "", ""]).to_reading();
        assert!(evaluate(&reading, plants::thresholds("plant1")).is_empty());
    }

    #[test]
    fn test_evaluate_latest_uses_last_reading() {
        // ---
        let plant = plants::thresholds("plant1");
        let readings = vec![
            create_test_reading("50", "60", "512"),
            create_test_reading("25", "60", "512"),
        ];
        assert!(evaluate_latest(&readings, plant).is_empty());
        assert!(evaluate_latest(&[], plant).is_empty());
    }

    #[test]
    fn test_alert_json_shape() {
        // ---
        let plant = plants::thresholds("plant1");
        let alerts = evaluate(&create_test_reading("25", "60", "1023"), plant);
        let json = serde_json::to_value(&alerts[0]).unwrap();

        assert_eq!(json["severity"], "critical");
        assert_eq!(json["metric"], "soil_moisture");
        assert_eq!(json["observed_value"], 0.0);
    }
}
