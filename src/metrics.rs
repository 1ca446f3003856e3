//! Derived climate metrics computed from averaged temperature and humidity.
//!
//! All functions are pure and round their result to two decimal places,
//! half away from zero. Inputs outside the physical domain (e.g. humidity of
//! zero for the dew point) are not guarded and yield `NaN`; callers decide
//! how to present a non-finite value.

// ---

/// Round half away from zero to two decimal places.
pub fn round2(value: f64) -> f64 {
    // ---
    (value * 100.0).round() / 100.0
}

/// Vapor pressure deficit in kilopascals.
///
/// Saturated vapor pressure follows the Tetens form
/// `0.6108 * exp(17.27 * T / (T + 237.3))`; the deficit is the unsaturated
/// share of it at the given relative humidity.
pub fn vpd(temp_c: f64, humidity: f64) -> f64 {
    // ---
    let svp = 0.6108 * (17.27 * temp_c / (temp_c + 237.3)).exp();
    round2(svp * (1.0 - humidity / 100.0))
}

/// Dew point in degrees Celsius (Magnus formula inversion).
pub fn dew_point(temp_c: f64, humidity: f64) -> f64 {
    // ---
    const A: f64 = 17.27;
    const B: f64 = 237.7;

    let alpha = A * temp_c / (B + temp_c) + (humidity / 100.0).ln();
    round2(B * alpha / (A - alpha))
}

/// Heat index in degrees Celsius using the Rothfusz regression.
///
/// The regression is only meaningful above roughly 26.7°C. The result is
/// never lower than the ambient temperature.
pub fn heat_index(temp_c: f64, humidity: f64) -> f64 {
    // ---
    let t = temp_c;
    let rh = humidity;
    let hi = -8.784695 + 1.61139411 * t + 2.338549 * rh
        - 0.14611605 * t * rh
        - 0.012308094 * t * t
        - 0.016424828 * rh * rh
        + 0.002211732 * t * t * rh
        + 0.00072546 * t * rh * rh
        - 0.000003582 * t * t * rh * rh;

    round2(if hi > t { hi } else { t })
}

#[cfg(test)]
mod tests {
    // ---
    use super::*;
    use proptest::prelude::*;

    fn has_two_decimals(value: f64) -> bool {
        ((value * 100.0).round() - value * 100.0).abs() < 1e-6
    }

    #[test]
    fn test_round2_half_away_from_zero() {
        // ---
        assert_eq!(round2(1.005_000_1), 1.01);
        assert_eq!(round2(0.125), 0.13);
        assert_eq!(round2(-2.346), -2.35);
        assert_eq!(round2(3.0), 3.0);
    }

    #[test]
    fn test_vpd_known_values() {
        // ---
        // 22.8°C at 59% RH is roughly 1.1 kPa
        assert!((vpd(22.8, 59.0) - 1.11).abs() < 0.05);

        // Saturated air has no deficit
        assert_eq!(vpd(25.0, 100.0), 0.0);

        // Fully dry air at 20°C is the whole saturation pressure (~2.34 kPa)
        assert_eq!(vpd(20.0, 0.0), 2.34);
    }

    #[test]
    fn test_dew_point_known_values() {
        // ---
        // At 100% RH the dew point is the air temperature
        assert_eq!(dew_point(20.0, 100.0), 20.0);

        // 25°C at 60% RH is about 16.7°C
        let dp = dew_point(25.0, 60.0);
        assert!((dp - 16.69).abs() < 0.05, "dew point was {dp}");
    }

    #[test]
    fn test_dew_point_zero_humidity_is_nan() {
        // ---
        assert!(dew_point(20.0, 0.0).is_nan());
        assert!(dew_point(20.0, -5.0).is_nan());
    }

    #[test]
    fn test_heat_index_clamps_to_ambient() {
        // ---
        // Dry air: the regression dips below ambient, so ambient is reported
        assert_eq!(heat_index(20.0, 0.0), 20.0);
        assert_eq!(heat_index(37.0, 0.0), 37.0);
    }

    #[test]
    fn test_heat_index_hot_and_humid() {
        // ---
        // 32°C at 70% RH feels well above 40°C
        let hi = heat_index(32.0, 70.0);
        assert!(hi > 40.0, "heat index was {hi}");
    }

    proptest! {
        #[test]
        fn prop_heat_index_never_below_ambient(t in -20.0f64..55.0, h in 0.0f64..100.0) {
            prop_assert!(heat_index(t, h) >= round2(t));
        }

        #[test]
        fn prop_metrics_are_two_decimal_and_deterministic(t in -20.0f64..55.0, h in 1.0f64..100.0) {
            for value in [vpd(t, h), dew_point(t, h), heat_index(t, h)] {
                prop_assert!(value.is_finite());
                prop_assert!(has_two_decimals(value));
            }
            prop_assert_eq!(vpd(t, h), vpd(t, h));
            prop_assert_eq!(dew_point(t, h), dew_point(t, h));
            prop_assert_eq!(heat_index(t, h), heat_index(t, h));
        }
    }
}
