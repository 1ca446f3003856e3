//! Built-in plant profiles and their safe environmental ranges.

use serde::Serialize;

// ---

/// Safe ranges for one plant. Bounds are inclusive: a value equal to a bound
/// is considered safe.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlantProfile {
    // ---
    pub id: &'static str,
    pub name: &'static str,
    pub min_temp: f64,
    pub max_temp: f64,
    pub min_humidity: f64,
    pub max_humidity: f64,
    pub min_soil: f64,
    pub max_soil: f64,
}

/// Entry of the plant selector listing served by `/api/plants`.
#[derive(Debug, Clone, Serialize)]
pub struct PlantSummary {
    pub id: &'static str,
    pub name: &'static str,
}

pub const PLANTS: [PlantProfile; 4] = [
    PlantProfile {
        id: "plant1",
        name: "Plant 1",
        min_temp: 15.0,
        max_temp: 37.0,
        min_humidity: 40.0,
        max_humidity: 90.0,
        min_soil: 20.0,
        max_soil: 90.0,
    },
    PlantProfile {
        id: "plant2",
        name: "Plant 2",
        min_temp: 18.0,
        max_temp: 40.0,
        min_humidity: 35.0,
        max_humidity: 85.0,
        min_soil: 25.0,
        max_soil: 85.0,
    },
    PlantProfile {
        id: "plant3",
        name: "Plant 3",
        min_temp: 20.0,
        max_temp: 45.0,
        min_humidity: 30.0,
        max_humidity: 80.0,
        min_soil: 30.0,
        max_soil: 80.0,
    },
    PlantProfile {
        id: "plant4",
        name: "Plant 4",
        min_temp: 12.0,
        max_temp: 35.0,
        min_humidity: 45.0,
        max_humidity: 95.0,
        min_soil: 15.0,
        max_soil: 95.0,
    },
];

/// Look up the thresholds for `plant_id`.
///
/// Unknown identifiers fall back to the first profile, so this never fails.
pub fn thresholds(plant_id: &str) -> &'static PlantProfile {
    // ---
    PLANTS
        .iter()
        .find(|p| p.id == plant_id)
        .unwrap_or(&PLANTS[0])
}

/// Identifiers and display names of all built-in profiles, in selector order.
pub fn list() -> Vec<PlantSummary> {
    PLANTS
        .iter()
        .map(|p| PlantSummary {
            id: p.id,
            name: p.name,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    // ---
    use super::*;

    #[test]
    fn test_known_profiles() {
        // ---
        let p2 = thresholds("plant2");
        assert_eq!((p2.min_temp, p2.max_temp), (18.0, 40.0));
        assert_eq!((p2.min_humidity, p2.max_humidity), (35.0, 85.0));
        assert_eq!((p2.min_soil, p2.max_soil), (25.0, 85.0));

        let p4 = thresholds("plant4");
        assert_eq!((p4.min_temp, p4.max_temp), (12.0, 35.0));
        assert_eq!((p4.min_soil, p4.max_soil), (15.0, 95.0));
    }

    #[test]
    fn test_profiles_are_distinct() {
        // ---
        for (i, a) in PLANTS.iter().enumerate() {
            for b in PLANTS.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_unknown_falls_back_to_plant1() {
        // ---
        let default = thresholds("plant1");
        for id in ["", "plant5", "PLANT1", "cactus", " plant2"] {
            let p = thresholds(id);
            assert_eq!(p, default, "unexpected profile for {id:?}");
        }
    }

    #[test]
    fn test_list_matches_profiles() {
        // ---
        let listed = list();
        assert_eq!(listed.len(), 4);
        assert_eq!(listed[0].id, "plant1");
        assert_eq!(listed[3].name, "Plant 4");
    }
}
