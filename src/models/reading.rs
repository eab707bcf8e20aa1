use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::enums::FactorKind;
use super::report::GeoPoint;

/// Raw environmental measurements for a location, as resolved by the
/// external weather/air-quality fetchers.
///
/// Every measurement is optional. `None` means unknown and is never read as
/// zero; zero is a valid low-severity measurement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentalReading {
    pub location: GeoPoint,
    pub measured_at: DateTime<Utc>,
    /// Fine particulate matter, µg/m³.
    #[serde(default)]
    pub pm2_5: Option<f64>,
    /// Nitrogen dioxide, µg/m³.
    #[serde(default)]
    pub no2: Option<f64>,
    /// Ambient noise, dB(A).
    #[serde(default)]
    pub noise_db: Option<f64>,
    /// Apparent temperature, °C.
    #[serde(default)]
    pub heat_index: Option<f64>,
    /// Night sky brightness on the Bortle scale (1-9).
    #[serde(default)]
    pub light_pollution: Option<f64>,
    /// Walking distance to the nearest green space, metres.
    #[serde(default)]
    pub green_space_distance: Option<f64>,
}

impl EnvironmentalReading {
    /// A reading with no measurements yet.
    pub fn empty(location: GeoPoint, measured_at: DateTime<Utc>) -> Self {
        Self {
            location,
            measured_at,
            pm2_5: None,
            no2: None,
            noise_db: None,
            heat_index: None,
            light_pollution: None,
            green_space_distance: None,
        }
    }

    pub fn measurement(&self, kind: FactorKind) -> Option<f64> {
        match kind {
            FactorKind::Pm25 => self.pm2_5,
            FactorKind::No2 => self.no2,
            FactorKind::Noise => self.noise_db,
            FactorKind::Heat => self.heat_index,
            FactorKind::LightPollution => self.light_pollution,
            FactorKind::GreenSpaceDeficit => self.green_space_distance,
        }
    }

    /// Number of measurements present.
    pub fn known_count(&self) -> usize {
        FactorKind::ALL
            .iter()
            .filter(|k| self.measurement(**k).is_some())
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn empty() -> EnvironmentalReading {
        EnvironmentalReading::empty(
            GeoPoint::new(48.85, 2.35),
            Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap(),
        )
    }

    #[test]
    fn empty_reading_has_no_measurements() {
        assert_eq!(empty().known_count(), 0);
        for kind in FactorKind::ALL {
            assert_eq!(empty().measurement(kind), None);
        }
    }

    #[test]
    fn zero_is_a_known_measurement() {
        let reading = EnvironmentalReading {
            no2: Some(0.0),
            ..empty()
        };
        assert_eq!(reading.measurement(FactorKind::No2), Some(0.0));
        assert_eq!(reading.known_count(), 1);
    }

    #[test]
    fn absent_fields_deserialize_as_unknown() {
        let json = r#"{
            "location": {"latitude": 48.85, "longitude": 2.35},
            "measured_at": "2026-03-01T12:00:00Z",
            "pm2_5": 60.0
        }"#;
        let reading: EnvironmentalReading = serde_json::from_str(json).unwrap();
        assert_eq!(reading.pm2_5, Some(60.0));
        assert_eq!(reading.noise_db, None);
        assert_eq!(reading.known_count(), 1);
    }
}
