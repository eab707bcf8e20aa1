use crate::helpers::round1;
use crate::models::{EnvironmentalReading, FactorKind, NormalizedFactor};

use super::curve::FactorCurve;

/// Map every known measurement of a reading through its curve.
///
/// Unknown measurements are omitted from the output, never emitted as zero.
/// Output order follows `FactorKind::ALL`.
pub fn normalize(reading: &EnvironmentalReading, curves: &[FactorCurve]) -> Vec<NormalizedFactor> {
    tracing::debug!(known = reading.known_count(), "Normalizing reading");
    FactorKind::ALL
        .iter()
        .filter_map(|kind| normalize_measurement(*kind, reading.measurement(*kind), curves))
        .collect()
}

/// Same as [`normalize`], treating an unavailable reading as "no factors".
pub fn normalize_optional(
    reading: Option<&EnvironmentalReading>,
    curves: &[FactorCurve],
) -> Vec<NormalizedFactor> {
    match reading {
        Some(r) => normalize(r, curves),
        None => Vec::new(),
    }
}

/// Normalize a single measurement. Returns `None` (unknown) when the value is
/// absent, NaN, or no valid curve is configured for the factor.
pub fn normalize_measurement(
    kind: FactorKind,
    value: Option<f64>,
    curves: &[FactorCurve],
) -> Option<NormalizedFactor> {
    let value = value?;
    if value.is_nan() {
        tracing::warn!(factor = %kind, "Non-numeric measurement treated as unknown");
        return None;
    }
    let Some(curve) = curves.iter().find(|c| c.kind == kind) else {
        tracing::warn!(factor = %kind, "No curve configured, factor skipped");
        return None;
    };
    if let Err(reason) = curve.check() {
        tracing::warn!(factor = %kind, reason = %reason, "Invalid curve, factor skipped");
        return None;
    }

    let raw_value = clamp_to_curve(curve, value);
    if raw_value != value {
        tracing::debug!(factor = %kind, "Measurement outside calibrated range, clamped");
    }

    Some(NormalizedFactor {
        kind,
        severity: round1(curve.severity(raw_value)),
        raw_value,
    })
}

/// Pull out-of-range measurements back to the nearest anchor.
/// Uses `max`/`min` so an unordered curve can never panic here.
fn clamp_to_curve(curve: &FactorCurve, value: f64) -> f64 {
    match (curve.points.first(), curve.points.last()) {
        (Some(first), Some(last)) => value.max(first.at).min(last.at),
        _ => value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::environment::curve::{default_curves, Breakpoint};
    use crate::models::GeoPoint;
    use chrono::{TimeZone, Utc};

    fn reading() -> EnvironmentalReading {
        EnvironmentalReading::empty(
            GeoPoint::new(55.75, 37.61),
            Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap(),
        )
    }

    #[test]
    fn missing_measurements_are_omitted() {
        let r = EnvironmentalReading {
            pm2_5: Some(60.0),
            ..reading()
        };
        let factors = normalize(&r, &default_curves());
        assert_eq!(factors.len(), 1);
        assert_eq!(factors[0].kind, FactorKind::Pm25);
    }

    #[test]
    fn empty_reading_gives_no_factors() {
        assert!(normalize(&reading(), &default_curves()).is_empty());
    }

    #[test]
    fn unavailable_reading_gives_no_factors() {
        assert!(normalize_optional(None, &default_curves()).is_empty());
    }

    #[test]
    fn zero_measurement_is_kept_as_low_severity() {
        let r = EnvironmentalReading {
            no2: Some(0.0),
            ..reading()
        };
        let factors = normalize(&r, &default_curves());
        assert_eq!(factors.len(), 1);
        assert_eq!(factors[0].severity, 0.0);
    }

    #[test]
    fn pm25_above_unhealthy_is_at_least_seventy() {
        let r = EnvironmentalReading {
            pm2_5: Some(60.0),
            ..reading()
        };
        let factors = normalize(&r, &default_curves());
        assert!(factors[0].severity >= 70.0, "got {}", factors[0].severity);
    }

    #[test]
    fn nan_measurement_is_unknown() {
        let r = EnvironmentalReading {
            heat_index: Some(f64::NAN),
            noise_db: Some(80.0),
            ..reading()
        };
        let factors = normalize(&r, &default_curves());
        assert_eq!(factors.len(), 1);
        assert_eq!(factors[0].kind, FactorKind::Noise);
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let r = EnvironmentalReading {
            pm2_5: Some(-4.0),
            noise_db: Some(f64::INFINITY),
            ..reading()
        };
        let factors = normalize(&r, &default_curves());
        let pm = factors.iter().find(|f| f.kind == FactorKind::Pm25).unwrap();
        let noise = factors.iter().find(|f| f.kind == FactorKind::Noise).unwrap();
        assert_eq!(pm.severity, 0.0);
        assert_eq!(pm.raw_value, 0.0);
        assert_eq!(noise.severity, 100.0);
        assert_eq!(noise.raw_value, 100.0);
    }

    #[test]
    fn factor_without_curve_is_skipped() {
        let curves: Vec<_> = default_curves()
            .into_iter()
            .filter(|c| c.kind != FactorKind::Heat)
            .collect();
        assert!(normalize_measurement(FactorKind::Heat, Some(45.0), &curves).is_none());
    }

    #[test]
    fn unordered_curve_is_skipped_not_panicking() {
        let curves = vec![FactorCurve {
            kind: FactorKind::No2,
            points: vec![
                Breakpoint { at: 10.0, severity: 0.0 },
                Breakpoint { at: 5.0, severity: 50.0 },
            ],
            unhealthy_at: 5.0,
        }];
        assert!(normalize_measurement(FactorKind::No2, Some(7.0), &curves).is_none());
        assert!(normalize_measurement(FactorKind::No2, Some(100.0), &curves).is_none());

        let r = EnvironmentalReading {
            no2: Some(7.0),
            ..reading()
        };
        assert!(normalize(&r, &curves).is_empty());
    }

    #[test]
    fn curve_with_nan_anchor_is_skipped() {
        let mut curves = default_curves();
        curves[0].points[0].at = f64::NAN;
        assert!(normalize_measurement(FactorKind::Pm25, Some(20.0), &curves).is_none());
    }

    #[test]
    fn output_follows_factor_order() {
        let r = EnvironmentalReading {
            green_space_distance: Some(900.0),
            pm2_5: Some(10.0),
            noise_db: Some(50.0),
            ..reading()
        };
        let kinds: Vec<_> = normalize(&r, &default_curves()).iter().map(|f| f.kind).collect();
        assert_eq!(
            kinds,
            vec![FactorKind::Pm25, FactorKind::Noise, FactorKind::GreenSpaceDeficit]
        );
    }
}
