//! Breakpoint curves mapping one raw measurement to a 0-100 severity.
//!
//! A curve is a list of anchors `(at, severity)` joined by straight lines.
//! Inputs below the first anchor take its severity, inputs above the last
//! anchor take the last severity. Curves are data, carried by `EngineConfig`.

use serde::{Deserialize, Serialize};

use crate::helpers::clamp_score;
use crate::models::FactorKind;

/// One anchor of a curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Breakpoint {
    pub at: f64,
    pub severity: f64,
}

const fn bp(at: f64, severity: f64) -> Breakpoint {
    Breakpoint { at, severity }
}

/// Monotone piecewise-linear mapping for one factor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactorCurve {
    pub kind: FactorKind,
    pub points: Vec<Breakpoint>,
    /// Measurement from which public guidance calls the exposure unhealthy.
    pub unhealthy_at: f64,
}

impl FactorCurve {
    /// Severity for a finite measurement. Callers filter NaN first.
    pub fn severity(&self, value: f64) -> f64 {
        let (Some(first), Some(last)) = (self.points.first(), self.points.last()) else {
            return 0.0;
        };
        if value <= first.at {
            return clamp_score(first.severity);
        }
        if value >= last.at {
            return clamp_score(last.severity);
        }

        for pair in self.points.windows(2) {
            let (lo, hi) = (pair[0], pair[1]);
            if value <= hi.at {
                let span = hi.at - lo.at;
                let t = (value - lo.at) / span;
                return clamp_score(lo.severity + t * (hi.severity - lo.severity));
            }
        }
        clamp_score(last.severity)
    }

    /// Structural check: at least two anchors, strictly increasing `at`,
    /// severities inside [0, 100] and monotone in one direction.
    pub fn check(&self) -> Result<(), String> {
        if self.points.len() < 2 {
            return Err(format!("curve {} needs at least two anchors", self.kind));
        }
        for p in &self.points {
            if !p.at.is_finite() || !p.severity.is_finite() {
                return Err(format!("curve {} has a non-finite anchor", self.kind));
            }
            if !(0.0..=100.0).contains(&p.severity) {
                return Err(format!(
                    "curve {} severity {} outside [0, 100]",
                    self.kind, p.severity
                ));
            }
        }
        if self.points.windows(2).any(|w| w[1].at <= w[0].at) {
            return Err(format!("curve {} anchors must strictly increase", self.kind));
        }
        let rising = self.points.windows(2).all(|w| w[1].severity >= w[0].severity);
        let falling = self.points.windows(2).all(|w| w[1].severity <= w[0].severity);
        if !rising && !falling {
            return Err(format!("curve {} is not monotone", self.kind));
        }
        if !self.unhealthy_at.is_finite() {
            return Err(format!("curve {} has a non-finite unhealthy threshold", self.kind));
        }
        Ok(())
    }
}

/// Reference calibration.
///
/// pm2_5 bands are delimited at 12/35/55/150 µg/m³ with floors 0/35/60/90;
/// the other factors follow the same shape against WHO/EEA noise guidance,
/// the NOAA heat index ladder, the Bortle scale and WHO's 300 m green-space
/// access guideline.
pub fn default_curves() -> Vec<FactorCurve> {
    vec![
        FactorCurve {
            kind: FactorKind::Pm25,
            points: vec![bp(0.0, 0.0), bp(12.0, 35.0), bp(35.0, 60.0), bp(55.0, 90.0), bp(150.0, 100.0)],
            unhealthy_at: 55.0,
        },
        FactorCurve {
            kind: FactorKind::No2,
            points: vec![bp(0.0, 0.0), bp(40.0, 35.0), bp(100.0, 60.0), bp(200.0, 90.0), bp(400.0, 100.0)],
            unhealthy_at: 200.0,
        },
        FactorCurve {
            kind: FactorKind::Noise,
            points: vec![
                bp(35.0, 0.0),
                bp(55.0, 35.0),
                bp(65.0, 60.0),
                bp(70.0, 75.0),
                bp(85.0, 95.0),
                bp(100.0, 100.0),
            ],
            unhealthy_at: 70.0,
        },
        FactorCurve {
            kind: FactorKind::Heat,
            points: vec![bp(27.0, 0.0), bp(32.0, 35.0), bp(41.0, 70.0), bp(54.0, 90.0), bp(60.0, 100.0)],
            unhealthy_at: 41.0,
        },
        FactorCurve {
            kind: FactorKind::LightPollution,
            points: vec![bp(1.0, 0.0), bp(4.0, 35.0), bp(6.0, 60.0), bp(7.0, 75.0), bp(9.0, 100.0)],
            unhealthy_at: 7.0,
        },
        FactorCurve {
            kind: FactorKind::GreenSpaceDeficit,
            points: vec![
                bp(300.0, 0.0),
                bp(500.0, 35.0),
                bp(1000.0, 60.0),
                bp(2000.0, 90.0),
                bp(5000.0, 100.0),
            ],
            unhealthy_at: 2000.0,
        },
    ]
}
