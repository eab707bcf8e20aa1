use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unrecognised wire value for one of the symbolic enums below.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid {field} value: {value}")]
pub struct ParseEnumError {
    pub field: String,
    pub value: String,
}

/// Macro to generate enum with as_str + std::str::FromStr pattern.
/// The `as_str` form is also the serde wire form.
macro_rules! str_enum {
    ($name:ident { $($variant:ident => $s:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(#[serde(rename = $s)] $variant),+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $s),+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = ParseEnumError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($s => Ok(Self::$variant)),+,
                    _ => Err(ParseEnumError {
                        field: stringify!($name).into(),
                        value: s.into(),
                    }),
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

str_enum!(SignalKind {
    StressMarker => "stress_marker",
    SleepDisturbance => "sleep_disturbance",
    RespiratoryStress => "respiratory_stress",
    HeavyMetalToxicity => "heavy_metal_toxicity",
    CognitiveFragmentation => "cognitive_fragmentation",
});

str_enum!(FactorKind {
    Pm25 => "pm2_5",
    No2 => "no2",
    Noise => "noise_db",
    Heat => "heat_index",
    LightPollution => "light_pollution",
    GreenSpaceDeficit => "green_space_distance",
});

str_enum!(RiskCategory {
    ChronicStress => "chronic_stress",
    Respiratory => "respiratory",
    SleepDisorder => "sleep_disorder",
});

str_enum!(Priority {
    High => "high",
    Medium => "medium",
    Low => "low",
});

str_enum!(RiskLevel {
    Low => "low",
    Moderate => "moderate",
    High => "high",
});

str_enum!(AssessmentStatus {
    Stable => "stable",
    Elevated => "elevated",
    Critical => "critical",
    InsufficientData => "insufficient_data",
});

str_enum!(EnvironmentalConfidence {
    Full => "full",
    Partial => "partial",
    Insufficient => "insufficient",
});

impl SignalKind {
    pub const ALL: [SignalKind; 5] = [
        SignalKind::StressMarker,
        SignalKind::SleepDisturbance,
        SignalKind::RespiratoryStress,
        SignalKind::HeavyMetalToxicity,
        SignalKind::CognitiveFragmentation,
    ];

    /// The category whose score frames this signal's recommendation priority.
    pub fn category(&self) -> RiskCategory {
        match self {
            Self::StressMarker | Self::CognitiveFragmentation => RiskCategory::ChronicStress,
            Self::RespiratoryStress | Self::HeavyMetalToxicity => RiskCategory::Respiratory,
            Self::SleepDisturbance => RiskCategory::SleepDisorder,
        }
    }
}

impl FactorKind {
    pub const ALL: [FactorKind; 6] = [
        FactorKind::Pm25,
        FactorKind::No2,
        FactorKind::Noise,
        FactorKind::Heat,
        FactorKind::LightPollution,
        FactorKind::GreenSpaceDeficit,
    ];
}

impl RiskCategory {
    pub const ALL: [RiskCategory; 3] = [
        RiskCategory::ChronicStress,
        RiskCategory::Respiratory,
        RiskCategory::SleepDisorder,
    ];
}

impl Priority {
    /// Sort rank: high first.
    pub fn rank(&self) -> u8 {
        match self {
            Self::High => 0,
            Self::Medium => 1,
            Self::Low => 2,
        }
    }
}

impl From<RiskLevel> for Priority {
    fn from(level: RiskLevel) -> Self {
        match level {
            RiskLevel::High => Priority::High,
            RiskLevel::Moderate => Priority::Medium,
            RiskLevel::Low => Priority::Low,
        }
    }
}
