//! Small numeric helpers shared by the normalizer and the scorer.

/// Upper bound of every score and severity.
pub const SCORE_MAX: f64 = 100.0;

/// Saturate into [0, 100]. Non-finite input saturates too: NaN maps to 0.
/// Zero always comes back as positive zero, never `-0.0`.
pub fn clamp_score(value: f64) -> f64 {
    if value.is_nan() || value <= 0.0 {
        return 0.0;
    }
    value.min(SCORE_MAX)
}

/// Round to one decimal place.
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
