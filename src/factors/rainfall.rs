//! FACTOR: RAINFALL
//!
//! Yield scales linearly with annual rainfall up to the assumed 800mm
//! optimum, capped at 150% for excess rainfall. No penalty is modeled for
//! too much rain; this is a known simplification of the formula.

use super::clamp_score;

/// Annual rainfall (mm) at which the multiplier reaches 1.0.
pub const OPTIMAL_RAINFALL_MM: f64 = 800.0;

/// Multiplier cap for rainfall beyond the optimum.
const MULTIPLIER_CAP: f64 = 1.5;

/// Annual rainfall (mm) at which the display score reaches 1.0.
const SCORE_RANGE_MM: f64 = 1000.0;

/// Result of the rainfall factor calculation.
#[derive(Debug, Clone, Copy)]
pub struct RainfallFactor {
    /// Yield multiplier in [0, 1.5]
    pub multiplier: f64,
    /// Display score in [0, 1]
    pub score: f64,
}

/// Calculate the rainfall factor for an annual measurement in mm.
pub fn calculate_rainfall(rainfall_mm: f64) -> RainfallFactor {
    RainfallFactor {
        multiplier: (rainfall_mm / OPTIMAL_RAINFALL_MM).min(MULTIPLIER_CAP),
        score: clamp_score(rainfall_mm / SCORE_RANGE_MM),
    }
}
