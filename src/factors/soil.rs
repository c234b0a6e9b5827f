//! FACTOR: SOIL pH
//!
//! Yield decays linearly as soil pH moves away from the assumed 6.5
//! optimum, floored at 50% of nominal. The display score uses a steeper
//! slope so pH problems become visible before the multiplier floors.

use super::clamp_score;

/// Assumed soil pH optimum shared by all catalog crops.
pub const OPTIMAL_PH: f64 = 6.5;

/// pH deviation at which the unfloored multiplier would reach zero.
const MULTIPLIER_DECAY_RANGE: f64 = 5.0;

/// Multiplier floor for extreme pH.
const MULTIPLIER_FLOOR: f64 = 0.5;

/// pH deviation at which the display score reaches zero.
const SCORE_DECAY_RANGE: f64 = 3.0;

/// Result of the soil pH factor calculation.
#[derive(Debug, Clone, Copy)]
pub struct SoilFactor {
    /// Yield multiplier in [0.5, 1.0]
    pub multiplier: f64,
    /// Display score in [0, 1]
    pub score: f64,
}

/// Calculate the soil quality factor for a pH measurement.
pub fn calculate_soil(ph: f64) -> SoilFactor {
    let deviation = (ph - OPTIMAL_PH).abs();

    SoilFactor {
        multiplier: (1.0 - deviation / MULTIPLIER_DECAY_RANGE).max(MULTIPLIER_FLOOR),
        score: clamp_score(1.0 - deviation / SCORE_DECAY_RANGE),
    }
}
