//! FACTOR: TEMPERATURE
//!
//! Yield decays linearly as temperature moves away from the assumed 25°C
//! optimum. The multiplier is floored at 30% of nominal so extreme
//! temperatures never collapse the estimate to zero.

use super::clamp_score;

/// Assumed temperature optimum (°C) shared by all catalog crops.
pub const OPTIMAL_TEMPERATURE_C: f64 = 25.0;

/// Degrees of deviation at which the unfloored multiplier would reach zero.
const MULTIPLIER_DECAY_RANGE_C: f64 = 30.0;

/// Multiplier floor: extreme heat or cold still leaves 30% of nominal yield.
const MULTIPLIER_FLOOR: f64 = 0.3;

/// Degrees of deviation at which the display score reaches zero.
const SCORE_DECAY_RANGE_C: f64 = 25.0;

/// Result of the temperature factor calculation.
#[derive(Debug, Clone, Copy)]
pub struct TemperatureFactor {
    /// Yield multiplier in [0.3, 1.0]
    pub multiplier: f64,
    /// Display score in [0, 1]
    pub score: f64,
}

/// Calculate the temperature factor for a measurement in °C.
pub fn calculate_temperature(temperature_c: f64) -> TemperatureFactor {
    let deviation = (temperature_c - OPTIMAL_TEMPERATURE_C).abs();

    TemperatureFactor {
        multiplier: (1.0 - deviation / MULTIPLIER_DECAY_RANGE_C).max(MULTIPLIER_FLOOR),
        score: clamp_score(1.0 - deviation / SCORE_DECAY_RANGE_C),
    }
}
