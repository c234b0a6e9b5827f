//! Factor modules for yield estimation
//!
//! Each agronomic dimension is implemented in its own module. A factor
//! contributes two numbers:
//! - a yield `multiplier` applied to the catalog base yield, and
//! - a display `score` in [0, 1] used for factor bars and
//!   recommendation thresholds.
//!
//! The two use different normalizations on purpose: multipliers are floored
//! or capped so the estimate never collapses or explodes, while scores span
//! the full [0, 1] range for display.

pub mod nutrients;
pub mod rainfall;
pub mod soil;
pub mod temperature;

// Re-export factor functions
pub use nutrients::{calculate_nutrients, NutrientFactor};
pub use rainfall::{calculate_rainfall, RainfallFactor};
pub use soil::{calculate_soil, SoilFactor};
pub use temperature::{calculate_temperature, TemperatureFactor};

/// Clamp a display score to [0, 1].
///
/// Written as a max/min chain so a NaN intermediate (possible only for
/// non-finite caller input) still resolves to a finite score.
pub(crate) fn clamp_score(value: f64) -> f64 {
    value.max(0.0).min(1.0)
}
