//! FACTOR: NUTRIENTS (NPK)
//!
//! Yield scales linearly with the combined macro-nutrient load
//! (nitrogen + phosphorus + potassium), capped at 150%. The three
//! nutrients are interchangeable in the multiplier; individual shortfalls
//! only matter for recommendations.

use super::clamp_score;

/// Combined N+P+K (kg/ha) at which the multiplier reaches 1.0.
pub const OPTIMAL_NPK_TOTAL: f64 = 450.0;

/// Multiplier cap for nutrient loads beyond the optimum.
const MULTIPLIER_CAP: f64 = 1.5;

/// Combined N+P+K (kg/ha) at which the display score reaches 1.0.
const SCORE_RANGE: f64 = 600.0;

/// Result of the nutrient factor calculation.
#[derive(Debug, Clone, Copy)]
pub struct NutrientFactor {
    /// Yield multiplier in [0, 1.5]
    pub multiplier: f64,
    /// Display score in [0, 1]
    pub score: f64,
}

/// Calculate the nutrient factor from N, P, K measurements in kg/ha.
pub fn calculate_nutrients(nitrogen: f64, phosphorus: f64, potassium: f64) -> NutrientFactor {
    let total = nitrogen + phosphorus + potassium;

    NutrientFactor {
        multiplier: (total / OPTIMAL_NPK_TOTAL).min(MULTIPLIER_CAP),
        score: clamp_score(total / SCORE_RANGE),
    }
}
