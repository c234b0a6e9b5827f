//! Yield Estimator - Main coordinator for crop yield prediction
//!
//! Combines the catalog base yield with the four factor multipliers, blends
//! in the perturbation offset, and assembles the result bundle (yield,
//! confidence, factor scores, recommendations).
//!
//! `predict` is total over finite numeric inputs: every stage clamps, so
//! negative, zero, or extreme values degrade the result instead of failing.

use crate::catalog::CropCatalog;
use crate::confidence::calculate_confidence;
use crate::factors::{calculate_nutrients, calculate_rainfall, calculate_soil, calculate_temperature};
use crate::inputs::CropInputs;
use crate::perturbation::{NeutralPerturbation, PerturbationModel};
use crate::recommend::generate_recommendations;
use crate::result::{FactorScores, PredictionResult};

/// Main yield estimator.
///
/// Explicitly constructed and explicitly owned; holds no state between
/// calls. `predict` takes `&self` and is safe to call concurrently.
pub struct YieldEstimator {
    catalog: CropCatalog,
    perturbation: Box<dyn PerturbationModel>,
}

impl Default for YieldEstimator {
    fn default() -> Self {
        Self::new(CropCatalog::default())
    }
}

impl YieldEstimator {
    /// Create an estimator with the neutral (no-op) perturbation model.
    pub fn new(catalog: CropCatalog) -> Self {
        Self::with_perturbation(catalog, Box::new(NeutralPerturbation))
    }

    /// Create an estimator with an explicit perturbation model.
    pub fn with_perturbation(catalog: CropCatalog, perturbation: Box<dyn PerturbationModel>) -> Self {
        Self { catalog, perturbation }
    }

    pub fn catalog(&self) -> &CropCatalog {
        &self.catalog
    }

    /// Predict yield for a crop under the given measurements.
    ///
    /// Always succeeds for numeric inputs; unknown crop identifiers use the
    /// default base yield.
    pub fn predict(&self, crop_id: &str, inputs: &CropInputs) -> PredictionResult {
        let base_yield = self.catalog.base_yield(crop_id);

        let temperature = calculate_temperature(inputs.temperature);
        let rainfall = calculate_rainfall(inputs.rainfall);
        let soil = calculate_soil(inputs.ph);
        let nutrients = calculate_nutrients(inputs.nitrogen, inputs.phosphorus, inputs.potassium);

        let multiplier =
            temperature.multiplier * rainfall.multiplier * soil.multiplier * nutrients.multiplier;
        let baseline = base_yield * multiplier;

        // Offset is clamped before blending; a misbehaving model can shift
        // the estimate by at most ±50%
        let offset = self
            .perturbation
            .estimate(&inputs.normalized())
            .max(0.0)
            .min(1.0);
        let final_yield = (baseline * (1.0 + (offset - 0.5))).max(0.0);

        let confidence = calculate_confidence(inputs);

        let factors = FactorScores {
            temperature: temperature.score,
            rainfall: rainfall.score,
            soil_quality: soil.score,
            nutrients: nutrients.score,
        };

        let recommendations = generate_recommendations(inputs, &factors);

        tracing::debug!(
            crop_id,
            base_yield,
            multiplier,
            yield_t_ha = final_yield,
            confidence,
            "prediction complete"
        );

        PredictionResult {
            yield_per_hectare: round2(final_yield),
            confidence: round2(confidence),
            factors,
            recommendations,
        }
    }
}

/// Round to 2 decimal places.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
