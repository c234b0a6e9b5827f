//! Recommendation rule evaluation
//!
//! Rules fire in a fixed order (temperature, rainfall, soil pH, nutrients)
//! when the matching factor score falls below the 0.6 threshold. The
//! nutrient rule can emit up to three independent messages, one per
//! macro-nutrient shortfall. If nothing fires, a single "conditions are
//! optimal" message is returned; the list is never empty.

use crate::inputs::CropInputs;
use crate::result::FactorScores;

/// Factor score below which a rule fires.
pub const ADVICE_THRESHOLD: f64 = 0.6;

/// Temperature below which the cold-side advice is chosen (°C).
const COOL_TEMPERATURE_C: f64 = 20.0;

/// Acidic cutoff for the lime recommendation.
const ACIDIC_PH: f64 = 6.0;

/// Alkaline cutoff for the sulfur recommendation.
const ALKALINE_PH: f64 = 7.5;

/// Per-nutrient shortfall cutoffs (kg/ha).
const LOW_NITROGEN: f64 = 80.0;
const LOW_PHOSPHORUS: f64 = 30.0;
const LOW_POTASSIUM: f64 = 80.0;

/// Fallback message when no rule fires.
pub const OPTIMAL_MESSAGE: &str =
    "Conditions are optimal! Maintain current practices and monitor regularly";

/// Generate the ordered recommendation list for a prediction.
pub fn generate_recommendations(inputs: &CropInputs, factors: &FactorScores) -> Vec<String> {
    let mut recommendations = Vec::new();

    if factors.temperature < ADVICE_THRESHOLD {
        if inputs.temperature < COOL_TEMPERATURE_C {
            recommendations.push(
                "Consider using greenhouse or mulching to increase soil temperature".to_string(),
            );
        } else {
            recommendations.push(
                "Provide shade or irrigation during hot periods to reduce heat stress".to_string(),
            );
        }
    }

    if factors.rainfall < ADVICE_THRESHOLD {
        recommendations.push(
            "Implement drip irrigation or rainwater harvesting to supplement rainfall".to_string(),
        );
    }

    if factors.soil_quality < ADVICE_THRESHOLD {
        // A soil score below threshold guarantees pH is outside 6.0..7.5
        // (see the gap test in factors::soil), so one branch always fires.
        if inputs.ph < ACIDIC_PH {
            recommendations
                .push("Add lime to increase soil pH to optimal range (6.0-7.0)".to_string());
        } else if inputs.ph > ALKALINE_PH {
            recommendations.push("Add sulfur or organic matter to lower soil pH".to_string());
        }
    }

    if factors.nutrients < ADVICE_THRESHOLD {
        if inputs.nitrogen < LOW_NITROGEN {
            recommendations.push(
                "Apply nitrogen-rich fertilizers or plant nitrogen-fixing cover crops".to_string(),
            );
        }
        if inputs.phosphorus < LOW_PHOSPHORUS {
            recommendations
                .push("Add phosphorus fertilizers to improve root development".to_string());
        }
        if inputs.potassium < LOW_POTASSIUM {
            recommendations
                .push("Apply potassium fertilizers to enhance disease resistance".to_string());
        }
    }

    if recommendations.is_empty() {
        recommendations.push(OPTIMAL_MESSAGE.to_string());
    }

    recommendations
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scores(temperature: f64, rainfall: f64, soil_quality: f64, nutrients: f64) -> FactorScores {
        FactorScores { temperature, rainfall, soil_quality, nutrients }
    }

    #[test]
    fn all_factors_good_yields_optimal_message_only() {
        let recs = generate_recommendations(&CropInputs::default(), &scores(0.9, 0.8, 1.0, 0.7));
        assert_eq!(recs, vec![OPTIMAL_MESSAGE.to_string()]);
    }

    #[test]
    fn cold_temperature_suggests_greenhouse() {
        let inputs = CropInputs { temperature: 5.0, ..CropInputs::default() };
        let recs = generate_recommendations(&inputs, &scores(0.2, 0.8, 1.0, 0.7));
        assert_eq!(recs.len(), 1);
        assert!(recs[0].contains("greenhouse or mulching"));
    }

    #[test]
    fn hot_temperature_suggests_shade() {
        let inputs = CropInputs { temperature: 40.0, ..CropInputs::default() };
        let recs = generate_recommendations(&inputs, &scores(0.4, 0.8, 1.0, 0.7));
        assert_eq!(recs.len(), 1);
        assert!(recs[0].contains("shade or irrigation"));
    }

    #[test]
    fn rules_fire_in_fixed_order() {
        let inputs = CropInputs {
            temperature: 5.0,
            rainfall: 200.0,
            ph: 4.5,
            nitrogen: 20.0,
            phosphorus: 10.0,
            potassium: 20.0,
            ..CropInputs::default()
        };
        let recs = generate_recommendations(&inputs, &scores(0.2, 0.2, 0.3, 0.1));
        assert_eq!(recs.len(), 6);
        assert!(recs[0].contains("greenhouse"));
        assert!(recs[1].contains("drip irrigation"));
        assert!(recs[2].contains("lime"));
        assert!(recs[3].contains("nitrogen"));
        assert!(recs[4].contains("phosphorus"));
        assert!(recs[5].contains("potassium"));
    }

    #[test]
    fn alkaline_soil_suggests_sulfur() {
        let inputs = CropInputs { ph: 8.5, ..CropInputs::default() };
        let recs = generate_recommendations(&inputs, &scores(1.0, 0.8, 0.3, 0.7));
        assert_eq!(recs.len(), 1);
        assert!(recs[0].contains("sulfur or organic matter"));
    }

    #[test]
    fn nutrient_sub_rules_fire_independently() {
        // Only phosphorus is short
        let inputs = CropInputs {
            nitrogen: 100.0,
            phosphorus: 10.0,
            potassium: 100.0,
            ..CropInputs::default()
        };
        let recs = generate_recommendations(&inputs, &scores(1.0, 0.8, 1.0, 0.35));
        assert_eq!(recs.len(), 1);
        assert!(recs[0].contains("phosphorus"));
    }

    #[test]
    fn low_nutrient_score_without_shortfall_falls_back_to_optimal() {
        // Default inputs: nutrient score 0.48 but N/P/K all above their
        // individual cutoffs, so no nutrient message fires
        let recs = generate_recommendations(&CropInputs::default(), &scores(1.0, 0.8, 1.0, 0.48));
        assert_eq!(recs, vec![OPTIMAL_MESSAGE.to_string()]);
    }

    #[test]
    fn list_is_never_empty() {
        let recs = generate_recommendations(&CropInputs::default(), &scores(1.0, 1.0, 1.0, 1.0));
        assert!(!recs.is_empty());
    }
}
