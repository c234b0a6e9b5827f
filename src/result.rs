//! Prediction output types
//!
//! Immutable value types returned by the estimator. Constructed once per
//! prediction and owned by the caller.

use serde::{Deserialize, Serialize};

/// Normalized [0, 1] favorability scores for the four display factors.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FactorScores {
    pub temperature: f64,
    pub rainfall: f64,
    pub soil_quality: f64,
    pub nutrients: f64,
}

/// Complete result bundle for one prediction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    /// Estimated yield (tons/ha), non-negative, rounded to 2 decimals.
    pub yield_per_hectare: f64,
    /// Confidence in [0.3, 1.0], rounded to 2 decimals.
    pub confidence: f64,
    /// Per-factor favorability breakdown.
    pub factors: FactorScores,
    /// Improvement advice in rule-firing order; never empty.
    pub recommendations: Vec<String>,
}

impl PredictionResult {
    /// Bucketed confidence label for display.
    pub fn confidence_level(&self) -> ConfidenceLevel {
        ConfidenceLevel::from_score(self.confidence)
    }
}

/// Display bucket for the confidence score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfidenceLevel {
    /// Confidence >= 0.8
    High,
    /// Confidence >= 0.6
    Medium,
    /// Confidence < 0.6
    Low,
}

impl ConfidenceLevel {
    pub fn from_score(confidence: f64) -> Self {
        if confidence >= 0.8 {
            ConfidenceLevel::High
        } else if confidence >= 0.6 {
            ConfidenceLevel::Medium
        } else {
            ConfidenceLevel::Low
        }
    }

    pub fn display_text(&self) -> &'static str {
        match self {
            ConfidenceLevel::High => "High",
            ConfidenceLevel::Medium => "Medium",
            ConfidenceLevel::Low => "Low",
        }
    }
}
