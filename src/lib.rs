//! Crop Yield Estimation Engine
//!
//! Closed-form yield estimation from seven environmental and soil
//! measurements, producing a yield estimate (tons/ha), a confidence score,
//! a per-factor breakdown, and improvement recommendations.
//!
//! Modular structure:
//! - `catalog`: Static crop lookup (base yields and display metadata)
//! - `factors/`: Individual factor implementations (temperature, rainfall, soil, nutrients)
//! - `confidence`: Safe-band confidence scoring
//! - `recommend`: Recommendation rule evaluation
//! - `perturbation`: Optional perturbation model behind a narrow trait
//! - `estimator`: Main coordinator

pub mod catalog;
pub mod confidence;
pub mod estimator;
pub mod factors;
pub mod inputs;
pub mod perturbation;
pub mod recommend;
pub mod result;

// Re-export commonly used types
pub use catalog::{CatalogError, Crop, CropCatalog, CropCategory, DEFAULT_BASE_YIELD};
pub use estimator::YieldEstimator;
pub use inputs::CropInputs;
pub use perturbation::{NeutralPerturbation, PerturbationModel, SeededPerturbation};
pub use result::{ConfidenceLevel, FactorScores, PredictionResult};
