//! Crop input measurements
//!
//! The seven environmental and soil measurements the estimator consumes.
//! The engine performs no range validation: out-of-range values degrade
//! the confidence score and factor scores instead of being rejected.

use serde::{Deserialize, Serialize};

/// Environmental and soil measurements for a single prediction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CropInputs {
    /// Air temperature (°C)
    pub temperature: f64,
    /// Annual rainfall (mm)
    pub rainfall: f64,
    /// Relative humidity (%)
    pub humidity: f64,
    /// Soil pH
    pub ph: f64,
    /// Nitrogen (kg/ha)
    pub nitrogen: f64,
    /// Phosphorus (kg/ha)
    pub phosphorus: f64,
    /// Potassium (kg/ha)
    pub potassium: f64,
}

impl Default for CropInputs {
    /// Seed values used by input forms before the user edits anything.
    fn default() -> Self {
        Self {
            temperature: 25.0,
            rainfall: 800.0,
            humidity: 65.0,
            ph: 6.5,
            nitrogen: 120.0,
            phosphorus: 50.0,
            potassium: 120.0,
        }
    }
}

impl CropInputs {
    /// Combined macro-nutrient load (N + P + K) in kg/ha.
    pub fn npk_total(&self) -> f64 {
        self.nitrogen + self.phosphorus + self.potassium
    }

    /// Scale each field to a nominal 0-1 range.
    ///
    /// This is the input vector handed to a [`crate::PerturbationModel`].
    /// Divisors are the assumed field maxima (40°C, 3000mm, 100%, pH 14,
    /// 300/150/300 kg/ha); values past a maximum simply exceed 1.0.
    pub fn normalized(&self) -> [f64; 7] {
        [
            self.temperature / 40.0,
            self.rainfall / 3000.0,
            self.humidity / 100.0,
            self.ph / 14.0,
            self.nitrogen / 300.0,
            self.phosphorus / 150.0,
            self.potassium / 300.0,
        ]
    }
}
