//! Safe-band confidence scoring
//!
//! Confidence starts at 1.0 and loses a fixed penalty for every input
//! falling outside its documented safe band. Penalties are all-or-nothing
//! per field and accumulate as a running subtraction before the final
//! clamp to [0.3, 1.0].

use crate::inputs::CropInputs;

/// Lower confidence clamp. Even with every band violated the score never
/// drops below this.
pub const CONFIDENCE_FLOOR: f64 = 0.3;

/// Safe band with the penalty applied when a value falls outside it.
#[derive(Debug, Clone, Copy)]
struct SafeBand {
    lo: f64,
    hi: f64,
    penalty: f64,
}

impl SafeBand {
    /// Penalty contribution for a value: the full penalty outside the band,
    /// zero inside (no partial credit).
    fn penalty_for(&self, value: f64) -> f64 {
        if value < self.lo || value > self.hi {
            self.penalty
        } else {
            0.0
        }
    }
}

const TEMPERATURE_BAND: SafeBand = SafeBand { lo: 10.0, hi: 35.0, penalty: 0.20 };
const RAINFALL_BAND: SafeBand = SafeBand { lo: 300.0, hi: 2000.0, penalty: 0.15 };
const HUMIDITY_BAND: SafeBand = SafeBand { lo: 40.0, hi: 90.0, penalty: 0.10 };
const PH_BAND: SafeBand = SafeBand { lo: 5.5, hi: 7.5, penalty: 0.15 };
const NITROGEN_BAND: SafeBand = SafeBand { lo: 50.0, hi: 250.0, penalty: 0.10 };
const PHOSPHORUS_BAND: SafeBand = SafeBand { lo: 20.0, hi: 100.0, penalty: 0.10 };
const POTASSIUM_BAND: SafeBand = SafeBand { lo: 50.0, hi: 250.0, penalty: 0.10 };

/// Calculate the confidence score for a set of inputs, in [0.3, 1.0].
pub fn calculate_confidence(inputs: &CropInputs) -> f64 {
    let mut score = 1.0;

    score -= TEMPERATURE_BAND.penalty_for(inputs.temperature);
    score -= RAINFALL_BAND.penalty_for(inputs.rainfall);
    score -= HUMIDITY_BAND.penalty_for(inputs.humidity);
    score -= PH_BAND.penalty_for(inputs.ph);
    score -= NITROGEN_BAND.penalty_for(inputs.nitrogen);
    score -= PHOSPHORUS_BAND.penalty_for(inputs.phosphorus);
    score -= POTASSIUM_BAND.penalty_for(inputs.potassium);

    score.max(CONFIDENCE_FLOOR).min(1.0)
}
