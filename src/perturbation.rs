//! Perturbation models
//!
//! The estimator blends its closed-form baseline with a scalar offset `r`
//! in [0, 1] via `yield = baseline * (1 + (r - 0.5))`. The offset comes
//! from a model behind this narrow trait so the rest of the engine is
//! unaffected by its presence or absence.
//!
//! The default [`NeutralPerturbation`] fixes `r = 0.5`, making the blend a
//! no-op. This replaces an untrained neural network in the system this
//! engine reimplements; freshly initialized on every start, the network
//! contributed arbitrary noise rather than learned signal.

use std::hash::Hasher;

use rand::{Rng, SeedableRng};
use rustc_hash::FxHasher;

/// Scalar offset model for the yield blend.
///
/// Implementations must be deterministic in their inputs so identical
/// prediction requests produce identical results.
pub trait PerturbationModel: Send + Sync {
    /// Produce an offset nominally in [0, 1] from the normalized input
    /// vector. The estimator clamps the returned value before blending.
    fn estimate(&self, normalized: &[f64; 7]) -> f64;
}

/// Fixed neutral offset: `r = 0.5`, so the blend leaves the baseline
/// unchanged. The recommended default.
#[derive(Debug, Clone, Copy, Default)]
pub struct NeutralPerturbation;

impl PerturbationModel for NeutralPerturbation {
    fn estimate(&self, _normalized: &[f64; 7]) -> f64 {
        0.5
    }
}

/// Deterministic pseudo-random offset from a fixed seed.
///
/// The per-call generator is seeded from the configured seed combined with
/// a hash of the input vector, so the same inputs always reproduce the same
/// offset while different inputs decorrelate.
#[derive(Debug, Clone, Copy)]
pub struct SeededPerturbation {
    seed: u64,
}

impl SeededPerturbation {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl PerturbationModel for SeededPerturbation {
    fn estimate(&self, normalized: &[f64; 7]) -> f64 {
        let mut hasher = FxHasher::default();
        for value in normalized {
            hasher.write_u64(value.to_bits());
        }

        let mut rng = rand::rngs::StdRng::seed_from_u64(self.seed ^ hasher.finish());
        rng.gen_range(0.0..=1.0)
    }
}
