#![deny(missing_docs)]
#![doc = "Core data model, structured errors and deterministic seeding shared by the ensemble analysis crates."]

pub mod ensemble;
pub mod errors;
pub mod provenance;
pub mod rng;

pub use ensemble::{Ensemble, EnsembleView};
pub use errors::{EdaError, ErrorInfo};
pub use provenance::RunProvenance;
pub use rng::{sample_seed, RngHandle, DEFAULT_MASTER_SEED};

/// Distance below which two vectors are treated as coincident.
pub const DEFAULT_EPSILON: f64 = 1e-12;

/// Euclidean separation of two samples, kept factored as
/// `distance = 2 * scale * norm` so neither factor overflows.
///
/// `scale` is the largest half-difference `|a_j / 2 - b_j / 2|` and `norm`
/// lies in `[1, sqrt(p)]` (or is `0` when the samples coincide). Halving
/// before subtracting keeps every difference finite for finite inputs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Separation {
    /// Largest coordinate half-difference.
    pub scale: f64,
    /// Norm of the half-differences divided by `scale`.
    pub norm: f64,
}

impl Separation {
    /// Measures the separation from `b` to `a`.
    pub fn between(a: &[f64], b: &[f64]) -> Self {
        let scale = a
            .iter()
            .zip(b)
            .map(|(x, y)| (x * 0.5 - y * 0.5).abs())
            .fold(0.0, f64::max);
        if scale == 0.0 {
            return Self { scale, norm: 0.0 };
        }
        let norm = a
            .iter()
            .zip(b)
            .map(|(x, y)| {
                let r = (x * 0.5 - y * 0.5) / scale;
                r * r
            })
            .sum::<f64>()
            .sqrt();
        Self { scale, norm }
    }

    /// The Euclidean distance; `inf` only when it exceeds `f64::MAX`.
    pub fn distance(&self) -> f64 {
        self.scale * (2.0 * self.norm)
    }

    /// Component `j` of the unit vector from `b` to `a`, given `a_j` and `b_j`.
    pub fn unit_component(&self, a_j: f64, b_j: f64) -> f64 {
        ((a_j * 0.5 - b_j * 0.5) / self.scale) / self.norm
    }
}

/// Euclidean distance between two equally sized slices.
pub fn euclidean(a: &[f64], b: &[f64]) -> f64 {
    Separation::between(a, b).distance()
}
