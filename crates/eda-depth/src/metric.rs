use eda_core::{EdaError, EnsembleView, RngHandle, DEFAULT_EPSILON};
use serde::{Deserialize, Serialize};

use crate::band::{band_depth_exact_in, band_depth_in, DEFAULT_TRIALS};
use crate::l2::{l2_depth_in, DEFAULT_L2_SCALE};
use crate::spatial::spatial_depth_in;

/// A depth notion that scores one sample against a view of an ensemble.
pub trait DepthFunction: Send + Sync {
    /// Stable metric name recorded in provenance.
    fn name(&self) -> &'static str;

    /// Minimum number of members the view must expose.
    fn min_members(&self) -> usize {
        1
    }

    /// Rejects parameters that cannot produce a depth, before any sample is scored.
    fn validate(&self) -> Result<(), EdaError> {
        Ok(())
    }

    /// Depth of `v` relative to `view`. Deterministic metrics ignore `rng`.
    fn depth(
        &self,
        v: &[f64],
        view: &EnsembleView<'_>,
        rng: &mut RngHandle,
    ) -> Result<f64, EdaError>;
}

/// Built-in depth metrics and their parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Metric {
    /// Spatial depth, `1 - ||mean unit vector||`.
    Spatial {
        /// Distance under which a member counts as coincident with the query.
        #[serde(default = "default_epsilon")]
        epsilon: f64,
    },
    /// L2 depth, `scale / (1 + mean distance)`.
    L2 {
        /// Positive scale constant.
        #[serde(default = "default_scale")]
        scale: f64,
    },
    /// Monte Carlo band depth over random triples.
    Band {
        /// Number of triples drawn per sample.
        #[serde(default = "default_trials")]
        trials: usize,
    },
    /// Band depth enumerated over every triple.
    BandExact,
}

fn default_epsilon() -> f64 {
    DEFAULT_EPSILON
}

fn default_scale() -> f64 {
    DEFAULT_L2_SCALE
}

fn default_trials() -> usize {
    DEFAULT_TRIALS
}

impl Metric {
    /// Spatial depth with the default coincidence threshold.
    pub fn spatial() -> Self {
        Metric::Spatial {
            epsilon: DEFAULT_EPSILON,
        }
    }

    /// L2 depth with the default scale.
    pub fn l2() -> Self {
        Metric::L2 {
            scale: DEFAULT_L2_SCALE,
        }
    }

    /// Monte Carlo band depth with `trials` triples.
    pub fn band(trials: usize) -> Self {
        Metric::Band { trials }
    }

    /// Checks parameters without touching any data.
    pub fn validate(&self) -> Result<(), EdaError> {
        match *self {
            Metric::Spatial { epsilon } if !(epsilon.is_finite() && epsilon > 0.0) => Err(
                EdaError::invalid("epsilon_invalid", format!("epsilon must be positive, got {epsilon}")),
            ),
            Metric::L2 { scale } if !(scale.is_finite() && scale > 0.0) => Err(EdaError::invalid(
                "l2_scale_invalid",
                format!("scale must be positive and finite, got {scale}"),
            )),
            Metric::Band { trials: 0 } => Err(EdaError::invalid(
                "trials_zero",
                "band depth needs at least one trial",
            )),
            _ => Ok(()),
        }
    }
}

impl Default for Metric {
    fn default() -> Self {
        Metric::spatial()
    }
}

impl DepthFunction for Metric {
    fn name(&self) -> &'static str {
        match self {
            Metric::Spatial { .. } => "spatial",
            Metric::L2 { .. } => "l2",
            Metric::Band { .. } => "band",
            Metric::BandExact => "band-exact",
        }
    }

    fn min_members(&self) -> usize {
        match self {
            Metric::Band { .. } | Metric::BandExact => 3,
            _ => 1,
        }
    }

    fn validate(&self) -> Result<(), EdaError> {
        Metric::validate(self)
    }

    fn depth(
        &self,
        v: &[f64],
        view: &EnsembleView<'_>,
        rng: &mut RngHandle,
    ) -> Result<f64, EdaError> {
        match *self {
            Metric::Spatial { epsilon } => spatial_depth_in(v, view, epsilon),
            Metric::L2 { scale } => l2_depth_in(v, view, scale),
            Metric::Band { trials } => band_depth_in(v, view, trials, rng),
            Metric::BandExact => band_depth_exact_in(v, view),
        }
    }
}
