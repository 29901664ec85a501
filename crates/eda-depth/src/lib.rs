#![deny(missing_docs)]
#![doc = "Statistical depth functions over ensembles of fixed-dimension samples."]

/// Monte Carlo and exact band depth.
pub mod band;
/// YAML run configuration.
pub mod config;
/// Ensemble-wide depth pass.
pub mod driver;
/// L2 depth.
pub mod l2;
/// Metric selection and the depth function trait.
pub mod metric;
/// Spatial depth.
pub mod spatial;

pub use band::{band_depth, band_depth_exact, DEFAULT_TRIALS};
pub use config::{DepthConfig, SeedPolicy};
pub use driver::{depths, depths_with, DriverOpts, SelfInclusion};
pub use l2::{l2_depth, DEFAULT_L2_SCALE};
pub use metric::{DepthFunction, Metric};
pub use spatial::{spatial_depth, spatial_depth_in};

use eda_core::{EdaError, Ensemble};

/// Runs the depth pass described by `config`.
pub fn depths_from_config(ensemble: &Ensemble, config: &DepthConfig) -> Result<Vec<f64>, EdaError> {
    config.validate()?;
    depths_with(ensemble, &config.metric, &config.driver_opts())
}
