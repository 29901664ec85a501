#![deny(missing_docs)]
#![doc = "Hurst exponent estimators for long-range dependence in measurement series."]

/// Aggregated block-variance estimator.
pub mod block;
/// Scale grids, estimates and log-log regression.
pub mod fit;
/// Triangle-area estimator.
pub mod triangle;

pub use block::block_variance_hurst;
pub use fit::{HurstEstimate, HurstMethod, HurstOpts};
pub use triangle::triangle_area_hurst;
