#![deny(missing_docs)]
#![doc = "Stratification, summaries and serialisable reports built on ensemble depth vectors."]

/// Ensemble content hashing.
pub mod hash;
/// Report assembly and encoding.
pub mod report;
/// Quantile stratification of depth vectors.
pub mod stratify;
/// Statistical summaries of depth vectors.
pub mod summary;

pub use hash::ensemble_hash;
pub use report::{DepthReport, DEFAULT_HISTOGRAM_BINS, REPORT_SCHEMA};
pub use stratify::{
    most_central, most_outlying, rank_order, representatives, stratify, stratify_summary, Stratum,
};
pub use summary::{depth_quantile, rank_agreement, Correlations, DepthSummary, Histogram, Quantiles};
