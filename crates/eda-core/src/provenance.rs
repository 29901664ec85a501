//! Provenance attached to serialized depth reports.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Provenance information tying a depth vector to the call that produced it.
///
/// Depth values are only comparable within one call; the provenance records
/// what that call was so downstream consumers never mix vectors by accident.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct RunProvenance {
    /// Name of the depth metric used.
    pub metric: String,
    /// Master seed used for randomized metrics.
    pub seed: u64,
    /// Number of samples in the ensemble.
    pub samples: usize,
    /// Dimension of each sample.
    pub dimension: usize,
    /// Whether each sample was compared against itself.
    pub self_included: bool,
    /// Content hash of the ensemble values.
    pub ensemble_hash: String,
    /// Version map for all tools involved in the run.
    pub tool_versions: BTreeMap<String, String>,
}
