use eda_core::{EdaError, ErrorInfo};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// One equal-frequency depth stratum.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stratum {
    /// Position of the stratum, `0` holding the most outlying samples.
    pub rank: usize,
    /// Sample indices in ascending depth order.
    pub indices: Vec<usize>,
    /// Smallest depth in the stratum, `None` when empty.
    pub depth_min: Option<f64>,
    /// Largest depth in the stratum, `None` when empty.
    pub depth_max: Option<f64>,
}

/// Sample indices sorted by ascending depth, ties broken by index.
pub fn rank_order(depths: &[f64]) -> Result<Vec<usize>, EdaError> {
    if depths.is_empty() {
        return Err(EdaError::invalid("depths_empty", "depth vector is empty"));
    }
    if let Some(index) = depths.iter().position(|depth| !depth.is_finite()) {
        return Err(EdaError::InvalidInput(
            ErrorInfo::new("non_finite_depth", "depth vector contains a non-finite value")
                .with_context("index", index),
        ));
    }
    let mut order: Vec<usize> = (0..depths.len()).collect();
    order.sort_by(|a, b| depths[*a].total_cmp(&depths[*b]).then(a.cmp(b)));
    Ok(order)
}

/// Partitions sample indices into `q` equal-frequency bins of depth rank.
///
/// Bin `k` holds ranks `[k*n/q, (k+1)*n/q)`, so every index lands in exactly
/// one bin and bin sizes differ by at most one.
pub fn stratify(depths: &[f64], q: usize) -> Result<Vec<Vec<usize>>, EdaError> {
    if q == 0 {
        return Err(EdaError::invalid("strata_zero", "at least one stratum is required"));
    }
    let order = rank_order(depths)?;
    let n = order.len();
    if q > n {
        warn!(strata = q, samples = n, "more strata than samples, some will be empty");
    }
    let bins: Vec<Vec<usize>> = (0..q)
        .map(|k| order[k * n / q..(k + 1) * n / q].to_vec())
        .collect();
    debug!(strata = q, samples = n, "stratified depth vector");
    Ok(bins)
}

/// Like [`stratify`] but annotates each bin with its depth range.
pub fn stratify_summary(depths: &[f64], q: usize) -> Result<Vec<Stratum>, EdaError> {
    let bins = stratify(depths, q)?;
    Ok(bins
        .into_iter()
        .enumerate()
        .map(|(rank, indices)| Stratum {
            rank,
            depth_min: indices.first().map(|&idx| depths[idx]),
            depth_max: indices.last().map(|&idx| depths[idx]),
            indices,
        })
        .collect())
}

/// The median-depth member of every non-empty stratum.
pub fn representatives(strata: &[Stratum]) -> Vec<usize> {
    strata
        .iter()
        .filter(|stratum| !stratum.indices.is_empty())
        .map(|stratum| stratum.indices[stratum.indices.len() / 2])
        .collect()
}

/// The `k` deepest samples, deepest first.
pub fn most_central(depths: &[f64], k: usize) -> Result<Vec<usize>, EdaError> {
    let order = rank_order(depths)?;
    Ok(order.into_iter().rev().take(k).collect())
}

/// The `k` shallowest samples, shallowest first.
pub fn most_outlying(depths: &[f64], k: usize) -> Result<Vec<usize>, EdaError> {
    let order = rank_order(depths)?;
    Ok(order.into_iter().take(k).collect())
}
