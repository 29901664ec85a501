use eda_core::{EdaError, ErrorInfo};
use serde::{Deserialize, Serialize};

use crate::stratify::rank_order;

/// Fixed-width histogram descriptor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Histogram {
    /// Bin edges (inclusive of the left edge, exclusive of the right edge except the last bin).
    pub edges: Vec<f64>,
    /// Counts recorded per bin.
    pub counts: Vec<u64>,
}

/// Quantile summary of a depth vector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quantiles {
    /// 5th percentile estimate.
    pub q05: f64,
    /// Median (50th percentile) estimate.
    pub q50: f64,
    /// 95th percentile estimate.
    pub q95: f64,
}

/// Rank agreement between two depth vectors over the same ensemble.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Correlations {
    /// Pearson correlation coefficient.
    pub pearson: f64,
    /// Spearman rank correlation coefficient.
    pub spearman: f64,
}

/// Descriptive statistics of one depth vector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepthSummary {
    /// Number of samples.
    pub count: usize,
    /// Smallest depth.
    pub min: f64,
    /// Largest depth.
    pub max: f64,
    /// Arithmetic mean depth.
    pub mean: f64,
    /// Interpolated quantiles.
    pub quantiles: Quantiles,
    /// Histogram spanning `[min, max]`.
    pub histogram: Histogram,
}

impl DepthSummary {
    /// Summarises `depths` with a `bins`-bin histogram.
    pub fn from_depths(depths: &[f64], bins: usize) -> Result<Self, EdaError> {
        if bins == 0 {
            return Err(EdaError::invalid("bins_zero", "histogram needs at least one bin"));
        }
        let ascending: Vec<f64> = rank_order(depths)?.into_iter().map(|idx| depths[idx]).collect();
        let min = ascending[0];
        let max = ascending[ascending.len() - 1];
        let mean = ascending.iter().sum::<f64>() / ascending.len() as f64;
        Ok(Self {
            count: ascending.len(),
            min,
            max,
            mean,
            quantiles: Quantiles {
                q05: interpolate(&ascending, 0.05),
                q50: interpolate(&ascending, 0.5),
                q95: interpolate(&ascending, 0.95),
            },
            histogram: histogram(&ascending, min, max, bins),
        })
    }
}

fn histogram(ascending: &[f64], start: f64, end: f64, bins: usize) -> Histogram {
    let width = (end - start) / bins as f64;
    let edges = (0..=bins).map(|edge| start + edge as f64 * width).collect();
    let mut counts = vec![0u64; bins];
    for depth in ascending {
        // A zero-width range puts everything in the first bin.
        let bin = if width > 0.0 {
            (((depth - start) / width).floor() as usize).min(bins - 1)
        } else {
            0
        };
        counts[bin] += 1;
    }
    Histogram { edges, counts }
}

/// Quantile `q` of a depth vector in any order, interpolating linearly
/// between order statistics (`q = 0` is the minimum, `q = 1` the maximum).
pub fn depth_quantile(depths: &[f64], q: f64) -> Result<f64, EdaError> {
    if !(0.0..=1.0).contains(&q) {
        return Err(EdaError::InvalidInput(
            ErrorInfo::new("quantile_out_of_range", "quantile must lie in [0, 1]")
                .with_context("q", q),
        ));
    }
    let ascending: Vec<f64> = rank_order(depths)?.into_iter().map(|idx| depths[idx]).collect();
    Ok(interpolate(&ascending, q))
}

// `ascending` is non-empty and `q` lies in [0, 1].
fn interpolate(ascending: &[f64], q: f64) -> f64 {
    let at = q * (ascending.len() - 1) as f64;
    let below = at.floor() as usize;
    let frac = at - below as f64;
    match ascending.get(below + 1) {
        Some(above) if frac > 0.0 => ascending[below] + frac * (above - ascending[below]),
        _ => ascending[below],
    }
}

/// Pearson and Spearman agreement between two depth vectors.
///
/// Magnitudes of different metrics are not comparable, but their orderings
/// are; Spearman is the number to look at.
pub fn rank_agreement(a: &[f64], b: &[f64]) -> Result<Correlations, EdaError> {
    if a.len() != b.len() {
        return Err(EdaError::InvalidInput(
            ErrorInfo::new("length_mismatch", "depth vectors differ in length")
                .with_context("left", a.len())
                .with_context("right", b.len()),
        ));
    }
    let ranks_a = mid_ranks(a)?;
    let ranks_b = mid_ranks(b)?;
    Ok(Correlations {
        pearson: correlation(a, b),
        spearman: correlation(&ranks_a, &ranks_b),
    })
}

/// Zero when either side is constant.
fn correlation(a: &[f64], b: &[f64]) -> f64 {
    let n = a.len() as f64;
    let centre_a = a.iter().sum::<f64>() / n;
    let centre_b = b.iter().sum::<f64>() / n;
    let (cov, var_a, var_b) = a.iter().zip(b).fold((0.0, 0.0, 0.0), |(c, va, vb), (x, y)| {
        let (dx, dy) = (x - centre_a, y - centre_b);
        (c + dx * dy, va + dx * dx, vb + dy * dy)
    });
    if var_a == 0.0 || var_b == 0.0 {
        0.0
    } else {
        cov / (var_a * var_b).sqrt()
    }
}

/// 1-based depth ranks; tied depths share the mean of the ranks they span.
fn mid_ranks(depths: &[f64]) -> Result<Vec<f64>, EdaError> {
    let order = rank_order(depths)?;
    let mut ranks = vec![0.0; depths.len()];
    let mut first = 0;
    while first < order.len() {
        let tied = order[first..]
            .iter()
            .take_while(|&&idx| depths[idx] == depths[order[first]])
            .count();
        let shared = first as f64 + (tied as f64 + 1.0) / 2.0;
        for &idx in &order[first..first + tied] {
            ranks[idx] = shared;
        }
        first += tied;
    }
    Ok(ranks)
}
