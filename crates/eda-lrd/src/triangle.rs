use eda_core::EdaError;
use tracing::debug;

use crate::fit::{fit_log_log, prepare, HurstEstimate, HurstMethod, HurstOpts};

/// Mean area of triangles `(i, x_i), (i+m, x_{i+m}), (i+2m, x_{i+2m})`.
fn mean_triangle_area(series: &[f64], m: usize) -> f64 {
    let count = series.len() - 2 * m;
    let total: f64 = (0..count)
        .map(|i| 0.5 * m as f64 * (series[i] - 2.0 * series[i + m] + series[i + 2 * m]).abs())
        .sum();
    total / count as f64
}

/// Triangle-area Hurst estimate of a path (cumulative) series.
///
/// The second difference at lag `m` scales as `m^H` and the triangle base as
/// `m`, so the mean area grows as `m^(H + 1)` and `H = slope - 1`.
pub fn triangle_area_hurst(series: &[f64], opts: &HurstOpts) -> Result<HurstEstimate, EdaError> {
    let bound = series.len() / (2 * opts.min_blocks.max(1));
    let scales = prepare(series, opts, bound)?;
    let statistics: Vec<f64> = scales
        .iter()
        .map(|&m| mean_triangle_area(series, m))
        .collect();
    let fit = fit_log_log(&scales, &statistics)?;
    let hurst = fit.slope - 1.0;
    debug!(hurst, r_squared = fit.r_squared, scales = scales.len(), "triangle area fit");
    Ok(HurstEstimate {
        method: HurstMethod::TriangleArea,
        hurst,
        slope: fit.slope,
        intercept: fit.intercept,
        r_squared: fit.r_squared,
        scales,
        statistics,
    })
}
