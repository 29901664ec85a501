use eda_core::EdaError;
use tracing::debug;

use crate::fit::{fit_log_log, prepare, HurstEstimate, HurstMethod, HurstOpts};

/// Sample variance of the means of non-overlapping blocks of length `m`.
fn block_mean_variance(series: &[f64], m: usize) -> f64 {
    let means: Vec<f64> = series
        .chunks_exact(m)
        .map(|block| block.iter().sum::<f64>() / m as f64)
        .collect();
    let count = means.len() as f64;
    let grand = means.iter().sum::<f64>() / count;
    means.iter().map(|mean| (mean - grand) * (mean - grand)).sum::<f64>() / (count - 1.0)
}

/// Aggregated-variance Hurst estimate of a stationary increment series.
///
/// `Var(block mean) ~ m^(2H - 2)`, so `H = 1 + slope / 2`.
pub fn block_variance_hurst(series: &[f64], opts: &HurstOpts) -> Result<HurstEstimate, EdaError> {
    let scales = prepare(series, opts, series.len() / opts.min_blocks.max(1))?;
    let statistics: Vec<f64> = scales
        .iter()
        .map(|&m| block_mean_variance(series, m))
        .collect();
    let fit = fit_log_log(&scales, &statistics)?;
    let hurst = 1.0 + fit.slope / 2.0;
    debug!(hurst, r_squared = fit.r_squared, scales = scales.len(), "block variance fit");
    Ok(HurstEstimate {
        method: HurstMethod::BlockVariance,
        hurst,
        slope: fit.slope,
        intercept: fit.intercept,
        r_squared: fit.r_squared,
        scales,
        statistics,
    })
}
