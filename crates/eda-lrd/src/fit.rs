use eda_core::{EdaError, ErrorInfo};
use serde::{Deserialize, Serialize};

fn invalid(code: &str, message: impl Into<String>) -> EdaError {
    EdaError::InvalidInput(ErrorInfo::new(code, message))
}

fn default_min_scale() -> usize {
    2
}

fn default_num_scales() -> usize {
    12
}

fn default_min_blocks() -> usize {
    10
}

/// Scale grid controlling a Hurst estimate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HurstOpts {
    /// Smallest block size or lag.
    #[serde(default = "default_min_scale")]
    pub min_scale: usize,
    /// Largest block size or lag; capped so every scale keeps `min_blocks` blocks.
    #[serde(default)]
    pub max_scale: Option<usize>,
    /// Number of log-spaced scales requested (duplicates after rounding are dropped).
    #[serde(default = "default_num_scales")]
    pub num_scales: usize,
    /// Minimum number of blocks (or lag spans) a scale must fit.
    #[serde(default = "default_min_blocks")]
    pub min_blocks: usize,
}

impl Default for HurstOpts {
    fn default() -> Self {
        Self {
            min_scale: default_min_scale(),
            max_scale: None,
            num_scales: default_num_scales(),
            min_blocks: default_min_blocks(),
        }
    }
}

impl HurstOpts {
    pub(crate) fn validate(&self) -> Result<(), EdaError> {
        if self.min_scale == 0 {
            return Err(invalid("min_scale_zero", "scales start at one"));
        }
        if self.num_scales < 3 {
            return Err(invalid("too_few_scales", "a slope fit needs at least three scales"));
        }
        if self.min_blocks < 2 {
            return Err(invalid("too_few_blocks", "each scale needs at least two blocks"));
        }
        Ok(())
    }

    /// Log-spaced integer scales between `min_scale` and `min(max_scale, bound)`.
    pub(crate) fn grid(&self, bound: usize) -> Vec<usize> {
        let hi = self.max_scale.map_or(bound, |max| max.min(bound));
        if hi <= self.min_scale {
            return Vec::new();
        }
        let (log_lo, log_hi) = ((self.min_scale as f64).ln(), (hi as f64).ln());
        let steps = (self.num_scales - 1) as f64;
        let mut scales: Vec<usize> = (0..self.num_scales)
            .map(|k| (log_lo + (log_hi - log_lo) * k as f64 / steps).exp().round() as usize)
            .collect();
        scales.dedup();
        scales
    }
}

/// Estimator that produced a [`HurstEstimate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HurstMethod {
    /// Variance of non-overlapping block means.
    BlockVariance,
    /// Mean area of lagged triangles.
    TriangleArea,
}

/// Hurst exponent together with the log-log regression behind it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HurstEstimate {
    /// Estimator used.
    pub method: HurstMethod,
    /// Estimated Hurst exponent.
    pub hurst: f64,
    /// Slope of `log statistic` against `log scale`.
    pub slope: f64,
    /// Intercept of the regression.
    pub intercept: f64,
    /// Coefficient of determination of the regression.
    pub r_squared: f64,
    /// Scales that entered the fit.
    pub scales: Vec<usize>,
    /// Scaling statistic measured at each scale.
    pub statistics: Vec<f64>,
}

pub(crate) struct LogLogFit {
    pub slope: f64,
    pub intercept: f64,
    pub r_squared: f64,
}

/// Ordinary least squares of `ln(stat)` on `ln(scale)`.
pub(crate) fn fit_log_log(scales: &[usize], statistics: &[f64]) -> Result<LogLogFit, EdaError> {
    if let Some(position) = statistics.iter().position(|stat| stat.is_nan() || *stat <= 0.0) {
        return Err(EdaError::InvalidInput(
            ErrorInfo::new("degenerate_series", "scaling statistic is not positive")
                .with_context("scale", scales[position])
                .with_hint("constant or piecewise constant series carry no scaling information"),
        ));
    }
    let xs: Vec<f64> = scales.iter().map(|&m| (m as f64).ln()).collect();
    let ys: Vec<f64> = statistics.iter().map(|stat| stat.ln()).collect();
    let len = xs.len() as f64;
    let mean_x = xs.iter().sum::<f64>() / len;
    let mean_y = ys.iter().sum::<f64>() / len;
    let mut sxx = 0.0;
    let mut sxy = 0.0;
    let mut syy = 0.0;
    for (x, y) in xs.iter().zip(&ys) {
        sxx += (x - mean_x) * (x - mean_x);
        sxy += (x - mean_x) * (y - mean_y);
        syy += (y - mean_y) * (y - mean_y);
    }
    let slope = sxy / sxx;
    let r_squared = if syy == 0.0 { 1.0 } else { (sxy * sxy) / (sxx * syy) };
    Ok(LogLogFit {
        slope,
        intercept: mean_y - slope * mean_x,
        r_squared,
    })
}

/// Validates the series and the scale grid shared by both estimators.
pub(crate) fn prepare(series: &[f64], opts: &HurstOpts, bound: usize) -> Result<Vec<usize>, EdaError> {
    opts.validate()?;
    if let Some(index) = series.iter().position(|value| !value.is_finite()) {
        return Err(EdaError::InvalidInput(
            ErrorInfo::new("non_finite_value", "series contains a non-finite value")
                .with_context("index", index),
        ));
    }
    let scales = opts.grid(bound);
    if scales.len() < 3 {
        return Err(EdaError::InvalidInput(
            ErrorInfo::new("series_too_short", "series supports fewer than three scales")
                .with_context("len", series.len())
                .with_context("scales", scales.len()),
        ));
    }
    Ok(scales)
}
