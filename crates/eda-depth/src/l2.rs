use eda_core::{EdaError, Ensemble, EnsembleView, Separation};

/// Scale applied to `1 / (1 + d)` so depths print as readable magnitudes.
pub const DEFAULT_L2_SCALE: f64 = 1e6;

/// L2 depth: `scale / (1 + mean distance from v to the members)`.
pub fn l2_depth(v: &[f64], ensemble: &Ensemble) -> Result<f64, EdaError> {
    l2_depth_in(v, &ensemble.view(), DEFAULT_L2_SCALE)
}

/// L2 depth over an arbitrary view with an explicit scale constant.
pub fn l2_depth_in(v: &[f64], view: &EnsembleView<'_>, scale: f64) -> Result<f64, EdaError> {
    view.check_query(v)?;
    if !(scale.is_finite() && scale > 0.0) {
        return Err(EdaError::invalid(
            "l2_scale_invalid",
            format!("scale must be positive and finite, got {scale}"),
        ));
    }
    let seps: Vec<Separation> = view.iter().map(|member| Separation::between(member, v)).collect();
    let top = seps.iter().map(|s| s.scale).fold(0.0, f64::max);
    if top == 0.0 {
        return Ok(scale);
    }
    // mean distance = 2 * top * ratio, with ratio in [0, sqrt(p)]
    let ratio = seps.iter().map(|s| (s.scale / top) * s.norm).sum::<f64>() / view.len() as f64;
    let mean = top * (2.0 * ratio);
    if mean.is_finite() {
        Ok(scale / (1.0 + mean))
    } else {
        // mean beyond f64::MAX, where 1 + mean == mean
        Ok(((scale * 0.5) / top) / ratio)
    }
}
