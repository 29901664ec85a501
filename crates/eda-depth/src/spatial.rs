use eda_core::{EdaError, Ensemble, EnsembleView, Separation, DEFAULT_EPSILON};

/// Spatial depth of `v` with respect to every member of `ensemble`.
///
/// Members closer than [`DEFAULT_EPSILON`] to `v` contribute a zero unit
/// vector, so the depth stays defined when `v` is itself a member.
pub fn spatial_depth(v: &[f64], ensemble: &Ensemble) -> Result<f64, EdaError> {
    spatial_depth_in(v, &ensemble.view(), DEFAULT_EPSILON)
}

/// Spatial depth over an arbitrary view with an explicit coincidence threshold.
///
/// `epsilon` must be positive and finite.
pub fn spatial_depth_in(v: &[f64], view: &EnsembleView<'_>, epsilon: f64) -> Result<f64, EdaError> {
    view.check_query(v)?;
    if !(epsilon.is_finite() && epsilon > 0.0) {
        return Err(EdaError::invalid(
            "epsilon_invalid",
            format!("coincidence threshold must be positive and finite, got {epsilon}"),
        ));
    }
    let mut sum = vec![0.0; v.len()];
    for member in view.iter() {
        let sep = Separation::between(member, v);
        // Coincident members pull in no direction.
        if sep.distance() < epsilon {
            continue;
        }
        for ((acc, x), y) in sum.iter_mut().zip(member).zip(v) {
            *acc += sep.unit_component(*x, *y);
        }
    }
    let count = view.len() as f64;
    let mean_norm = sum
        .iter()
        .map(|component| {
            let mean = component / count;
            mean * mean
        })
        .sum::<f64>()
        .sqrt();
    Ok((1.0 - mean_norm).clamp(0.0, 1.0))
}
