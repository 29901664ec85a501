use eda_core::{EdaError, Ensemble, EnsembleView, ErrorInfo, RngHandle};
use rand::seq::index;

/// Number of random triples drawn when no explicit count is given.
pub const DEFAULT_TRIALS: usize = 500;

const BAND_SIZE: usize = 3;

fn require_members(view: &EnsembleView<'_>) -> Result<(), EdaError> {
    if view.len() < BAND_SIZE {
        return Err(EdaError::InvalidInput(
            ErrorInfo::new(
                "band_too_few_members",
                "band depth needs at least three members to draw a triple",
            )
            .with_context("members", view.len()),
        ));
    }
    Ok(())
}

/// Fraction of coordinates where `v` lies inside the envelope of `a`, `b`, `c`.
fn envelope_fraction(v: &[f64], a: &[f64], b: &[f64], c: &[f64]) -> f64 {
    let inside = v
        .iter()
        .enumerate()
        .filter(|&(j, value)| {
            let lo = a[j].min(b[j]).min(c[j]);
            let hi = a[j].max(b[j]).max(c[j]);
            lo <= *value && *value <= hi
        })
        .count();
    inside as f64 / v.len() as f64
}

/// Monte Carlo band depth of `v` over `trials` random triples.
pub fn band_depth(
    v: &[f64],
    ensemble: &Ensemble,
    trials: usize,
    rng: &mut RngHandle,
) -> Result<f64, EdaError> {
    band_depth_in(v, &ensemble.view(), trials, rng)
}

/// Monte Carlo band depth over an arbitrary view.
///
/// Each trial draws three distinct members without replacement. The estimate
/// is unbiased for [`band_depth_exact_in`]; its variance shrinks as `1 / trials`.
pub fn band_depth_in(
    v: &[f64],
    view: &EnsembleView<'_>,
    trials: usize,
    rng: &mut RngHandle,
) -> Result<f64, EdaError> {
    view.check_query(v)?;
    require_members(view)?;
    if trials == 0 {
        return Err(EdaError::invalid("trials_zero", "band depth needs at least one trial"));
    }
    let mut total = 0.0;
    for _ in 0..trials {
        let picks = index::sample(rng, view.len(), BAND_SIZE);
        let member = |k: usize| view.get(picks.index(k)).ok_or_else(|| {
            EdaError::invalid("band_index", "sampled member is outside the view")
        });
        total += envelope_fraction(v, member(0)?, member(1)?, member(2)?);
    }
    Ok(total / trials as f64)
}

/// Exact band depth of `v`, averaged over every triple of members.
pub fn band_depth_exact(v: &[f64], ensemble: &Ensemble) -> Result<f64, EdaError> {
    band_depth_exact_in(v, &ensemble.view())
}

/// Exact band depth over an arbitrary view. Costs `O(C(n, 3) * p)`.
pub fn band_depth_exact_in(v: &[f64], view: &EnsembleView<'_>) -> Result<f64, EdaError> {
    view.check_query(v)?;
    require_members(view)?;
    let members: Vec<&[f64]> = view.iter().collect();
    let n = members.len();
    let mut total = 0.0;
    let mut triples = 0usize;
    for i in 0..n {
        for j in (i + 1)..n {
            for k in (j + 1)..n {
                total += envelope_fraction(v, members[i], members[j], members[k]);
                triples += 1;
            }
        }
    }
    Ok(total / triples as f64)
}
