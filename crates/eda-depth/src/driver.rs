use eda_core::{EdaError, Ensemble, ErrorInfo, RngHandle, DEFAULT_MASTER_SEED};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::metric::DepthFunction;

/// Whether each sample takes part in its own reference ensemble.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SelfInclusion {
    /// Compare every sample against all `n` members, itself included.
    #[default]
    Include,
    /// Compare every sample against the other `n - 1` members.
    Exclude,
}

/// Options governing an ensemble depth pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriverOpts {
    /// Self-inclusion policy.
    pub self_inclusion: SelfInclusion,
    /// Master seed; sample `i` draws from its own stream keyed by `i`.
    pub seed: u64,
    /// Number of worker threads. `1` runs on the calling thread.
    pub concurrency: usize,
}

impl Default for DriverOpts {
    fn default() -> Self {
        Self {
            self_inclusion: SelfInclusion::Include,
            seed: DEFAULT_MASTER_SEED,
            concurrency: 1,
        }
    }
}

/// Depth of every sample against the full ensemble, in input order.
pub fn depths<D>(ensemble: &Ensemble, metric: &D) -> Result<Vec<f64>, EdaError>
where
    D: DepthFunction + ?Sized,
{
    depths_with(ensemble, metric, &DriverOpts::default())
}

/// Depth of every sample under explicit driver options.
///
/// Per-sample computations only read the ensemble and write their own slot,
/// so the pass is a plain data-parallel map. Randomness is drawn from a
/// per-sample stream of `opts.seed`, which keeps the output identical for
/// any `concurrency`. The first error aborts the call; no partial vector is
/// ever returned.
pub fn depths_with<D>(
    ensemble: &Ensemble,
    metric: &D,
    opts: &DriverOpts,
) -> Result<Vec<f64>, EdaError>
where
    D: DepthFunction + ?Sized,
{
    metric.validate()?;
    let samples = ensemble.len();
    let members = match opts.self_inclusion {
        SelfInclusion::Include => samples,
        SelfInclusion::Exclude => samples - 1,
    };
    if members < metric.min_members() {
        return Err(EdaError::InvalidInput(
            ErrorInfo::new(
                "too_few_members",
                format!("{} depth needs more reference members", metric.name()),
            )
            .with_context("members", members)
            .with_context("required", metric.min_members())
            .with_context("self_inclusion", format!("{:?}", opts.self_inclusion)),
        ));
    }
    if opts.concurrency == 0 {
        return Err(EdaError::Config(ErrorInfo::new(
            "concurrency_zero",
            "concurrency must be at least one",
        )));
    }

    debug!(
        metric = metric.name(),
        samples,
        dimension = ensemble.dim(),
        concurrency = opts.concurrency,
        "computing ensemble depths"
    );

    let score = |index: usize| -> Result<f64, EdaError> {
        let view = match opts.self_inclusion {
            SelfInclusion::Include => ensemble.view(),
            SelfInclusion::Exclude => ensemble.view_without(index)?,
        };
        let sample = ensemble
            .sample(index)
            .ok_or_else(|| EdaError::invalid("sample_out_of_range", "sample index out of range"))?;
        let mut rng = RngHandle::for_sample(opts.seed, index);
        let depth = metric.depth(sample, &view, &mut rng)?;
        trace!(index, depth, "sample depth");
        Ok(depth)
    };

    if opts.concurrency == 1 {
        return (0..samples).map(score).collect();
    }

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(opts.concurrency)
        .build()
        .map_err(|err| EdaError::Config(ErrorInfo::new("thread_pool", err.to_string())))?;
    pool.install(|| (0..samples).into_par_iter().map(score).collect())
}
