use std::collections::BTreeMap;

use eda_core::{EdaError, Ensemble, ErrorInfo, RunProvenance};
use eda_depth::{depths_from_config, DepthConfig, DepthFunction, SelfInclusion};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use tracing::debug;

use crate::hash::ensemble_hash;
use crate::stratify::{representatives, stratify_summary, Stratum};
use crate::summary::DepthSummary;

/// Number of histogram bins used by [`DepthReport::build`].
pub const DEFAULT_HISTOGRAM_BINS: usize = 10;

/// Layout version written into every report.
pub const REPORT_SCHEMA: u32 = 1;

fn serde_error(code: &str, err: impl ToString) -> EdaError {
    EdaError::Serde(ErrorInfo::new(code, err.to_string()))
}

/// Depth vector of one ensemble together with its summaries and strata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepthReport {
    /// Layout version, [`REPORT_SCHEMA`] for reports built here.
    pub schema: u32,
    /// Call that produced the depth vector.
    pub provenance: RunProvenance,
    /// Depth of every sample in ensemble order.
    pub depths: Vec<f64>,
    /// Descriptive statistics of `depths`.
    pub summary: DepthSummary,
    /// Equal-frequency strata, most outlying first.
    pub strata: Vec<Stratum>,
    /// Median-depth member of each non-empty stratum.
    pub representatives: Vec<usize>,
}

impl DepthReport {
    /// Computes depths under `config` and assembles the report.
    pub fn build(ensemble: &Ensemble, config: &DepthConfig) -> Result<Self, EdaError> {
        let depths = depths_from_config(ensemble, config)?;
        let summary = DepthSummary::from_depths(&depths, DEFAULT_HISTOGRAM_BINS)?;
        let strata = stratify_summary(&depths, config.strata)?;
        let representatives = representatives(&strata);

        let mut tool_versions = BTreeMap::new();
        tool_versions.insert(
            env!("CARGO_PKG_NAME").to_string(),
            env!("CARGO_PKG_VERSION").to_string(),
        );
        let provenance = RunProvenance {
            metric: config.metric.name().to_string(),
            seed: config.seed_policy.master_seed,
            samples: ensemble.len(),
            dimension: ensemble.dim(),
            self_included: config.self_inclusion == SelfInclusion::Include,
            ensemble_hash: ensemble_hash(ensemble),
            tool_versions,
        };
        debug!(
            metric = %provenance.metric,
            samples = provenance.samples,
            strata = strata.len(),
            "built depth report"
        );
        Ok(Self {
            schema: REPORT_SCHEMA,
            provenance,
            depths,
            summary,
            strata,
            representatives,
        })
    }

    /// JSON encoding. Field order is fixed by the struct layout and every map
    /// is a `BTreeMap`, so equal reports encode to equal bytes.
    pub fn to_json(&self) -> Result<Vec<u8>, EdaError> {
        serde_json::to_vec(self).map_err(|err| serde_error("json_serialize", err))
    }

    /// Decodes a report written with [`DepthReport::to_json`], rejecting
    /// layouts this build does not know.
    pub fn from_json(data: &[u8]) -> Result<Self, EdaError> {
        let report: Self =
            serde_json::from_slice(data).map_err(|err| serde_error("json_deserialize", err))?;
        if report.schema != REPORT_SCHEMA {
            return Err(EdaError::Serde(
                ErrorInfo::new("schema_unsupported", "report layout version is not supported")
                    .with_context("found", report.schema)
                    .with_context("expected", REPORT_SCHEMA),
            ));
        }
        Ok(report)
    }

    /// YAML encoding for human inspection.
    pub fn to_yaml(&self) -> Result<String, EdaError> {
        serde_yaml::to_string(self).map_err(|err| serde_error("yaml_serialize", err))
    }

    /// Hex SHA-256 of [`DepthReport::to_json`].
    pub fn stable_hash(&self) -> Result<String, EdaError> {
        Ok(format!("{:x}", Sha256::digest(self.to_json()?)))
    }
}
