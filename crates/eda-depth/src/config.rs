use eda_core::{EdaError, ErrorInfo, DEFAULT_MASTER_SEED};
use serde::{Deserialize, Serialize};

use crate::driver::{DriverOpts, SelfInclusion};
use crate::metric::Metric;

fn config_error(code: &str, message: impl Into<String>) -> EdaError {
    EdaError::Config(ErrorInfo::new(code, message))
}

/// YAML-configurable parameters governing a depth run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepthConfig {
    /// Depth metric and its parameters.
    #[serde(default)]
    pub metric: Metric,
    /// Whether each sample is part of its own reference ensemble.
    #[serde(default)]
    pub self_inclusion: SelfInclusion,
    /// Master seed for per-sample streams.
    #[serde(default)]
    pub seed_policy: SeedPolicy,
    /// Worker threads used by the driver.
    #[serde(default = "default_concurrency")]
    pub concurrency: usize,
    /// Number of equal-frequency strata used for reporting.
    #[serde(default = "default_strata")]
    pub strata: usize,
}

fn default_concurrency() -> usize {
    1
}

fn default_strata() -> usize {
    4
}

impl Default for DepthConfig {
    fn default() -> Self {
        Self {
            metric: Metric::default(),
            self_inclusion: SelfInclusion::default(),
            seed_policy: SeedPolicy::default(),
            concurrency: default_concurrency(),
            strata: default_strata(),
        }
    }
}

/// Deterministic seeding configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedPolicy {
    /// Master seed used for the run.
    #[serde(default = "default_master_seed")]
    pub master_seed: u64,
}

fn default_master_seed() -> u64 {
    DEFAULT_MASTER_SEED
}

impl Default for SeedPolicy {
    fn default() -> Self {
        Self {
            master_seed: default_master_seed(),
        }
    }
}

impl DepthConfig {
    /// Parses and validates a YAML document.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, EdaError> {
        let config: DepthConfig = serde_yaml::from_str(yaml)
            .map_err(|err| EdaError::Serde(ErrorInfo::new("yaml_deserialize", err.to_string())))?;
        config.validate()?;
        Ok(config)
    }

    /// Serializes the configuration as YAML.
    pub fn to_yaml_string(&self) -> Result<String, EdaError> {
        serde_yaml::to_string(self)
            .map_err(|err| EdaError::Serde(ErrorInfo::new("yaml_serialize", err.to_string())))
    }

    /// Rejects values that cannot drive a run.
    pub fn validate(&self) -> Result<(), EdaError> {
        self.metric
            .validate()
            .map_err(|err| EdaError::Config(err.info().clone()))?;
        if self.concurrency == 0 {
            return Err(config_error("concurrency_zero", "concurrency must be at least one"));
        }
        if self.strata == 0 {
            return Err(config_error("strata_zero", "strata must be at least one"));
        }
        Ok(())
    }

    /// Driver options derived from this configuration.
    pub fn driver_opts(&self) -> DriverOpts {
        DriverOpts {
            self_inclusion: self.self_inclusion,
            seed: self.seed_policy.master_seed,
            concurrency: self.concurrency,
        }
    }
}
