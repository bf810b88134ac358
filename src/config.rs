use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Reads and parses a TOML configuration file.
pub fn load(path: &Path) -> Result<PattrecConfig> {
    let toml_str = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file: {}", path.display()))?;
    toml::from_str(&toml_str).context("failed to parse TOML config")
}

/// Top-level pattrec configuration.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PattrecConfig {
    /// Global RNG seed.
    #[serde(default)]
    pub seed: Option<u64>,

    /// Markov chain parameters.
    pub chain: ChainToml,

    /// Per-state observation distributions.
    #[serde(default)]
    pub observation: Option<ObservationToml>,

    /// Simulate settings.
    #[serde(default)]
    pub simulate: SimulateToml,

    /// Durations settings.
    #[serde(default)]
    pub durations: DurationsToml,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ChainToml {
    pub initial: Vec<f64>,
    pub transition: Vec<Vec<f64>>,
    #[serde(default)]
    pub tolerance: Option<f64>,
}

/// Observation specification: exactly one of `discrete` or `gaussian` should be set.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ObservationToml {
    pub discrete: Option<Vec<Vec<f64>>>,
    pub gaussian: Option<Vec<[f64; 2]>>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SimulateToml {
    #[serde(default = "default_simulate_tmax")]
    pub tmax: usize,
    #[serde(default = "default_count")]
    pub count: usize,
}

impl Default for SimulateToml {
    fn default() -> Self {
        Self {
            tmax: default_simulate_tmax(),
            count: default_count(),
        }
    }
}

fn default_simulate_tmax() -> usize {
    100
}
fn default_count() -> usize {
    1
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DurationsToml {
    #[serde(default = "default_durations_tmax")]
    pub tmax: usize,
}

impl Default for DurationsToml {
    fn default() -> Self {
        Self {
            tmax: default_durations_tmax(),
        }
    }
}

fn default_durations_tmax() -> usize {
    20
}
