//! Pure conversion functions: TOML config structs -> library types.

use anyhow::{Context, Result, bail};

use pattrec_markov::{ChainConfig, DiscreteObservation, GaussianObservation, MarkovChain};

use crate::config::*;

/// Observation models for every state, one family per configuration.
#[derive(Debug, Clone)]
pub enum ObservationModels {
    Discrete(Vec<DiscreteObservation>),
    Gaussian(Vec<GaussianObservation>),
}

impl ObservationModels {
    /// Number of configured models.
    pub fn n_models(&self) -> usize {
        match self {
            Self::Discrete(m) => m.len(),
            Self::Gaussian(m) => m.len(),
        }
    }
}

/// Builds a [`ChainConfig`] from the TOML chain configuration.
pub fn build_chain_config(chain: &ChainToml) -> ChainConfig {
    match chain.tolerance {
        Some(tol) => ChainConfig::new().with_tolerance(tol),
        None => ChainConfig::default(),
    }
}

/// Builds a validated [`MarkovChain`] from the TOML chain configuration.
pub fn build_chain(chain: &ChainToml) -> Result<MarkovChain> {
    let cfg = build_chain_config(chain);
    MarkovChain::from_rows_with_config(&chain.initial, &chain.transition, &cfg)
        .context("invalid [chain] configuration")
}

/// Converts a TOML observation specification into per-state models.
///
/// Exactly one of `discrete` or `gaussian` must be set, with one entry per
/// state.
pub fn build_observation_models(
    obs: &ObservationToml,
    n_states: usize,
) -> Result<ObservationModels> {
    let models = match (&obs.discrete, &obs.gaussian) {
        (Some(rows), None) => ObservationModels::Discrete(
            rows.iter()
                .enumerate()
                .map(|(i, p)| {
                    DiscreteObservation::new(p.clone())
                        .with_context(|| format!("invalid discrete model for state {i}"))
                })
                .collect::<Result<_>>()?,
        ),
        (None, Some(pairs)) => ObservationModels::Gaussian(
            pairs
                .iter()
                .enumerate()
                .map(|(i, &[mean, std_dev])| {
                    GaussianObservation::new(mean, std_dev)
                        .with_context(|| format!("invalid gaussian model for state {i}"))
                })
                .collect::<Result<_>>()?,
        ),
        (Some(_), Some(_)) => {
            bail!("observation must have exactly one of discrete or gaussian, got both")
        }
        (None, None) => {
            bail!("observation must have exactly one of discrete or gaussian, got neither")
        }
    };
    if models.n_models() != n_states {
        bail!(
            "observation models: expected one per state ({n_states}), got {}",
            models.n_models()
        );
    }
    Ok(models)
}
