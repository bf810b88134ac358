//! Simulate command: draw state and observation sequences from the chain.

use anyhow::{Context, Result};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{info, info_span};

use crate::cli::SimulateArgs;
use crate::config::{self, PattrecConfig};
use crate::convert::{self, ObservationModels};
use crate::output::{ObservationSeq, SequenceEntry, SimulateReport, write_json};

/// Run the simulation pipeline.
pub fn run(args: SimulateArgs) -> Result<()> {
    let _cmd = info_span!("simulate").entered();
    let config = config::load(&args.config)?;
    let report = simulate(&config, args.seed, args.count, args.tmax)?;
    write_json(&report, args.output.as_deref())
}

/// Builds the chain from `config` and draws the requested sequences.
///
/// CLI overrides take precedence over the config values.
pub fn simulate(
    config: &PattrecConfig,
    seed: Option<u64>,
    count: Option<usize>,
    tmax: Option<usize>,
) -> Result<SimulateReport> {
    let chain = convert::build_chain(&config.chain)?;
    let models = config
        .observation
        .as_ref()
        .map(|o| convert::build_observation_models(o, chain.n_states()))
        .transpose()?;

    let seed = seed.or(config.seed);
    let count = count.unwrap_or(config.simulate.count);
    let tmax = tmax.unwrap_or(config.simulate.tmax);
    let mut rng = match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    };

    info!(
        n_states = chain.n_states(),
        is_finite = chain.is_finite(),
        count,
        tmax,
        "simulating sequences"
    );

    let mut sequences = Vec::with_capacity(count);
    for k in 0..count {
        let entry = match &models {
            None => SequenceEntry {
                states: chain.rand(tmax, &mut rng),
                observations: None,
            },
            Some(ObservationModels::Discrete(m)) => {
                let (states, obs) = chain
                    .simulate(tmax, m, &mut rng)
                    .with_context(|| format!("simulation {k} failed"))?;
                SequenceEntry {
                    states,
                    observations: Some(ObservationSeq::Discrete(obs)),
                }
            }
            Some(ObservationModels::Gaussian(m)) => {
                let (states, obs) = chain
                    .simulate(tmax, m, &mut rng)
                    .with_context(|| format!("simulation {k} failed"))?;
                SequenceEntry {
                    states,
                    observations: Some(ObservationSeq::Gaussian(obs)),
                }
            }
        };
        sequences.push(entry);
    }

    info!(n_sequences = sequences.len(), "simulation complete");
    Ok(SimulateReport {
        seed,
        tmax,
        is_finite: chain.is_finite(),
        sequences,
    })
}
