//! Evaluate command: forward-backward on an observation sequence.

use std::str::FromStr;

use anyhow::{Context, Result, anyhow};
use tracing::{info, info_span};

use pattrec_markov::{ForwardBackward, MarkovChain, ObservationModel};

use crate::cli::EvaluateArgs;
use crate::config::{self, PattrecConfig};
use crate::convert::{self, ObservationModels};
use crate::output::{EvaluateReport, rows, write_json};

/// Run the standalone evaluation pipeline.
pub fn run(args: EvaluateArgs) -> Result<()> {
    let _cmd = info_span!("evaluate").entered();
    let config = config::load(&args.config)?;

    info!(path = %args.observations.display(), "reading observations");
    let text = std::fs::read_to_string(&args.observations).with_context(|| {
        format!(
            "failed to read observations: {}",
            args.observations.display()
        )
    })?;

    let report = evaluate(&config, &text)
        .with_context(|| format!("evaluation of {} failed", args.observations.display()))?;
    write_json(&report, args.output.as_deref())
}

/// Parses `text` according to the configured observation family and runs
/// forward-backward on it.
pub fn evaluate(config: &PattrecConfig, text: &str) -> Result<EvaluateReport> {
    let chain = convert::build_chain(&config.chain)?;
    let obs_cfg = config
        .observation
        .as_ref()
        .ok_or_else(|| anyhow!("evaluate requires an [observation] section in config"))?;
    let models = convert::build_observation_models(obs_cfg, chain.n_states())?;

    let (n_observations, fb) = match &models {
        ObservationModels::Discrete(m) => run_forward_backward(&chain, m, text)?,
        ObservationModels::Gaussian(m) => run_forward_backward(&chain, m, text)?,
    };

    let log_prob = fb.log_prob();
    info!(n_observations, log_prob, "forward-backward complete");
    Ok(EvaluateReport {
        n_observations,
        log_prob,
        scale: fb.scale().to_vec(),
        posterior: rows(&fb.posterior()),
    })
}

fn run_forward_backward<M>(
    chain: &MarkovChain,
    models: &[M],
    text: &str,
) -> Result<(usize, ForwardBackward)>
where
    M: ObservationModel,
    M::Observation: FromStr,
    <M::Observation as FromStr>::Err: std::error::Error + Send + Sync + 'static,
{
    let obs = parse_observations::<M::Observation>(text)?;
    let fb = chain
        .forward_backward(models, &obs)
        .context("forward-backward failed")?;
    Ok((obs.len(), fb))
}

/// Parses whitespace-separated tokens into observations.
pub fn parse_observations<T>(text: &str) -> Result<Vec<T>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    text.split_whitespace()
        .enumerate()
        .map(|(i, tok)| {
            tok.parse::<T>()
                .with_context(|| format!("invalid observation {tok:?} at position {i}"))
        })
        .collect()
}
