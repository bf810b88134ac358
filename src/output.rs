//! JSON reports written by the subcommands.
//!
//! Matrices are serialised row-major with one row per state. Non-finite
//! values (an absorbing state's mean duration) become `null`.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use ndarray::{Array1, Array2};
use serde::Serialize;
use tracing::info;

/// Observation sequence of either family.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ObservationSeq {
    Discrete(Vec<usize>),
    Gaussian(Vec<f64>),
}

/// One simulated sequence.
#[derive(Debug, Clone, Serialize)]
pub struct SequenceEntry {
    pub states: Vec<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub observations: Option<ObservationSeq>,
}

/// Output of `pattrec simulate`.
#[derive(Debug, Clone, Serialize)]
pub struct SimulateReport {
    pub seed: Option<u64>,
    pub tmax: usize,
    pub is_finite: bool,
    pub sequences: Vec<SequenceEntry>,
}

/// Output of `pattrec durations`.
#[derive(Debug, Clone, Serialize)]
pub struct DurationsReport {
    pub tmax: usize,
    pub is_finite: bool,
    /// `P[D = t + 1]` for the whole chain; all zeros for an infinite chain.
    pub prob_duration: Vec<f64>,
    pub mean_state_duration: Vec<Option<f64>>,
    pub prob_state_duration: Vec<Vec<f64>>,
}

/// Output of `pattrec evaluate`.
#[derive(Debug, Clone, Serialize)]
pub struct EvaluateReport {
    pub n_observations: usize,
    pub log_prob: f64,
    pub scale: Vec<f64>,
    pub posterior: Vec<Vec<f64>>,
}

/// Converts a vector, mapping non-finite entries to `None`.
pub fn finite_or_none(v: &Array1<f64>) -> Vec<Option<f64>> {
    v.iter().map(|&x| x.is_finite().then_some(x)).collect()
}

/// Converts a matrix into nested rows.
pub fn rows(m: &Array2<f64>) -> Vec<Vec<f64>> {
    m.rows().into_iter().map(|r| r.to_vec()).collect()
}

/// Serializes `report` as pretty JSON to `path`, or to stdout if `None`.
pub fn write_json<T: Serialize>(report: &T, path: Option<&Path>) -> Result<()> {
    let json = serde_json::to_string_pretty(report).context("failed to serialize report")?;
    match path {
        Some(p) => {
            std::fs::write(p, &json)
                .with_context(|| format!("failed to write report: {}", p.display()))?;
            info!(path = %p.display(), "report written");
        }
        None => {
            let mut out = std::io::stdout().lock();
            writeln!(out, "{json}").context("failed to write report to stdout")?;
        }
    }
    Ok(())
}
