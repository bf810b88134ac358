//! The Markov chain type and its construction.

use ndarray::{Array1, Array2, ArrayView1, ArrayView2, s};
use tracing::debug;

use crate::config::{ChainConfig, check_distribution};
use crate::error::MarkovError;

/// A first-order discrete Markov chain.
///
/// The chain is defined by an initial distribution `q` over `n_states`
/// states and a transition matrix `A` with `A[i, j] = P[S(t+1) = j | S(t) = i]`.
///
/// A square `n x n` matrix describes an infinite-duration chain. An
/// `n x (n + 1)` matrix describes a finite-duration chain whose last column
/// holds the probability of moving to the absorbing END state.
///
/// The chain is immutable once built.
#[derive(Debug, Clone)]
pub struct MarkovChain {
    initial: Array1<f64>,
    transition: Array2<f64>,
    n_states: usize,
    is_finite: bool,
}

impl MarkovChain {
    /// Builds a chain with the default [`ChainConfig`].
    ///
    /// # Errors
    ///
    /// See [`MarkovChain::with_config`].
    pub fn new(initial: Array1<f64>, transition: Array2<f64>) -> Result<Self, MarkovError> {
        Self::with_config(initial, transition, &ChainConfig::default())
    }

    /// Builds a chain, validating it against `config`.
    ///
    /// # Errors
    ///
    /// - [`MarkovError::InvalidConfig`] if `config` fails validation.
    /// - [`MarkovError::ShapeMismatch`] if the matrix has no rows, is neither
    ///   square nor one column wider than tall, or `initial` has the wrong length.
    /// - [`MarkovError::NotStochastic`] if `initial` or any row of `transition`
    ///   is not a probability distribution within the configured tolerance.
    pub fn with_config(
        initial: Array1<f64>,
        transition: Array2<f64>,
        config: &ChainConfig,
    ) -> Result<Self, MarkovError> {
        config.validate()?;

        let (n_states, n_cols) = transition.dim();
        if n_states == 0 {
            return Err(MarkovError::ShapeMismatch {
                reason: "transition matrix has no rows".to_string(),
            });
        }
        let is_finite = if n_cols == n_states {
            false
        } else if n_cols == n_states + 1 {
            true
        } else {
            return Err(MarkovError::ShapeMismatch {
                reason: format!(
                    "transition matrix is {n_states}x{n_cols}, expected {n_states}x{n_states} or {n_states}x{}",
                    n_states + 1
                ),
            });
        };
        if initial.len() != n_states {
            return Err(MarkovError::ShapeMismatch {
                reason: format!(
                    "{} initial probabilities for {n_states} states",
                    initial.len()
                ),
            });
        }

        let tol = config.tolerance();
        check_distribution(initial.iter().copied(), "initial distribution", tol)?;
        for (i, row) in transition.rows().into_iter().enumerate() {
            check_distribution(row.iter().copied(), &format!("row {i}"), tol)?;
        }

        debug!(n_states, is_finite, "markov chain constructed");

        Ok(Self {
            initial,
            transition,
            n_states,
            is_finite,
        })
    }

    /// Builds a chain from plain nested rows with the default config.
    ///
    /// # Errors
    ///
    /// Returns [`MarkovError::ShapeMismatch`] if the rows are ragged, plus
    /// every error of [`MarkovChain::new`].
    pub fn from_rows(initial: &[f64], rows: &[Vec<f64>]) -> Result<Self, MarkovError> {
        Self::from_rows_with_config(initial, rows, &ChainConfig::default())
    }

    /// Like [`MarkovChain::from_rows`], validated against `config`.
    pub fn from_rows_with_config(
        initial: &[f64],
        rows: &[Vec<f64>],
        config: &ChainConfig,
    ) -> Result<Self, MarkovError> {
        let n_cols = rows.first().map_or(0, Vec::len);
        if let Some((i, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != n_cols) {
            return Err(MarkovError::ShapeMismatch {
                reason: format!("row {i} has {} entries, row 0 has {n_cols}", row.len()),
            });
        }
        let flat: Vec<f64> = rows.iter().flatten().copied().collect();
        let transition = Array2::from_shape_vec((rows.len(), n_cols), flat).map_err(|e| {
            MarkovError::ShapeMismatch {
                reason: e.to_string(),
            }
        })?;
        Self::with_config(Array1::from(initial.to_vec()), transition, config)
    }

    /// Returns the number of (non-END) states.
    pub fn n_states(&self) -> usize {
        self.n_states
    }

    /// Returns `true` for a chain with an END state.
    pub fn is_finite(&self) -> bool {
        self.is_finite
    }

    /// Returns the initial distribution `q`.
    pub fn initial_prob(&self) -> &Array1<f64> {
        &self.initial
    }

    /// Returns the full transition matrix, including the END column if finite.
    pub fn transition_prob(&self) -> &Array2<f64> {
        &self.transition
    }

    /// Returns the square state-to-state block of the transition matrix.
    pub fn state_transitions(&self) -> ArrayView2<'_, f64> {
        self.transition.slice(s![.., ..self.n_states])
    }

    /// Returns the full transition row of state `from`.
    pub(crate) fn row(&self, from: usize) -> ArrayView1<'_, f64> {
        self.transition.row(from)
    }

    /// Returns the self-transition probabilities `a_ii`.
    pub fn self_transitions(&self) -> Array1<f64> {
        self.transition.diag().to_owned()
    }
}
