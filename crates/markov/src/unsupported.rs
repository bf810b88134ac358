//! Operations a complete HMM toolkit declares on its Markov chain but that
//! this crate does not provide. Each returns [`MarkovError::Unsupported`].

use ndarray::Array1;

use crate::chain::MarkovChain;
use crate::error::MarkovError;

fn unsupported<T>(operation: &'static str) -> Result<T, MarkovError> {
    Err(MarkovError::Unsupported { operation })
}

impl MarkovChain {
    /// Most likely state sequence for an observation sequence.
    pub fn viterbi(&self) -> Result<Vec<usize>, MarkovError> {
        unsupported("viterbi")
    }

    /// Stationary distribution of an infinite-duration chain.
    pub fn stationary_prob(&self) -> Result<Array1<f64>, MarkovError> {
        unsupported("stationary_prob")
    }

    /// Entropy rate of the state sequence.
    pub fn state_entropy_rate(&self) -> Result<f64, MarkovError> {
        unsupported("state_entropy_rate")
    }

    /// Copy of this chain started from its stationary distribution.
    pub fn set_stationary(&self) -> Result<MarkovChain, MarkovError> {
        unsupported("set_stationary")
    }

    /// Concatenation of two finite-duration chains.
    pub fn join(&self, _other: &MarkovChain) -> Result<MarkovChain, MarkovError> {
        unsupported("join")
    }

    /// Left-right chain with the given number of states and mean durations.
    pub fn init_left_right(_n_states: usize, _duration: f64) -> Result<MarkovChain, MarkovError> {
        unsupported("init_left_right")
    }

    /// Ergodic chain with the given number of states and mean durations.
    pub fn init_ergodic(_n_states: usize, _duration: f64) -> Result<MarkovChain, MarkovError> {
        unsupported("init_ergodic")
    }

    /// Finite-duration copy of an infinite-duration chain.
    pub fn finite_duration(&self) -> Result<MarkovChain, MarkovError> {
        unsupported("finite_duration")
    }

    /// Starts Baum-Welch accumulation.
    pub fn adapt_start(&self) -> Result<(), MarkovError> {
        unsupported("adapt_start")
    }

    /// Accumulates Baum-Welch statistics for one sequence.
    pub fn adapt_accum(&self) -> Result<(), MarkovError> {
        unsupported("adapt_accum")
    }

    /// Re-estimates the chain from accumulated statistics.
    pub fn adapt_set(&self) -> Result<MarkovChain, MarkovError> {
        unsupported("adapt_set")
    }
}
