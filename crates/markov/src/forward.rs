//! Scaled forward algorithm.
//!
//! At every step the forward variables are renormalised to sum to one and the
//! normalising factor `c[t]` is kept, so that
//!
//! ```text
//! P(x[0..T]) = 1 / (c[0] * c[1] * ... * c[T-1])
//! ```
//!
//! without the raw forward variables ever underflowing.

use ndarray::{Array1, Array2};
use tracing::{debug, trace};

use crate::chain::MarkovChain;
use crate::error::MarkovError;
use crate::observation::ObservationModel;

/// Output of [`MarkovChain::forward`].
#[derive(Debug, Clone)]
pub struct ForwardResult {
    alpha_hat: Array2<f64>,
    scale: Array1<f64>,
}

impl ForwardResult {
    /// Scaled forward variables, `n_states x T`. Each column sums to one.
    pub fn alpha_hat(&self) -> &Array2<f64> {
        &self.alpha_hat
    }

    /// Scale factors `c[t]`, the reciprocal of each column's sum before rescaling.
    pub fn scale(&self) -> &Array1<f64> {
        &self.scale
    }

    /// Log-likelihood of the observation sequence, `-sum(ln c[t])`.
    pub fn log_prob(&self) -> f64 {
        log_prob_from_scale(&self.scale)
    }

    /// Splits the result into `(alpha_hat, scale)`.
    pub fn into_parts(self) -> (Array2<f64>, Array1<f64>) {
        (self.alpha_hat, self.scale)
    }
}

pub(crate) fn log_prob_from_scale(scale: &Array1<f64>) -> f64 {
    -scale.mapv(f64::ln).sum()
}

/// Evaluates every state's model on one observation.
pub(crate) fn emission<M: ObservationModel>(models: &[M], x: &M::Observation) -> Array1<f64> {
    models.iter().map(|m| m.prob(x)).collect()
}

impl MarkovChain {
    /// Runs the scaled forward recursion over `obs`.
    ///
    /// `models[j]` scores observations in state `j`. For a finite-duration
    /// chain only the state-to-state block of the transition matrix is used,
    /// so the result describes the sequence given that END has not yet been
    /// reached. An empty `obs` gives an `n_states x 0` result.
    ///
    /// # Errors
    ///
    /// - [`MarkovError::ModelCountMismatch`] if `models.len() != n_states`.
    /// - [`MarkovError::DegenerateLikelihood`] if some observation has zero
    ///   (or non-finite) total probability. No partial result is returned.
    pub fn forward<M: ObservationModel>(
        &self,
        models: &[M],
        obs: &[M::Observation],
    ) -> Result<ForwardResult, MarkovError> {
        self.check_models(models)?;
        let a = self.state_transitions();
        let mut alpha_hat = Array2::zeros((self.n_states(), obs.len()));
        let mut scale = Array1::zeros(obs.len());

        for (t, x) in obs.iter().enumerate() {
            let b = emission(models, x);
            let mut alpha = if t == 0 {
                self.initial_prob() * &b
            } else {
                alpha_hat.column(t - 1).dot(&a) * &b
            };

            let total = alpha.sum();
            let c = 1.0 / total;
            if !c.is_finite() || c <= 0.0 {
                return Err(MarkovError::DegenerateLikelihood { t });
            }
            alpha *= c;
            alpha_hat.column_mut(t).assign(&alpha);
            scale[t] = c;
            trace!(t, c, "forward step");
        }

        debug!(
            n_states = self.n_states(),
            len = obs.len(),
            "forward recursion complete"
        );
        Ok(ForwardResult { alpha_hat, scale })
    }

    /// Log-likelihood of `obs`, computed from the forward scale factors.
    ///
    /// An empty sequence has log-likelihood 0.
    ///
    /// # Errors
    ///
    /// Same as [`MarkovChain::forward`].
    pub fn log_prob<M: ObservationModel>(
        &self,
        models: &[M],
        obs: &[M::Observation],
    ) -> Result<f64, MarkovError> {
        Ok(self.forward(models, obs)?.log_prob())
    }
}
