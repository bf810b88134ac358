//! Scaled backward algorithm and combined forward-backward pass.

use ndarray::{Array1, Array2, ArrayView1};
use tracing::debug;

use crate::chain::MarkovChain;
use crate::error::MarkovError;
use crate::forward::{emission, log_prob_from_scale};
use crate::observation::ObservationModel;

impl MarkovChain {
    /// Runs the scaled backward recursion over `obs`.
    ///
    /// `scale` must be the scale factors returned by [`MarkovChain::forward`]
    /// for the same chain, models and observations. The result satisfies
    /// `sum_i alpha_hat[i, t] * beta_hat[i, t] == scale[t]` for every `t`.
    ///
    /// # Errors
    ///
    /// - [`MarkovError::ModelCountMismatch`] if `models.len() != n_states`.
    /// - [`MarkovError::PreconditionViolation`] if `scale.len() != obs.len()`.
    pub fn backward<M: ObservationModel>(
        &self,
        models: &[M],
        scale: ArrayView1<'_, f64>,
        obs: &[M::Observation],
    ) -> Result<Array2<f64>, MarkovError> {
        self.check_models(models)?;
        if scale.len() != obs.len() {
            return Err(MarkovError::PreconditionViolation {
                scale_len: scale.len(),
                obs_len: obs.len(),
            });
        }

        let len = obs.len();
        let mut beta_hat = Array2::zeros((self.n_states(), len));
        let Some(last) = len.checked_sub(1) else {
            return Ok(beta_hat);
        };

        let a = self.state_transitions();
        beta_hat.column_mut(last).fill(scale[last]);
        for t in (0..last).rev() {
            // A[i, j] * b_j(x[t + 1]), broadcast along rows.
            let weighted = &a * &emission(models, &obs[t + 1]);
            let beta = weighted.dot(&beta_hat.column(t + 1)) * scale[t];
            beta_hat.column_mut(t).assign(&beta);
        }

        debug!(
            n_states = self.n_states(),
            len,
            "backward recursion complete"
        );
        Ok(beta_hat)
    }

    /// Runs [`MarkovChain::forward`] then [`MarkovChain::backward`] on `obs`.
    ///
    /// # Errors
    ///
    /// Any error of the two recursions.
    pub fn forward_backward<M: ObservationModel>(
        &self,
        models: &[M],
        obs: &[M::Observation],
    ) -> Result<ForwardBackward, MarkovError> {
        let (alpha_hat, scale) = self.forward(models, obs)?.into_parts();
        let beta_hat = self.backward(models, scale.view(), obs)?;
        Ok(ForwardBackward {
            alpha_hat,
            beta_hat,
            scale,
        })
    }
}

/// Scaled forward and backward variables of one observation sequence.
#[derive(Debug, Clone)]
pub struct ForwardBackward {
    alpha_hat: Array2<f64>,
    beta_hat: Array2<f64>,
    scale: Array1<f64>,
}

impl ForwardBackward {
    /// Scaled forward variables, `n_states x T`.
    pub fn alpha_hat(&self) -> &Array2<f64> {
        &self.alpha_hat
    }

    /// Scaled backward variables, `n_states x T`.
    pub fn beta_hat(&self) -> &Array2<f64> {
        &self.beta_hat
    }

    /// Forward scale factors.
    pub fn scale(&self) -> &Array1<f64> {
        &self.scale
    }

    /// Posterior state probabilities `P[S(t) = i | x]`, `n_states x T`.
    ///
    /// `gamma[i, t] = alpha_hat[i, t] * beta_hat[i, t] / c[t]`; each column
    /// sums to one.
    pub fn posterior(&self) -> Array2<f64> {
        &self.alpha_hat * &self.beta_hat / &self.scale
    }

    /// Log-likelihood of the observation sequence.
    pub fn log_prob(&self) -> f64 {
        log_prob_from_scale(&self.scale)
    }
}
