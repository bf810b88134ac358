//! Categorical sampling primitive.

use ndarray::ArrayView1;

/// Draws an outcome index from a discrete probability vector.
///
/// Index `i` is returned with probability `probs[i]`. The vector is assumed
/// to be a valid distribution; chain construction guarantees this for every
/// vector the chain passes in.
pub trait DiscreteSampler {
    /// Draws one index from `probs`.
    fn sample_index(&mut self, probs: ArrayView1<'_, f64>) -> usize;
}

/// Every random number generator samples by walking the cumulative distribution.
impl<R: rand::Rng + ?Sized> DiscreteSampler for R {
    fn sample_index(&mut self, probs: ArrayView1<'_, f64>) -> usize {
        let u: f64 = self.random();
        sample_cdf(probs, u)
    }
}

/// Returns the first index whose cumulative probability exceeds `u`.
///
/// Falls back to the last index with positive mass if rounding prevents a
/// match, so a zero-probability outcome (e.g. an END column of 0) is never
/// returned by accident.
pub(crate) fn sample_cdf(probs: ArrayView1<'_, f64>, u: f64) -> usize {
    let mut cumulative = 0.0;
    for (i, &p) in probs.iter().enumerate() {
        cumulative += p;
        if u < cumulative {
            return i;
        }
    }
    probs
        .iter()
        .rposition(|&p| p > 0.0)
        .unwrap_or(probs.len().saturating_sub(1))
}
