//! Per-state observation distributions.
//!
//! The forward and backward recursions only need "probability of
//! observation `x` under state `j`". Any type implementing
//! [`ObservationModel`] can supply it; two common families ship here.

use ndarray::Array1;
use rand_distr::Distribution;
use statrs::distribution::Continuous;

use crate::config::{DEFAULT_TOLERANCE, check_distribution};
use crate::error::MarkovError;
use crate::sampler::sample_cdf;

/// A distribution over observations attached to one hidden state.
pub trait ObservationModel {
    /// The observation type scored by this model.
    type Observation;

    /// Probability mass or density of `x` under this model. Never negative.
    fn prob(&self, x: &Self::Observation) -> f64;

    /// Draws one observation.
    fn sample<R: rand::Rng + ?Sized>(&self, rng: &mut R) -> Self::Observation;
}

/// Categorical distribution over the symbols `0..n_symbols`.
#[derive(Debug, Clone)]
pub struct DiscreteObservation {
    probs: Array1<f64>,
}

impl DiscreteObservation {
    /// Creates a categorical model from symbol probabilities.
    ///
    /// # Errors
    ///
    /// Returns [`MarkovError::InvalidParameter`] for an empty vector and
    /// [`MarkovError::NotStochastic`] if `probs` is not a distribution.
    pub fn new(probs: Vec<f64>) -> Result<Self, MarkovError> {
        if probs.is_empty() {
            return Err(MarkovError::InvalidParameter {
                reason: "discrete observation model needs at least one symbol".to_string(),
            });
        }
        check_distribution(
            probs.iter().copied(),
            "symbol probabilities",
            DEFAULT_TOLERANCE,
        )?;
        Ok(Self {
            probs: Array1::from(probs),
        })
    }

    /// Returns the number of symbols.
    pub fn n_symbols(&self) -> usize {
        self.probs.len()
    }

    /// Returns the symbol probabilities.
    pub fn probs(&self) -> &Array1<f64> {
        &self.probs
    }
}

impl ObservationModel for DiscreteObservation {
    type Observation = usize;

    /// Symbols outside `0..n_symbols` have probability zero.
    fn prob(&self, x: &usize) -> f64 {
        self.probs.get(*x).copied().unwrap_or(0.0)
    }

    fn sample<R: rand::Rng + ?Sized>(&self, rng: &mut R) -> usize {
        sample_cdf(self.probs.view(), rng.random())
    }
}

/// Scalar normal distribution.
#[derive(Debug, Clone, Copy)]
pub struct GaussianObservation {
    mean: f64,
    std_dev: f64,
    density: statrs::distribution::Normal,
    sampler: rand_distr::Normal<f64>,
}

impl GaussianObservation {
    /// Creates a normal model.
    ///
    /// # Errors
    ///
    /// Returns [`MarkovError::InvalidParameter`] unless `mean` is finite and
    /// `std_dev` is finite and strictly positive.
    pub fn new(mean: f64, std_dev: f64) -> Result<Self, MarkovError> {
        if !mean.is_finite() {
            return Err(MarkovError::InvalidParameter {
                reason: format!("mean must be finite, got {mean}"),
            });
        }
        if !std_dev.is_finite() || std_dev <= 0.0 {
            return Err(MarkovError::InvalidParameter {
                reason: format!("std_dev must be finite and positive, got {std_dev}"),
            });
        }
        let density = statrs::distribution::Normal::new(mean, std_dev).map_err(|e| {
            MarkovError::InvalidParameter {
                reason: e.to_string(),
            }
        })?;
        let sampler =
            rand_distr::Normal::new(mean, std_dev).map_err(|e| MarkovError::InvalidParameter {
                reason: e.to_string(),
            })?;
        Ok(Self {
            mean,
            std_dev,
            density,
            sampler,
        })
    }

    /// Returns the mean.
    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// Returns the standard deviation.
    pub fn std_dev(&self) -> f64 {
        self.std_dev
    }
}

impl ObservationModel for GaussianObservation {
    type Observation = f64;

    fn prob(&self, x: &f64) -> f64 {
        self.density.pdf(*x)
    }

    fn sample<R: rand::Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        self.sampler.sample(rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn discrete_prob_lookup() {
        let m = DiscreteObservation::new(vec![0.1, 0.6, 0.3]).unwrap();
        assert_eq!(m.n_symbols(), 3);
        assert_abs_diff_eq!(m.prob(&0), 0.1, epsilon = 1e-12);
        assert_abs_diff_eq!(m.prob(&1), 0.6, epsilon = 1e-12);
        assert_abs_diff_eq!(m.prob(&2), 0.3, epsilon = 1e-12);
        // Unknown symbol
        assert_abs_diff_eq!(m.prob(&7), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn discrete_rejects_bad_probs() {
        assert!(matches!(
            DiscreteObservation::new(vec![]),
            Err(MarkovError::InvalidParameter { .. })
        ));
        assert!(matches!(
            DiscreteObservation::new(vec![0.5, 0.6]),
            Err(MarkovError::NotStochastic { .. })
        ));
        assert!(matches!(
            DiscreteObservation::new(vec![-0.5, 1.5]),
            Err(MarkovError::NotStochastic { .. })
        ));
    }

    #[test]
    fn discrete_sample_frequencies() {
        let m = DiscreteObservation::new(vec![0.2, 0.8]).unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        let n = 10_000;
        let ones = (0..n).filter(|_| m.sample(&mut rng) == 1).count();
        let f = ones as f64 / n as f64;
        assert!((f - 0.8).abs() < 0.03, "symbol 1 frequency: {f}, expected ~0.8");
    }

    #[test]
    fn gaussian_pdf() {
        let m = GaussianObservation::new(0.0, 1.0).unwrap();
        let peak = 1.0 / (2.0 * std::f64::consts::PI).sqrt();
        assert_abs_diff_eq!(m.prob(&0.0), peak, epsilon = 1e-12);
        assert_abs_diff_eq!(m.prob(&1.0), peak * (-0.5_f64).exp(), epsilon = 1e-12);
        assert!(m.prob(&50.0) >= 0.0);
    }

    #[test]
    fn gaussian_rejects_bad_params() {
        assert!(GaussianObservation::new(0.0, 0.0).is_err());
        assert!(GaussianObservation::new(0.0, -1.0).is_err());
        assert!(GaussianObservation::new(f64::NAN, 1.0).is_err());
        assert!(GaussianObservation::new(0.0, f64::INFINITY).is_err());
    }

    #[test]
    fn gaussian_sample_moments() {
        let m = GaussianObservation::new(3.0, 2.0).unwrap();
        let mut rng = StdRng::seed_from_u64(11);
        let n = 20_000;
        let xs: Vec<f64> = (0..n).map(|_| m.sample(&mut rng)).collect();
        let mean = xs.iter().sum::<f64>() / n as f64;
        let var = xs.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (n - 1) as f64;
        assert!((mean - 3.0).abs() < 0.1, "sample mean {mean}");
        assert!((var.sqrt() - 2.0).abs() < 0.1, "sample std {}", var.sqrt());
    }
}
