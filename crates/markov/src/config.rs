//! Configuration for Markov chain construction.

use crate::error::MarkovError;

/// Default tolerance on row and initial-vector sums.
pub const DEFAULT_TOLERANCE: f64 = 1e-6;

/// Configuration for validating a Markov chain at construction time.
///
/// # Example
///
/// ```
/// use pattrec_markov::ChainConfig;
///
/// let config = ChainConfig::new().with_tolerance(1e-9);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug)]
pub struct ChainConfig {
    tolerance: f64,
}

impl ChainConfig {
    /// Creates a new configuration with defaults.
    ///
    /// Defaults: `tolerance = 1e-6`.
    pub fn new() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
        }
    }

    /// Sets the absolute tolerance allowed between a probability sum and 1.
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Returns the absolute sum tolerance.
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Validates this configuration.
    ///
    /// The tolerance must be finite and strictly positive.
    pub fn validate(&self) -> Result<(), MarkovError> {
        if !self.tolerance.is_finite() || self.tolerance <= 0.0 {
            return Err(MarkovError::InvalidConfig {
                reason: format!(
                    "tolerance must be finite and positive, got {}",
                    self.tolerance
                ),
            });
        }
        Ok(())
    }
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Checks that `probs` is a probability vector within `tolerance`.
///
/// `what` names the vector in the error message (e.g. `"row 2"`).
pub(crate) fn check_distribution(
    probs: impl IntoIterator<Item = f64>,
    what: &str,
    tolerance: f64,
) -> Result<(), MarkovError> {
    let mut sum = 0.0;
    for (j, p) in probs.into_iter().enumerate() {
        if !p.is_finite() {
            return Err(MarkovError::NotStochastic {
                reason: format!("{what}: entry {j} is not finite: {p}"),
            });
        }
        if !(0.0..=1.0).contains(&p) {
            return Err(MarkovError::NotStochastic {
                reason: format!("{what}: entry {j} = {p} is outside [0, 1]"),
            });
        }
        sum += p;
    }
    if (sum - 1.0).abs() > tolerance {
        return Err(MarkovError::NotStochastic {
            reason: format!("{what} sums to {sum}, expected ~1.0"),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cfg = ChainConfig::new();
        assert!((cfg.tolerance() - 1e-6).abs() < f64::EPSILON);
        assert!((ChainConfig::default().tolerance() - cfg.tolerance()).abs() < f64::EPSILON);
    }

    #[test]
    fn builder_sets_tolerance() {
        let cfg = ChainConfig::new().with_tolerance(1e-3);
        assert!((cfg.tolerance() - 1e-3).abs() < f64::EPSILON);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn validate_bad_tolerance() {
        for bad in [0.0, -1e-6, f64::NAN, f64::INFINITY] {
            assert!(
                matches!(
                    ChainConfig::new().with_tolerance(bad).validate(),
                    Err(MarkovError::InvalidConfig { .. })
                ),
                "tolerance {bad} should be rejected"
            );
        }
    }

    #[test]
    fn check_distribution_ok() {
        assert!(check_distribution([0.2, 0.3, 0.5], "q", 1e-6).is_ok());
        // Within tolerance
        assert!(check_distribution([0.5, 0.5 + 1e-8], "q", 1e-6).is_ok());
    }

    #[test]
    fn check_distribution_bad_sum() {
        let err = check_distribution([0.5, 0.3, 0.3], "row 0", 1e-6).unwrap_err();
        assert!(matches!(err, MarkovError::NotStochastic { .. }));
        assert!(err.to_string().contains("row 0 sums to"));
    }

    #[test]
    fn check_distribution_out_of_range() {
        assert!(check_distribution([1.5, -0.5], "q", 1e-6).is_err());
        assert!(check_distribution([f64::NAN, 1.0], "q", 1e-6).is_err());
    }
}
