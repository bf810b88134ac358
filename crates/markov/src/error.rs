//! Error types for the pattrec-markov crate.

/// Error type for all fallible operations in the pattrec-markov crate.
#[derive(Debug, Clone, thiserror::Error)]
pub enum MarkovError {
    /// Returned when the initial vector and transition matrix do not fit together.
    #[error("shape mismatch: {reason}")]
    ShapeMismatch {
        /// Description of the problem.
        reason: String,
    },

    /// Returned when a probability vector or matrix row is not a distribution.
    #[error("not stochastic: {reason}")]
    NotStochastic {
        /// Description of the problem.
        reason: String,
    },

    /// Returned when every state assigns zero likelihood to an observation.
    #[error("degenerate likelihood at t = {t}: observation has zero probability under every state")]
    DegenerateLikelihood {
        /// Zero-based time step of the offending observation.
        t: usize,
    },

    /// Returned when the scale factors do not belong to the observation sequence.
    #[error(
        "precondition violated: scale factors have length {scale_len}, observations have length {obs_len}"
    )]
    PreconditionViolation {
        /// Length of the scale-factor slice.
        scale_len: usize,
        /// Length of the observation slice.
        obs_len: usize,
    },

    /// Returned when the number of observation models differs from the number of states.
    #[error("observation model count mismatch: expected {expected}, got {got}")]
    ModelCountMismatch {
        /// Number of states in the chain.
        expected: usize,
        /// Number of models supplied.
        got: usize,
    },

    /// Returned when an observation model parameter is invalid.
    #[error("invalid parameter: {reason}")]
    InvalidParameter {
        /// Description of the problem.
        reason: String,
    },

    /// Returned when a chain configuration is invalid.
    #[error("invalid config: {reason}")]
    InvalidConfig {
        /// Description of the problem.
        reason: String,
    },

    /// Returned by operations the chain declares but does not provide.
    #[error("operation not supported: {operation}")]
    Unsupported {
        /// Name of the operation.
        operation: &'static str,
    },
}
