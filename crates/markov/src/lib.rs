//! First-order discrete Markov chain for Hidden Markov Models.
//!
//! This crate models the hidden-state backbone of an HMM: an initial
//! distribution and a transition matrix, either square (infinite duration)
//! or with one extra END column (finite duration).
//!
//! # Operations
//!
//! ```text
//!  ┌──────────────┐     ┌────────────────┐     ┌──────────────────┐
//!  │  duration     │     │   simulate     │     │ forward/backward │
//!  │  (P[D = t])   │     │ (draw states)  │     │ (scaled, c[t])   │
//!  └──────────────┘     └────────────────┘     └──────────────────┘
//! ```
//!
//! # Quick start
//!
//! ```rust
//! use ndarray::array;
//! use pattrec_markov::{DiscreteObservation, MarkovChain};
//!
//! let chain = MarkovChain::new(array![1.0, 0.0], array![[0.9, 0.1], [0.1, 0.9]]).unwrap();
//! let models = vec![
//!     DiscreteObservation::new(vec![0.8, 0.2]).unwrap(),
//!     DiscreteObservation::new(vec![0.3, 0.7]).unwrap(),
//! ];
//!
//! let fb = chain.forward_backward(&models, &[0, 1, 1]).unwrap();
//! assert!(fb.log_prob() < 0.0);
//! ```

pub mod backward;
pub mod chain;
pub mod config;
pub mod duration;
pub mod error;
pub mod forward;
pub mod observation;
pub mod sampler;
pub mod simulate;
pub mod state;
pub mod unsupported;

pub use backward::ForwardBackward;
pub use chain::MarkovChain;
pub use config::ChainConfig;
pub use error::MarkovError;
pub use forward::ForwardResult;
pub use observation::{DiscreteObservation, GaussianObservation, ObservationModel};
pub use sampler::DiscreteSampler;
pub use state::Step;
