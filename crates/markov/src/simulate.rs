//! Random state-sequence generation.

use tracing::trace;

use crate::chain::MarkovChain;
use crate::error::MarkovError;
use crate::observation::ObservationModel;
use crate::sampler::DiscreteSampler;
use crate::state::Step;

impl MarkovChain {
    /// Generates a random state sequence of at most `tmax` states.
    ///
    /// The END state is never part of the result. An infinite-duration chain
    /// always returns exactly `tmax` states; a finite-duration chain stops
    /// early when it draws END.
    pub fn rand<S: DiscreteSampler + ?Sized>(&self, tmax: usize, sampler: &mut S) -> Vec<usize> {
        let mut out = vec![0; tmax];
        let len = self.rand_into(sampler, &mut out);
        out.truncate(len);
        out
    }

    /// Generates a random state sequence into a pre-allocated buffer.
    ///
    /// At most `out.len()` states are drawn. Returns the number of states
    /// written; entries past that count are left untouched.
    pub fn rand_into<S: DiscreteSampler + ?Sized>(
        &self,
        sampler: &mut S,
        out: &mut [usize],
    ) -> usize {
        if out.is_empty() {
            return 0;
        }
        let n = self.n_states();

        let first = sampler.sample_index(self.initial_prob().view());
        let mut current = match Step::from_index(first, n) {
            Step::State(i) => i,
            Step::End => return 0,
        };
        out[0] = current;

        for t in 1..out.len() {
            match Step::from_index(sampler.sample_index(self.row(current)), n) {
                Step::State(next) => {
                    out[t] = next;
                    current = next;
                }
                Step::End => {
                    trace!(len = t, "chain reached END");
                    return t;
                }
            }
        }
        out.len()
    }

    /// Generates a state sequence and one observation per state.
    ///
    /// `models[j]` is the observation distribution of state `j`.
    ///
    /// # Errors
    ///
    /// Returns [`MarkovError::ModelCountMismatch`] if `models.len()` differs
    /// from the number of states.
    pub fn simulate<M, R>(
        &self,
        tmax: usize,
        models: &[M],
        rng: &mut R,
    ) -> Result<(Vec<usize>, Vec<M::Observation>), MarkovError>
    where
        M: ObservationModel,
        R: rand::Rng + ?Sized,
    {
        self.check_models(models)?;
        let states = self.rand(tmax, rng);
        let observations = states.iter().map(|&s| models[s].sample(rng)).collect();
        Ok((states, observations))
    }

    pub(crate) fn check_models<M>(&self, models: &[M]) -> Result<(), MarkovError> {
        if models.len() != self.n_states() {
            return Err(MarkovError::ModelCountMismatch {
                expected: self.n_states(),
                got: models.len(),
            });
        }
        Ok(())
    }
}
