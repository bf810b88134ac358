//! Duration statistics of a Markov chain.

use ndarray::{Array1, Array2};

use crate::chain::MarkovChain;

impl MarkovChain {
    /// Probability mass of the total sequence duration, `P[D = t]` for
    /// `t = 1..=tmax` (returned at zero-based index `t - 1`).
    ///
    /// Only a finite-duration chain terminates, so an infinite-duration chain
    /// returns all zeros.
    pub fn prob_duration(&self, tmax: usize) -> Array1<f64> {
        let mut p_d = Array1::zeros(tmax);
        if !self.is_finite() {
            return p_d;
        }

        let a_t = self.state_transitions().reversed_axes();
        // P[S(t) = j and no END yet] minus the mass still alive after one more step.
        let mut p_st = self.initial_prob() - &a_t.dot(self.initial_prob());
        for t in 0..tmax {
            p_d[t] = p_st.sum();
            p_st = a_t.dot(&p_st);
        }
        p_d
    }

    /// Probability mass of single-state durations, `P[D_i = t]` for
    /// `t = 1..=tmax`, as an `n_states x tmax` matrix.
    ///
    /// Computed in log space as `exp((t - 1) ln a_ii + ln(1 - a_ii))`.
    /// An absorbing state (`a_ii = 1`) gives `ln 0 = -inf` and so zero mass
    /// everywhere. For `t = 1` the first term is dropped so that `a_ii = 0`
    /// yields exactly 1 rather than NaN.
    pub fn prob_state_duration(&self, tmax: usize) -> Array2<f64> {
        let a_ii = self.self_transitions();
        Array2::from_shape_fn((self.n_states(), tmax), |(i, t)| {
            let a = a_ii[i];
            let log_stay = if t == 0 { 0.0 } else { t as f64 * a.ln() };
            (log_stay + (1.0 - a).ln()).exp()
        })
    }

    /// Expected number of consecutive steps spent in each state, `1 / (1 - a_ii)`.
    ///
    /// An absorbing state has infinite mean duration.
    pub fn mean_state_duration(&self) -> Array1<f64> {
        self.self_transitions().mapv(|a| 1.0 / (1.0 - a))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ndarray::array;

    #[test]
    fn infinite_chain_duration_is_zero() {
        let mc = MarkovChain::new(array![1.0, 0.0], array![[0.9, 0.1], [0.1, 0.9]]).unwrap();
        let p = mc.prob_duration(25);
        assert_eq!(p.len(), 25);
        assert!(p.iter().all(|&v| v == 0.0));
    }

    #[test]
    fn single_state_finite_is_geometric() {
        // Stay with 0.75, end with 0.25.
        let mc = MarkovChain::new(array![1.0], array![[0.75, 0.25]]).unwrap();
        let p = mc.prob_duration(4);
        assert_abs_diff_eq!(p[0], 0.25, epsilon = 1e-12);
        assert_abs_diff_eq!(p[1], 0.75 * 0.25, epsilon = 1e-12);
        assert_abs_diff_eq!(p[2], 0.75 * 0.75 * 0.25, epsilon = 1e-12);
        assert_abs_diff_eq!(p[3], 0.75_f64.powi(3) * 0.25, epsilon = 1e-12);
    }

    #[test]
    fn left_right_duration() {
        // 0 -> 1 -> END, deterministic: duration is exactly 2.
        let mc = MarkovChain::new(
            array![1.0, 0.0],
            array![[0.0, 1.0, 0.0], [0.0, 0.0, 1.0]],
        )
        .unwrap();
        let p = mc.prob_duration(4);
        assert_abs_diff_eq!(p[0], 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(p[1], 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(p[2], 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(p[3], 0.0, epsilon = 1e-12);
    }

    #[test]
    fn finite_duration_mass_sums_to_one() {
        let mc = MarkovChain::new(
            array![0.6, 0.4],
            array![[0.7, 0.2, 0.1], [0.3, 0.5, 0.2]],
        )
        .unwrap();
        let total = mc.prob_duration(500).sum();
        assert_abs_diff_eq!(total, 1.0, epsilon = 1e-9);
    }

    #[test]
    fn zero_tmax() {
        let mc = MarkovChain::new(array![1.0], array![[0.5, 0.5]]).unwrap();
        assert!(mc.prob_duration(0).is_empty());
        assert_eq!(mc.prob_state_duration(0).dim(), (1, 0));
    }

    #[test]
    fn state_duration_geometric() {
        let mc = MarkovChain::new(array![1.0], array![[0.5, 0.5]]).unwrap();
        let p = mc.prob_state_duration(3);
        assert_eq!(p.dim(), (1, 3));
        assert_abs_diff_eq!(p[[0, 0]], 0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(p[[0, 1]], 0.25, epsilon = 1e-12);
        assert_abs_diff_eq!(p[[0, 2]], 0.125, epsilon = 1e-12);
    }

    #[test]
    fn state_duration_long_horizon_no_underflow_to_nan() {
        let mc = MarkovChain::new(array![1.0, 0.0], array![[0.999, 0.001], [0.5, 0.5]]).unwrap();
        let p = mc.prob_state_duration(5000);
        assert!(p.iter().all(|v| v.is_finite() && *v >= 0.0));
        // Mass of state 0 over the horizon: 1 - 0.999^5000.
        let row0: f64 = p.row(0).sum();
        assert_abs_diff_eq!(row0, 1.0 - 0.999_f64.powi(5000), epsilon = 1e-9);
    }

    #[test]
    fn absorbing_state_duration() {
        let mc = MarkovChain::new(array![0.5, 0.5], array![[1.0, 0.0], [0.0, 1.0]]).unwrap();
        let p = mc.prob_state_duration(4);
        assert!(p.iter().all(|&v| v == 0.0));

        let mean = mc.mean_state_duration();
        assert!(mean.iter().all(|v| v.is_infinite() && *v > 0.0));
    }

    #[test]
    fn never_staying_state_duration() {
        let mc = MarkovChain::new(array![1.0, 0.0], array![[0.0, 1.0], [1.0, 0.0]]).unwrap();
        let p = mc.prob_state_duration(3);
        assert_abs_diff_eq!(p[[0, 0]], 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(p[[0, 1]], 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(p[[0, 2]], 0.0, epsilon = 1e-12);
    }

    #[test]
    fn mean_state_duration_values() {
        let mc = MarkovChain::new(array![1.0, 0.0], array![[0.5, 0.5], [0.1, 0.9]]).unwrap();
        let mean = mc.mean_state_duration();
        assert_abs_diff_eq!(mean[0], 2.0, epsilon = 1e-9);
        assert_abs_diff_eq!(mean[1], 10.0, epsilon = 1e-9);
    }

    #[test]
    fn mean_state_duration_finite_chain() {
        let mc = MarkovChain::new(array![1.0], array![[0.8, 0.2]]).unwrap();
        assert_abs_diff_eq!(mc.mean_state_duration()[0], 5.0, epsilon = 1e-9);
    }
}
