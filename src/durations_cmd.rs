//! Durations command: report total and per-state duration statistics.

use anyhow::Result;
use tracing::{info, info_span};

use crate::cli::DurationsArgs;
use crate::config::{self, PattrecConfig};
use crate::convert;
use crate::output::{DurationsReport, finite_or_none, rows, write_json};

/// Run the duration report.
pub fn run(args: DurationsArgs) -> Result<()> {
    let _cmd = info_span!("durations").entered();
    let config = config::load(&args.config)?;
    let report = durations(&config, args.tmax)?;
    write_json(&report, args.output.as_deref())
}

/// Computes duration statistics of the configured chain up to `tmax`.
pub fn durations(config: &PattrecConfig, tmax: Option<usize>) -> Result<DurationsReport> {
    let chain = convert::build_chain(&config.chain)?;
    let tmax = tmax.unwrap_or(config.durations.tmax);
    info!(
        n_states = chain.n_states(),
        is_finite = chain.is_finite(),
        tmax,
        "computing durations"
    );

    Ok(DurationsReport {
        tmax,
        is_finite: chain.is_finite(),
        prob_duration: chain.prob_duration(tmax).to_vec(),
        mean_state_duration: finite_or_none(&chain.mean_state_duration()),
        prob_state_duration: rows(&chain.prob_state_duration(tmax)),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn left_right_chain() {
        let cfg: PattrecConfig = toml::from_str(
            r#"
            [chain]
            initial = [1.0, 0.0]
            transition = [[0.5, 0.5, 0.0], [0.0, 0.0, 1.0]]

            [durations]
            tmax = 4
            "#,
        )
        .unwrap();
        let report = durations(&cfg, None).unwrap();
        assert_eq!(report.tmax, 4);
        assert!(report.is_finite);
        // D = 1 + geometric(0.5) stay in state 0 + exactly one step in state 1.
        let expected = [0.0, 0.5, 0.25, 0.125];
        for (p, e) in report.prob_duration.iter().zip(expected) {
            assert_abs_diff_eq!(*p, e, epsilon = 1e-12);
        }
        assert_eq!(report.mean_state_duration, vec![Some(2.0), Some(1.0)]);
        assert_abs_diff_eq!(report.prob_state_duration[1][0], 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(report.prob_state_duration[1][1], 0.0, epsilon = 1e-12);
    }

    #[test]
    fn absorbing_state_has_no_mean() {
        let cfg: PattrecConfig = toml::from_str(
            r#"
            [chain]
            initial = [1.0, 0.0]
            transition = [[0.9, 0.1], [0.0, 1.0]]
            "#,
        )
        .unwrap();
        let report = durations(&cfg, Some(3)).unwrap();
        assert!(!report.is_finite);
        assert_eq!(report.prob_duration, vec![0.0; 3]);
        assert_eq!(report.mean_state_duration[1], None);
        assert_eq!(report.prob_state_duration[1], vec![0.0; 3]);
    }
}
