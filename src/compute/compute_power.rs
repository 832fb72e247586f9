use crate::advisory::{emit, low_confidence};
use crate::compute::types::{PowerReport, PowerSettings};
use crate::error::TtpowerErr;
use crate::groups::types::{Comparison, Group};
use crate::power::{
    analysis::PowerAnalysis, observed_power::observed_power, size_effect::size_effect_table,
};
use crate::simulation::sim_power::simulate_power_seeded;

/// Computes the observed power of a one- or two-sample t-test from summary
/// statistics, plus the minimum sample size and minimum detectable effect at
/// each of the standard power levels.
///
/// `group2` may be a second `Group`, a scalar comparison value, or omitted
/// (`Comparison::Zero`). When `settings.simulation` is set, the analytical
/// power is cross-checked by Monte-Carlo simulation.
///
/// Fails with `ZeroEffectSize` when the means coincide, since sample sizes are
/// undefined there; use `observed_power` directly for that case.
pub fn compute_power<C: Into<Comparison>>(
    group1: Group,
    group2: C,
    settings: &PowerSettings,
) -> Result<PowerReport, TtpowerErr> {
    let analysis = PowerAnalysis::new(group1, group2, settings.alpha, settings.tails)?;

    //----------------------------------------
    // Analytical estimate
    //----------------------------------------
    let power = observed_power(&analysis)?;
    let table = size_effect_table(&analysis)?;

    let advisories = low_confidence(&analysis, Some(&table));
    if settings.warn {
        emit(&advisories);
    }

    //----------------------------------------
    // Optional Monte-Carlo check
    //----------------------------------------
    let simulation = match &settings.simulation {
        Some(sim_settings) => Some(simulate_power_seeded(&analysis, sim_settings)?),
        None => None,
    };

    Ok(PowerReport {
        observed_power: power.observed_power,
        table,
        simulation,
        advisories,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::advisory::LowConfidence;
    use crate::error::{InvalidInputError, PowerComputeError};
    use crate::simulation::types::SimSettings;
    use approx::assert_abs_diff_eq;

    fn group(mean: f64, stddev: f64, n: usize) -> Group {
        Group::new(mean, stddev, n).expect("failed to construct group")
    }

    #[test]
    fn compute_power_scenario_1() {
        let report = compute_power(
            group(1.1, 0.1, 30),
            group(1.2, 0.3, 25),
            &PowerSettings::default(),
        )
        .expect("failed to compute power");
        assert_abs_diff_eq!(report.observed_power, 0.3375, epsilon = 1e-4);
        assert_eq!(report.table.min_sample_sizes, vec![58, 73, 98, 121, 170]);
        assert_eq!(report.table.test_description, "Two-sample t-test");
        assert!(report.simulation.is_none());
        assert!(report.advisories.is_empty());
    }

    #[test]
    fn compute_power_scenario_3() {
        let report = compute_power(
            group(1.1, 0.1, 98),
            group(1.2, 0.3, 98),
            &PowerSettings::default(),
        )
        .expect("failed to compute power");
        assert_abs_diff_eq!(report.observed_power, 0.8739, epsilon = 1e-4);
        assert_eq!(report.table.min_sample_sizes, vec![62, 79, 106, 130, 184]);
    }

    #[test]
    fn compute_power_omitted_group2() {
        let report = compute_power(
            group(0.5, 1.0, 20),
            Comparison::Zero,
            &PowerSettings::default(),
        )
        .expect("failed to compute power");
        assert_eq!(report.table.test_description, "One-sample t-test");
        assert!(report.observed_power > 0.5 && report.observed_power < 0.6);
    }

    #[test]
    fn compute_power_zero_effect() {
        let err = compute_power(group(1.2, 0.3, 25), 1.2, &PowerSettings::default()).unwrap_err();
        assert_eq!(
            err,
            TtpowerErr::PowerCompute(PowerComputeError::ZeroEffectSize)
        );
    }

    #[test]
    fn compute_power_bad_settings() {
        let settings = PowerSettings {
            tails: 0,
            ..PowerSettings::default()
        };
        assert_eq!(
            compute_power(group(1.1, 0.1, 30), 1.0, &settings).unwrap_err(),
            TtpowerErr::InvalidInput(InvalidInputError::BadTails(0))
        );
    }

    #[test]
    fn advisories_returned_without_logging() {
        let settings = PowerSettings {
            warn: false,
            ..PowerSettings::default()
        };
        let report = compute_power(group(1.5, 0.3, 6), group(1.2, 0.3, 25), &settings)
            .expect("failed to compute power");
        assert!(report.advisories.contains(&LowConfidence::SmallGroup {
            group: 1,
            sample_size: 6
        }));
    }

    #[test]
    fn compute_power_with_simulation() {
        let settings = PowerSettings {
            simulation: Some(SimSettings {
                outer_reps: 20,
                inner_reps: 100,
                seed: Some(24601),
            }),
            ..PowerSettings::default()
        };
        let report = compute_power(group(1.1, 0.1, 30), group(1.2, 0.3, 25), &settings)
            .expect("failed to compute power");
        let sim = report.simulation.expect("simulation was requested");
        assert_abs_diff_eq!(sim.mean_power, report.observed_power, epsilon = 0.05);
    }
}
