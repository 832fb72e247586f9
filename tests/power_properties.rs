use approx::assert_abs_diff_eq;
use ttpower::compute::{
    Comparison, Group, POWER_LEVELS, PowerAnalysis, PowerSettings, SimSettings, compute_power,
    min_sample_sizes, observed_power, refine_sample_size, simulate_power,
};
use ttpower::error::{PowerComputeError, TtpowerErr};

use rand::{SeedableRng, rngs::StdRng};

fn group(mean: f64, stddev: f64, n: usize) -> Group {
    Group::new(mean, stddev, n).expect("failed to construct group")
}

#[test]
fn published_scenario_1() {
    let report = compute_power(
        group(1.1, 0.1, 30),
        group(1.2, 0.3, 25),
        &PowerSettings::default(),
    )
    .expect("failed to compute power");
    assert_abs_diff_eq!(report.observed_power, 0.3375, epsilon = 1e-4);
    assert_eq!(report.table.power_levels, POWER_LEVELS.to_vec());
    assert_eq!(report.table.min_sample_sizes, vec![58, 73, 98, 121, 170]);
    let expected = [0.1617, 0.1821, 0.2108, 0.2352, 0.2832];
    for (es, target) in report.table.min_effect_sizes.iter().zip(expected) {
        assert_abs_diff_eq!(*es, target, epsilon = 1e-4);
    }
}

#[test]
fn published_scenario_2() {
    // Effect raised to the detectable effect at 90% power
    let report = compute_power(
        group(1.2 + 0.2108, 0.1, 30),
        group(1.2, 0.3, 25),
        &PowerSettings::default(),
    )
    .expect("failed to compute power");
    assert_abs_diff_eq!(report.observed_power, 0.9004, epsilon = 1e-4);
}

#[test]
fn published_scenario_3() {
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
fn power_stays_in_unit_interval() {
    for alpha in [0.001, 0.05, 0.5] {
        for tails in [1, 2] {
            for m1 in [-3.0, 0.9, 1.19, 1.2, 1.21, 4.0] {
                let a = PowerAnalysis::new(group(m1, 0.4, 15), group(1.2, 0.3, 11), alpha, tails)
                    .expect("failed to construct analysis");
                let p = observed_power(&a).unwrap().observed_power;
                assert!((0. ..=1.).contains(&p), "power {p} out of range");
            }
        }
    }
}

#[test]
fn table_non_decreasing_in_power() {
    for (g1, g2) in [
        (group(1.1, 0.1, 30), Comparison::Group(group(1.2, 0.3, 25))),
        (group(3.0, 2.0, 8), Comparison::Value(2.5)),
        (group(-0.4, 1.5, 50), Comparison::Zero),
    ] {
        let report = compute_power(g1, g2, &PowerSettings::default())
            .expect("failed to compute power");
        let table = report.table;
        assert!(table.min_sample_sizes.windows(2).all(|w| w[0] <= w[1]));
        assert!(table.min_effect_sizes.windows(2).all(|w| w[0] <= w[1]));
    }
}

#[test]
fn swapping_groups_keeps_two_tailed_power() {
    let forward = compute_power(
        group(1.1, 0.1, 30),
        group(1.2, 0.3, 25),
        &PowerSettings::default(),
    )
    .unwrap();
    let backward = compute_power(
        group(1.2, 0.3, 25),
        group(1.1, 0.1, 30),
        &PowerSettings::default(),
    )
    .unwrap();
    assert_abs_diff_eq!(forward.observed_power, backward.observed_power, epsilon = 1e-12);
}

#[test]
fn zero_effect_is_distinct_error() {
    let err = compute_power(group(1.2, 0.3, 25), 1.2, &PowerSettings::default()).unwrap_err();
    assert_eq!(
        err,
        TtpowerErr::PowerCompute(PowerComputeError::ZeroEffectSize)
    );

    // Power itself is still defined and sits at the false-positive rate
    let a = PowerAnalysis::new(group(1.2, 0.3, 25), group(1.2, 0.1, 30), 0.05, 2)
        .expect("failed to construct analysis");
    assert_abs_diff_eq!(
        observed_power(&a).unwrap().observed_power,
        0.05,
        epsilon = 1e-6
    );
    assert!(min_sample_sizes(&a).is_err());
}

#[test]
fn simulation_within_tolerance_of_analytical() {
    let settings = PowerSettings {
        simulation: Some(SimSettings::seeded(20240101)),
        ..PowerSettings::default()
    };
    let report = compute_power(group(1.1, 0.1, 30), group(1.2, 0.3, 25), &settings)
        .expect("failed to compute power");
    let sim = report.simulation.expect("simulation was requested");
    assert_abs_diff_eq!(sim.mean_power, report.observed_power, epsilon = 0.05);
    assert!(sim.iqr_low <= sim.iqr_high);
}

#[test]
fn caller_supplied_rng() {
    let a = PowerAnalysis::new(group(1.1, 0.1, 30), group(1.2, 0.3, 25), 0.05, 2)
        .expect("failed to construct analysis");
    let settings = SimSettings {
        outer_reps: 10,
        inner_reps: 50,
        seed: None,
    };
    let first = simulate_power(&a, &settings, &mut StdRng::seed_from_u64(99)).unwrap();
    let second = simulate_power(&a, &settings, &mut StdRng::seed_from_u64(99)).unwrap();
    assert_eq!(first, second);
}

#[test]
fn refinement_never_below_normal_approximation() {
    let a = PowerAnalysis::new(group(1.1, 0.1, 30), group(1.2, 0.3, 25), 0.05, 2)
        .expect("failed to construct analysis");
    let approx_sizes = min_sample_sizes(&a).unwrap();
    let refined = refine_sample_size(&a, 0.9, 10_000).unwrap();
    assert_eq!(refined, 107);
    assert!(refined >= approx_sizes[2]);
}
