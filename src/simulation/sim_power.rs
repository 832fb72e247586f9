use rand::{Rng, RngCore, SeedableRng, distributions::Distribution, rngs};
use statrs::distribution::Normal;
use statrs::statistics::{Data, OrderStatistics, Statistics};

use crate::distribution::error::DistributionErr;
use crate::error::TtpowerErr;
use crate::groups::{error::InvalidInputError, types::Group};
use crate::hypothesis::{
    test_configuration::alternative,
    types::{Alternative, TestMode},
};
use crate::power::analysis::PowerAnalysis;
use crate::simulation::{
    t_test::{one_sample_t_test, welch_t_test},
    types::{SimSettings, SimulationResult},
};

/// Draws for one group; a group with no spread always yields its mean
enum GroupSampler {
    Constant(f64),
    Normal(Normal),
}

impl GroupSampler {
    fn new(group: &Group) -> Result<GroupSampler, TtpowerErr> {
        if group.stddev == 0. {
            return Ok(GroupSampler::Constant(group.mean));
        }
        let normal = Normal::new(group.mean, group.stddev)
            .map_err(|e| DistributionErr::BadParameters(e.to_string()))?;
        Ok(GroupSampler::Normal(normal))
    }

    fn fill<R: Rng + ?Sized>(&self, buf: &mut Vec<f64>, n: usize, rng: &mut R) {
        buf.clear();
        match self {
            GroupSampler::Constant(v) => buf.extend(std::iter::repeat_n(*v, n)),
            GroupSampler::Normal(normal) => buf.extend((0..n).map(|_| normal.sample(rng))),
        }
    }
}

/// Fraction of `inner_reps` simulated tests rejecting at `alpha`
fn rejection_rate<R: Rng + ?Sized>(
    analysis: &PowerAnalysis,
    samplers: &(GroupSampler, GroupSampler),
    alternative: Alternative,
    inner_reps: usize,
    rng: &mut R,
) -> Result<f64, TtpowerErr> {
    let (n1, n2) = (analysis.group1.sample_size, analysis.group2.sample_size);
    let mut sample1 = Vec::with_capacity(n1);
    let mut sample2 = Vec::with_capacity(n2);
    let mut rejections = 0;
    for _ in 0..inner_reps {
        samplers.0.fill(&mut sample1, n1, rng);
        let p = match analysis.config.mode {
            TestMode::OneSample => {
                one_sample_t_test(&sample1, analysis.group2.mean, alternative)?
            }
            TestMode::TwoSample => {
                samplers.1.fill(&mut sample2, n2, rng);
                welch_t_test(&sample1, &sample2, alternative)?
            }
        };
        if p < analysis.config.alpha {
            rejections += 1;
        }
    }
    Ok(rejections as f64 / inner_reps as f64)
}

/// Estimates power empirically by repeatedly drawing both groups from
/// normal distributions with the given summary statistics and running the
/// configured test. Each repetition gets its own generator seeded from
/// `rng`, so repetitions are independent of one another.
pub fn simulate_power<R: Rng + ?Sized>(
    analysis: &PowerAnalysis,
    settings: &SimSettings,
    rng: &mut R,
) -> Result<SimulationResult, TtpowerErr> {
    if settings.outer_reps == 0 || settings.inner_reps == 0 {
        return Err(InvalidInputError::BadIterationCount {
            outer: settings.outer_reps,
            inner: settings.inner_reps,
        }
        .into());
    }
    let samplers = (
        GroupSampler::new(&analysis.group1)?,
        GroupSampler::new(&analysis.group2)?,
    );
    let alternative = alternative(
        &analysis.config,
        analysis.group1.mean,
        analysis.group2.mean,
    );
    tracing::debug!(
        outer_reps = settings.outer_reps,
        inner_reps = settings.inner_reps,
        ?alternative,
        "starting power simulation"
    );

    let powers = (0..settings.outer_reps)
        .map(|rep| {
            let mut rep_rng = rngs::StdRng::seed_from_u64(rng.next_u64());
            let power = rejection_rate(
                analysis,
                &samplers,
                alternative,
                settings.inner_reps,
                &mut rep_rng,
            )?;
            tracing::trace!(rep, power, "finished repetition");
            Ok(power)
        })
        .collect::<Result<Vec<f64>, TtpowerErr>>()?;

    let mean_power = powers.iter().mean();
    let mut data = Data::new(powers);
    let result = SimulationResult {
        mean_power,
        iqr_low: data.lower_quartile(),
        iqr_high: data.upper_quartile(),
    };
    tracing::debug!(
        mean_power = result.mean_power,
        iqr_low = result.iqr_low,
        iqr_high = result.iqr_high,
        "finished power simulation"
    );
    Ok(result)
}

/// Runs `simulate_power` with a generator seeded from `settings.seed`, or
/// from OS entropy when no seed is set.
pub fn simulate_power_seeded(
    analysis: &PowerAnalysis,
    settings: &SimSettings,
) -> Result<SimulationResult, TtpowerErr> {
    let mut master_rng = match settings.seed {
        Some(seed) => rngs::StdRng::seed_from_u64(seed),
        None => rngs::StdRng::from_entropy(),
    };
    simulate_power(analysis, settings, &mut master_rng)
}
