use crate::distribution::quantiles::t_quantile;
use crate::error::TtpowerErr;
use crate::groups::error::InvalidInputError;
use crate::hypothesis::types::TestMode;
use crate::power::{
    analysis::{PowerAnalysis, welch_df},
    error::PowerComputeError,
    observed_power::t_test_power,
};

/// t-based power at the observed effect and group variances if every group
/// had `n` observations. A scalar comparison keeps its zero variance.
fn power_at_size(analysis: &PowerAnalysis, n: usize) -> Result<f64, TtpowerErr> {
    let n_f = n as f64;
    let var1 = analysis.group1.variance();
    let (var2, df) = match analysis.config.mode {
        TestMode::OneSample => (0., n_f - 1.),
        TestMode::TwoSample => {
            let var2 = analysis.group2.variance();
            (var2, welch_df(var1, n_f, var2, n_f).round())
        }
    };
    let std_err = ((var1 + var2) / n_f).sqrt();
    let t_crit = t_quantile(1. - analysis.config.tail_alpha(), df)?;
    t_test_power(
        t_crit,
        df,
        analysis.effect_size / std_err,
        analysis.config.tails,
    )
}

/// Smallest per-group sample size whose noncentral-t power at the observed
/// effect reaches `target_power`, searched over `[2, max_n]`.
///
/// This is an optional alternative to the normal approximation used for the
/// size/effect table; it never feeds back into that table.
pub fn refine_sample_size(
    analysis: &PowerAnalysis,
    target_power: f64,
    max_n: usize,
) -> Result<usize, TtpowerErr> {
    if !(target_power > 0. && target_power < 1.) {
        return Err(InvalidInputError::BadPowerLevel(target_power).into());
    }
    if analysis.effect_size == 0. {
        return Err(PowerComputeError::ZeroEffectSize.into());
    }
    if analysis.config.mode == TestMode::OneSample && analysis.group1.stddev == 0. {
        return Err(InvalidInputError::ZeroStandardError.into());
    }
    let did_not_converge = PowerComputeError::RefinementDidNotConverge {
        target_power,
        max_n,
    };
    if max_n < 2 || power_at_size(analysis, max_n)? < target_power {
        return Err(did_not_converge.into());
    }

    // Power grows with n, so bisect for the first size reaching the target
    let mut lower = 2;
    let mut upper = max_n;
    while lower < upper {
        let mid = lower + (upper - lower) / 2;
        if power_at_size(analysis, mid)? >= target_power {
            upper = mid;
        } else {
            lower = mid + 1;
        }
    }
    tracing::debug!(target_power, n = lower, "refined sample size");
    Ok(lower)
}
