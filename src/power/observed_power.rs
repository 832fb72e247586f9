use crate::distribution::noncentral_t::noncentral_t_cdf;
use crate::error::TtpowerErr;
use crate::hypothesis::types::Tails;
use crate::power::{analysis::PowerAnalysis, types::PowerResult};

/// Power of a t-test with critical value `t_crit` when the test statistic
/// follows a noncentral t with noncentrality `|t|`.
pub fn t_test_power(t_crit: f64, df: f64, t: f64, tails: Tails) -> Result<f64, TtpowerErr> {
    let noncentrality = t.abs();
    let power = match tails {
        Tails::One => 1. - noncentral_t_cdf(t_crit, df, noncentrality)?,
        Tails::Two => {
            1. - (noncentral_t_cdf(t_crit, df, noncentrality)?
                - noncentral_t_cdf(-t_crit, df, noncentrality)?)
        }
    };
    Ok(power.clamp(0., 1.))
}

/// Power of the configured test at the observed effect. At zero effect this
/// is the test's own false-positive rate.
pub fn observed_power(analysis: &PowerAnalysis) -> Result<PowerResult, TtpowerErr> {
    let observed_power = t_test_power(
        analysis.t_crit,
        analysis.df,
        analysis.t_stat,
        analysis.config.tails,
    )?;
    Ok(PowerResult { observed_power })
}
