use crate::distribution::quantiles::t_quantile;
use crate::error::TtpowerErr;
use crate::groups::{
    error::InvalidInputError,
    types::{Comparison, Group},
};
use crate::hypothesis::{
    test_configuration::test_configuration,
    types::{TestConfiguration, TestMode},
};

/// Validated inputs of a power calculation together with the statistics
/// every downstream formula needs. In one-sample mode `group2` is the
/// synthesized comparison group (stddev 0, size 1).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PowerAnalysis {
    pub group1: Group,
    pub group2: Group,
    pub config: TestConfiguration,
    /// mean1 - mean2
    pub effect_size: f64,
    /// Standard error of the difference in means
    pub std_err: f64,
    pub t_stat: f64,
    pub pooled_sd: f64,
    pub df: f64,
    pub t_crit: f64,
}

impl PowerAnalysis {
    pub fn new<C: Into<Comparison>>(
        group1: Group,
        group2: C,
        alpha: f64,
        tails: u8,
    ) -> Result<PowerAnalysis, TtpowerErr> {
        let comparison = group2.into();
        let config = test_configuration(&group1, &comparison, alpha, tails)?;
        let group2 = comparison.as_group();

        let effect_size = group1.mean - group2.mean;
        let std_err = (group1.mean_variance() + group2.mean_variance()).sqrt();
        if std_err == 0. {
            return Err(InvalidInputError::ZeroStandardError.into());
        }
        let t_stat = effect_size / std_err;
        let pooled_sd = pooled_sd(&group1, &group2);
        let df = match config.mode {
            TestMode::OneSample => (group1.sample_size - 1) as f64,
            TestMode::TwoSample => welch_df(
                group1.variance(),
                group1.sample_size as f64,
                group2.variance(),
                group2.sample_size as f64,
            )
            .round(),
        };
        let t_crit = t_quantile(1. - config.tail_alpha(), df)?;

        tracing::debug!(
            effect_size,
            std_err,
            t_stat,
            pooled_sd,
            df,
            t_crit,
            "derived {} statistics",
            config.mode.description()
        );

        Ok(PowerAnalysis {
            group1,
            group2,
            config,
            effect_size,
            std_err,
            t_stat,
            pooled_sd,
            df,
            t_crit,
        })
    }
}

pub fn pooled_sd(group1: &Group, group2: &Group) -> f64 {
    let n1 = group1.sample_size as f64;
    let n2 = group2.sample_size as f64;
    (((n1 - 1.) * group1.variance() + (n2 - 1.) * group2.variance()) / (n1 + n2 - 2.)).sqrt()
}

/// Welch-Satterthwaite degrees of freedom from sample variances and sizes,
/// unrounded. A group with zero variance contributes nothing.
pub fn welch_df(var1: f64, n1: f64, var2: f64, n2: f64) -> f64 {
    let a = var1 / n1;
    let b = var2 / n2;
    let denom = match (a > 0., b > 0.) {
        (true, true) => a * a / (n1 - 1.) + b * b / (n2 - 1.),
        (true, false) => a * a / (n1 - 1.),
        (false, true) => b * b / (n2 - 1.),
        (false, false) => return f64::NAN,
    };
    (a + b) * (a + b) / denom
}
