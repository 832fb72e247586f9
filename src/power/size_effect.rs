use crate::distribution::quantiles::{std_normal_quantile, t_quantile};
use crate::error::TtpowerErr;
use crate::hypothesis::types::TestMode;
use crate::power::{
    analysis::PowerAnalysis,
    error::PowerComputeError,
    types::{POWER_LEVELS, SizeEffectTable},
};

/// Smallest absolute difference in means detectable at each power level,
/// holding the observed standard error and degrees of freedom fixed.
pub fn min_effect_sizes(analysis: &PowerAnalysis) -> Result<Vec<f64>, TtpowerErr> {
    POWER_LEVELS
        .iter()
        .map(|&p| {
            let t_pi = t_quantile(p, analysis.df)?;
            Ok(analysis.std_err * (analysis.t_crit + t_pi))
        })
        .collect()
}

/// Sample size needed at each power level to detect the observed effect.
///
/// Uses normal quantiles rather than t, since the t degrees of freedom
/// depend on the answer. Two-sample sizes are per group. This underestimates
/// for small samples; `refine_sample_size` offers a t-based search.
pub fn min_sample_sizes(analysis: &PowerAnalysis) -> Result<Vec<usize>, TtpowerErr> {
    if analysis.effect_size == 0. {
        return Err(PowerComputeError::ZeroEffectSize.into());
    }
    let z_alpha = std_normal_quantile(1. - analysis.config.tail_alpha())?;
    let groups_factor = match analysis.config.mode {
        TestMode::OneSample => 1.,
        TestMode::TwoSample => 2.,
    };
    let variance = analysis.pooled_sd * analysis.pooled_sd;
    let es_sq = analysis.effect_size * analysis.effect_size;

    POWER_LEVELS
        .iter()
        .map(|&p| {
            let z_pi = std_normal_quantile(p)?;
            let n = groups_factor * variance * (z_alpha + z_pi).powi(2) / es_sq;
            Ok(n.ceil() as usize)
        })
        .collect()
}

pub fn size_effect_table(analysis: &PowerAnalysis) -> Result<SizeEffectTable, TtpowerErr> {
    Ok(SizeEffectTable {
        power_levels: POWER_LEVELS.to_vec(),
        min_sample_sizes: min_sample_sizes(analysis)?,
        min_effect_sizes: min_effect_sizes(analysis)?,
        test_description: analysis.config.mode.description().to_string(),
    })
}
