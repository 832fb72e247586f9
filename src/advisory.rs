//----------------------------------------
// Low-confidence advisories
//----------------------------------------
use std::fmt;

use crate::hypothesis::types::TestMode;
use crate::power::{analysis::PowerAnalysis, types::SizeEffectTable};

/// Groups smaller than this give unreliable variance estimates
pub const SMALL_GROUP_SIZE: usize = 10;
/// Below this the normal approximation noticeably underestimates sample size
pub const SMALL_REQUIRED_SAMPLE: usize = 30;

/// Non-fatal conditions under which results should be read with caution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LowConfidence {
    SmallGroup { group: usize, sample_size: usize },
    SmallRequiredSample { power_level: f64, sample_size: usize },
}

impl fmt::Display for LowConfidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LowConfidence::SmallGroup { group, sample_size } => write!(
                f,
                "group {group} has only {sample_size} observations; \
                variance estimates may be unreliable"
            ),
            LowConfidence::SmallRequiredSample {
                power_level,
                sample_size,
            } => write!(
                f,
                "estimated sample size {sample_size} at power {power_level:.2} is small; \
                the normal approximation underestimates here, so re-measure and refine"
            ),
        }
    }
}

/// Collects advisories for an analysis and, if given, its size/effect table
pub fn low_confidence(
    analysis: &PowerAnalysis,
    maybe_table: Option<&SizeEffectTable>,
) -> Vec<LowConfidence> {
    let mut groups = vec![(1, analysis.group1.sample_size)];
    if analysis.config.mode == TestMode::TwoSample {
        groups.push((2, analysis.group2.sample_size));
    }
    let small_groups = groups
        .into_iter()
        .filter(|&(_, n)| n < SMALL_GROUP_SIZE)
        .map(|(group, sample_size)| LowConfidence::SmallGroup { group, sample_size });

    let small_required = maybe_table.into_iter().flat_map(|table| {
        table
            .power_levels
            .iter()
            .zip(table.min_sample_sizes.iter())
            .filter(|&(_, &n)| n < SMALL_REQUIRED_SAMPLE)
            .map(|(&power_level, &sample_size)| LowConfidence::SmallRequiredSample {
                power_level,
                sample_size,
            })
    });

    small_groups.chain(small_required).collect()
}

/// Logs each advisory at warn level
pub fn emit(advisories: &[LowConfidence]) {
    for advisory in advisories {
        tracing::warn!("{advisory}");
    }
}
