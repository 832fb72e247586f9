use crate::error::TtpowerErr;
use crate::groups::{
    error::InvalidInputError,
    types::{Comparison, Group},
};
use crate::hypothesis::types::{Alternative, Tails, TestConfiguration, TestMode};

/// Validates raw inputs and derives which test applies.
/// Group 1 always needs more than one observation; a second group needs
/// the same, while scalar comparisons are exempt.
pub fn test_configuration(
    group1: &Group,
    group2: &Comparison,
    alpha: f64,
    tails: u8,
) -> Result<TestConfiguration, TtpowerErr> {
    //----------------------------------------
    // Check arguments
    if group1.sample_size <= 1 {
        return Err(InvalidInputError::GroupTooSmall {
            group: 1,
            sample_size: group1.sample_size,
        }
        .into());
    }
    if let Comparison::Group(g) = group2
        && g.sample_size <= 1
    {
        return Err(InvalidInputError::GroupTooSmall {
            group: 2,
            sample_size: g.sample_size,
        }
        .into());
    }
    if let Comparison::Value(v) = group2
        && !v.is_finite()
    {
        return Err(InvalidInputError::NonFiniteMean(*v).into());
    }
    // Written this way so NaN is rejected too
    if !(alpha > 0. && alpha < 1.) {
        return Err(InvalidInputError::BadAlpha(alpha).into());
    }
    let tails = Tails::try_from(tails)?;

    let mode = match group2 {
        Comparison::Group(_) => TestMode::TwoSample,
        Comparison::Zero | Comparison::Value(_) => TestMode::OneSample,
    };

    Ok(TestConfiguration { mode, alpha, tails })
}

/// Alternative hypothesis consistent with the configuration: one-tailed
/// tests look in the direction of the observed difference.
pub fn alternative(config: &TestConfiguration, mean1: f64, mean2: f64) -> Alternative {
    match config.tails {
        Tails::Two => Alternative::TwoSided,
        Tails::One if mean1 > mean2 => Alternative::Greater,
        Tails::One => Alternative::Less,
    }
}
