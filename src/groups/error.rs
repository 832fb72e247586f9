//----------------------------------------
// input validation errors
//----------------------------------------
use crate::error::TtpowerErr;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum InvalidInputError {
    #[error("group size must exceed 1 (group {group} has size {sample_size})")]
    GroupTooSmall { group: usize, sample_size: usize },
    #[error("standard deviation should be finite and non-negative; got {0}")]
    BadStdDev(f64),
    #[error("group mean should be finite; got {0}")]
    NonFiniteMean(f64),
    #[error("alpha should be in (0, 1); got {0}")]
    BadAlpha(f64),
    #[error("tails should be 1 or 2; got {0}")]
    BadTails(u8),
    #[error("standard error of the difference is zero; at least one group needs spread")]
    ZeroStandardError,
    #[error("target power should be in (0, 1); got {0}")]
    BadPowerLevel(f64),
    #[error("simulation iteration counts should be positive (outer {outer}, inner {inner})")]
    BadIterationCount { outer: usize, inner: usize },
}

impl From<InvalidInputError> for TtpowerErr {
    fn from(e: InvalidInputError) -> TtpowerErr {
        TtpowerErr::InvalidInput(e)
    }
}
