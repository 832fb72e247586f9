//----------------------------------------
// power computation errors
//----------------------------------------
use crate::error::TtpowerErr;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum PowerComputeError {
    #[error("effect size is zero; minimum sample size is undefined")]
    ZeroEffectSize,
    #[error("power {target_power} not reached with up to {max_n} observations per group")]
    RefinementDidNotConverge { target_power: f64, max_n: usize },
}

impl From<PowerComputeError> for TtpowerErr {
    fn from(e: PowerComputeError) -> TtpowerErr {
        TtpowerErr::PowerCompute(e)
    }
}
