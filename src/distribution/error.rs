//----------------------------------------
// distribution errors
//----------------------------------------
use crate::error::TtpowerErr;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum DistributionErr {
    #[error("arguments to quantile function should be in (0, 1); got {0}")]
    QuantileOutOfBounds(f64),
    #[error("bad distribution parameters: {0}")]
    BadParameters(String),
}

impl From<DistributionErr> for TtpowerErr {
    fn from(e: DistributionErr) -> TtpowerErr {
        TtpowerErr::Distribution(e)
    }
}
