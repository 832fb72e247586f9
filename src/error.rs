//----------------------------------------
// Crate error type
//----------------------------------------
pub use crate::distribution::error::DistributionErr;
pub use crate::groups::error::InvalidInputError;
pub use crate::power::error::PowerComputeError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum TtpowerErr {
    #[error("invalid input: {0}")]
    InvalidInput(InvalidInputError),
    #[error("while computing power: {0}")]
    PowerCompute(PowerComputeError),
    #[error("while evaluating distribution: {0}")]
    Distribution(DistributionErr),
}
