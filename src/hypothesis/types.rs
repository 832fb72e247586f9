//----------------------------------------
// hypothesis mod types
//----------------------------------------
use crate::error::TtpowerErr;
use crate::groups::error::InvalidInputError;

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum TestMode {
    OneSample,
    TwoSample,
}

impl TestMode {
    pub fn description(&self) -> &'static str {
        match self {
            TestMode::OneSample => "One-sample t-test",
            TestMode::TwoSample => "Two-sample t-test",
        }
    }
}

#[derive(Default, Debug, PartialEq, Clone, Copy)]
pub enum Tails {
    One,
    #[default]
    Two,
}

impl Tails {
    pub fn count(&self) -> f64 {
        match self {
            Tails::One => 1.,
            Tails::Two => 2.,
        }
    }
}

impl TryFrom<u8> for Tails {
    type Error = TtpowerErr;

    fn try_from(tails: u8) -> Result<Self, Self::Error> {
        match tails {
            1 => Ok(Tails::One),
            2 => Ok(Tails::Two),
            other => Err(InvalidInputError::BadTails(other).into()),
        }
    }
}

/// Alternative hypothesis for a single simulated test
#[derive(Default, Debug, PartialEq, Clone, Copy)]
pub enum Alternative {
    #[default]
    TwoSided,
    /// mean 1 > mean 2
    Greater,
    /// mean 1 < mean 2
    Less,
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub struct TestConfiguration {
    pub mode: TestMode,
    pub alpha: f64,
    pub tails: Tails,
}

impl TestConfiguration {
    /// Upper-tail probability put on each rejection region
    pub fn tail_alpha(&self) -> f64 {
        self.alpha / self.tails.count()
    }
}
