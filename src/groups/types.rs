//----------------------------------------
// groups mod types
//----------------------------------------
use crate::error::TtpowerErr;
use crate::groups::error::InvalidInputError;

/// Summary statistics of one group of observations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Group {
    pub mean: f64,
    pub stddev: f64,
    pub sample_size: usize,
}

impl Group {
    /// Checks that the mean is finite and the standard deviation is finite
    /// and non-negative. Sample size is checked later, since a synthesized
    /// comparison group legitimately has size 1.
    pub fn new(mean: f64, stddev: f64, sample_size: usize) -> Result<Group, TtpowerErr> {
        if !mean.is_finite() {
            return Err(InvalidInputError::NonFiniteMean(mean).into());
        }
        if !stddev.is_finite() || stddev < 0. {
            return Err(InvalidInputError::BadStdDev(stddev).into());
        }
        Ok(Group {
            mean,
            stddev,
            sample_size,
        })
    }

    /// Degenerate group standing in for a fixed comparison value
    pub fn fixed(value: f64) -> Group {
        Group {
            mean: value,
            stddev: 0.,
            sample_size: 1,
        }
    }

    pub fn variance(&self) -> f64 {
        self.stddev * self.stddev
    }

    /// Squared standard error of the group mean
    pub fn mean_variance(&self) -> f64 {
        self.variance() / self.sample_size as f64
    }
}

/// What group 1 is compared against.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub enum Comparison {
    /// No second group given; compare against zero
    #[default]
    Zero,
    /// A fixed scalar comparison value
    Value(f64),
    /// A second empirical group
    Group(Group),
}

impl Comparison {
    /// Resolves the comparison into a group; scalars become a group with
    /// no spread and a single observation.
    pub fn as_group(&self) -> Group {
        match self {
            Comparison::Zero => Group::fixed(0.),
            Comparison::Value(v) => Group::fixed(*v),
            Comparison::Group(g) => *g,
        }
    }
}

impl From<f64> for Comparison {
    fn from(value: f64) -> Self {
        Comparison::Value(value)
    }
}

impl From<Group> for Comparison {
    fn from(group: Group) -> Self {
        Comparison::Group(group)
    }
}

impl From<Option<Group>> for Comparison {
    fn from(maybe_group: Option<Group>) -> Self {
        match maybe_group {
            Some(group) => Comparison::Group(group),
            None => Comparison::Zero,
        }
    }
}
