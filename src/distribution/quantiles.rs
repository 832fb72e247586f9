use crate::distribution::error::DistributionErr;
use crate::error::TtpowerErr;
use statrs::distribution::{ContinuousCDF, Normal, StudentsT};

fn check_probability(p: f64) -> Result<(), TtpowerErr> {
    if !(p > 0. && p < 1.) {
        return Err(DistributionErr::QuantileOutOfBounds(p).into());
    }
    Ok(())
}

fn students_t(df: f64) -> Result<StudentsT, TtpowerErr> {
    StudentsT::new(0., 1., df).map_err(|e| DistributionErr::BadParameters(e.to_string()).into())
}

pub fn std_normal_quantile(p: f64) -> Result<f64, TtpowerErr> {
    check_probability(p)?;
    let std_normal =
        Normal::new(0., 1.).map_err(|e| DistributionErr::BadParameters(e.to_string()))?;
    Ok(std_normal.inverse_cdf(p))
}

/// Quantile of the central t distribution with `df` degrees of freedom
pub fn t_quantile(p: f64, df: f64) -> Result<f64, TtpowerErr> {
    check_probability(p)?;
    Ok(students_t(df)?.inverse_cdf(p))
}

pub fn t_cdf(x: f64, df: f64) -> Result<f64, TtpowerErr> {
    Ok(students_t(df)?.cdf(x))
}
