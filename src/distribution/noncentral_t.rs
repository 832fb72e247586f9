//! Noncentral t distribution.
//!
//! If `Z ~ N(0, 1)` and `V ~ chi2(df)` are independent, then
//! `T = (Z + delta) / sqrt(V / df)` is noncentral t. Conditioning on
//! `u = sqrt(V / df)` gives
//!
//! `P(T <= x) = integral_0^inf f(u) * Phi(x * u - delta) du`
//!
//! with `f(u) = 2 (df/2)^(df/2) / Gamma(df/2) * u^(df-1) * exp(-df u^2 / 2)`.
//! The integral is evaluated with Simpson's rule over the region where `f`
//! carries mass.

use crate::distribution::{error::DistributionErr, quadrature::simpson};
use crate::error::TtpowerErr;
use statrs::distribution::{ContinuousCDF, Normal};
use statrs::function::gamma::ln_gamma;

const PANELS: usize = 2_000;

pub fn noncentral_t_cdf(x: f64, df: f64, delta: f64) -> Result<f64, TtpowerErr> {
    if !(df > 0.) || !df.is_finite() {
        return Err(DistributionErr::BadParameters(format!(
            "degrees of freedom should be positive and finite; got {df}"
        ))
        .into());
    }
    if x.is_nan() || !delta.is_finite() {
        return Err(DistributionErr::BadParameters(format!(
            "noncentral t evaluated at {x} with noncentrality {delta}"
        ))
        .into());
    }
    if x == f64::INFINITY {
        return Ok(1.);
    }
    if x == f64::NEG_INFINITY {
        return Ok(0.);
    }

    let std_normal =
        Normal::new(0., 1.).map_err(|e| DistributionErr::BadParameters(e.to_string()))?;
    let half_df = df / 2.;
    let log_norm = 2f64.ln() + half_df * half_df.ln() - ln_gamma(half_df);

    // u has mean ~1 and sd ~1/sqrt(2 df)
    let spread = 10. / df.sqrt();
    let lower = (1. - spread).max(0.);
    let upper = 1. + spread;

    let density = |u: f64| {
        if u <= 0. {
            // f(0) is only nonzero for df = 1
            return if df == 1. { log_norm.exp() } else { 0. };
        }
        (log_norm + (df - 1.) * u.ln() - df * u * u / 2.).exp()
    };

    let p = simpson(
        |u| density(u) * std_normal.cdf(x * u - delta),
        lower,
        upper,
        PANELS,
    );
    Ok(p.clamp(0., 1.))
}
