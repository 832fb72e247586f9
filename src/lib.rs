//----------------------------------------
// Root lib
//----------------------------------------
//! Power analysis for one- and two-sample t-tests from summary statistics.
//!
//! Given the mean, standard deviation and size of one or two groups, this
//! library computes the observed power of the corresponding t-test, and for a
//! fixed set of target power levels the minimum sample size and minimum
//! detectable effect. Power can optionally be cross-checked by Monte-Carlo
//! simulation.
//!
//! ```
//! use ttpower::compute::{Group, PowerSettings, compute_power};
//!
//! let report = compute_power(
//!     Group::new(1.1, 0.1, 30).unwrap(),
//!     Group::new(1.2, 0.3, 25).unwrap(),
//!     &PowerSettings::default(),
//! )
//! .unwrap();
//! assert!((report.observed_power - 0.3375).abs() < 1e-4);
//! assert_eq!(report.table.min_sample_sizes, vec![58, 73, 98, 121, 170]);
//! ```

/// Low-confidence advisories attached to results
pub mod advisory;
/// This module houses the public API for computing power, sample sizes,
/// effect sizes and simulated power
pub mod compute;
mod distribution;
/// This module contains error types
pub mod error;
mod groups;
mod hypothesis;
mod power;
mod simulation;
