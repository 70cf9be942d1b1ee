//! Univariate maximisers with structured iteration records.
//!
//! This module provides two classic single-variable maximisation algorithms
//! with deliberately different contracts:
//!
//! ## Available Maximisers
//!
//! ### Open methods
//!
//! - [`NewtonMaximiser`]: Fixed-iteration Newton ascent on the slope, using
//!   explicit derivative closures or automatic differentiation
//!
//! ### Bracketing methods
//!
//! - [`GoldenSectionMaximiser`]: Derivative-free interval narrowing at the
//!   golden ratio; delivers a bracket, never a point estimate
//!
//! ## Configuration
//!
//! Both maximisers take a [`RunConfig`] fixing:
//! - `iterations`: Exact number of refinement iterations (default: 1)
//! - `precision`: Decimal places for rendered traces (default: 3)
//!
//! The iteration budget is spent exactly: neither maximiser stops early on
//! convergence nor continues past the budget. Each run yields a record
//! ([`NewtonRun`] or [`GoldenRun`]) holding one entry per iteration, so the
//! numerical outcome and its presentation stay separate concerns.
//!
//! ## AD Compatibility
//!
//! With the `num-dual-mode` feature the Newton maximiser provides a
//! `maximise_ad` method that evaluates value, slope and curvature from a
//! single closure over second-order dual numbers.
//!
//! ## Examples
//!
//! ### Newton's method
//!
//! ```
//! use unimax_core::math::maximisers::{NewtonMaximiser, RunConfig};
//!
//! // Maximise f(x) = 2 sin x - x²/10 from x0 = 2.5
//! let maximiser = NewtonMaximiser::new(RunConfig::new(3, 3));
//!
//! let f = |x: f64| 2.0 * x.sin() - x * x / 10.0;
//! let df = |x: f64| 2.0 * x.cos() - x / 5.0;
//! let ddf = |x: f64| -2.0 * x.sin() - 0.2;
//!
//! let run = maximiser.maximise(f, df, ddf, 2.5).unwrap();
//! assert_eq!(run.steps.len(), 3);
//! assert!(run.verdict.is_accepted());
//! ```
//!
//! ### Golden-section search
//!
//! ```
//! use unimax_core::math::maximisers::{GoldenSectionMaximiser, RunConfig};
//!
//! // Narrow [0, 4] around the maximum of the same objective
//! let maximiser = GoldenSectionMaximiser::new(RunConfig::new(8, 4));
//! let f = |x: f64| 2.0 * x.sin() - x * x / 10.0;
//!
//! let run = maximiser.maximise(f, 0.0, 4.0).unwrap();
//! assert_eq!(run.rows.len(), 8);
//! assert!(run.lower < 1.4276 && 1.4276 < run.upper);
//! ```

mod config;
mod golden_section;
mod newton;

// Re-export public types at module level
pub use config::RunConfig;
pub use golden_section::{GoldenRow, GoldenRun, GoldenSectionMaximiser, INV_PHI};
pub use newton::{NewtonMaximiser, NewtonRun, NewtonStep, NewtonVerdict, ACCEPTANCE_THRESHOLD};

use num_traits::Float;

/// Convert an iterate into the `f64` stored in records and errors.
///
/// Exotic `Float` types that cannot represent themselves as `f64` degrade
/// to NaN rather than aborting the run.
pub(crate) fn record_value<T: Float>(x: T) -> f64 {
    x.to_f64().unwrap_or(f64::NAN)
}
