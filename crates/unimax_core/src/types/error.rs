//! Structured error types for maximisation runs.
//!
//! All error categories carry enough context to diagnose the failure
//! without re-running: the offending iteration index, the rejected bounds,
//! or the requested count. Non-convergence is deliberately *not* an error —
//! a Newton run that ends outside the acceptance threshold completes with a
//! `Rejected` verdict instead.

use std::fmt;

use thiserror::Error;

use crate::math::maximisers::NewtonStep;

/// Errors raised by the univariate maximisers.
///
/// # Examples
/// ```
/// use unimax_core::types::MaximiseError;
///
/// let err = MaximiseError::InvalidBracket { lower: 4.0, upper: 0.0 };
/// assert!(format!("{}", err).contains("bracket"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MaximiseError {
    /// Curvature vanished: the Newton update would divide by zero.
    #[error("Division by zero at iteration {iteration}: curvature vanished at x = {x}")]
    DivisionByZero {
        /// 1-based index of the iteration that could not be formed
        iteration: usize,
        /// The iterate at which the curvature vanished
        x: f64,
    },

    /// Bracket bounds do not satisfy `lower < upper`.
    #[error("Invalid bracket: lower bound {lower} must be strictly below upper bound {upper}")]
    InvalidBracket {
        /// Rejected lower bound
        lower: f64,
        /// Rejected upper bound
        upper: f64,
    },

    /// Requested iteration count below one.
    #[error("Invalid iteration count: {requested} (at least 1 required)")]
    InvalidIterationCount {
        /// The rejected count
        requested: usize,
    },

    /// Numerical instability during computation.
    #[error("Numerical instability: {0}")]
    NumericalInstability(String),
}

/// Newton failure with the steps completed before the fault.
///
/// A Newton run can fail partway through its iteration budget; the steps
/// recorded up to that point retain diagnostic value, so the error keeps
/// them alongside the failure kind. The golden-section maximiser can only
/// fail before its loop starts and therefore returns [`MaximiseError`]
/// directly.
///
/// # Fields
/// - `kind`: What went wrong
/// - `steps`: Iterations completed before the failure (possibly empty)
///
/// # Examples
/// ```
/// use unimax_core::math::maximisers::{NewtonMaximiser, RunConfig};
/// use unimax_core::types::MaximiseError;
///
/// // Flat objective: curvature is identically zero
/// let maximiser = NewtonMaximiser::new(RunConfig::new(3, 3));
/// let err = maximiser
///     .maximise(|_x: f64| 1.0, |_x| 0.0, |_x| 0.0, 0.5)
///     .unwrap_err();
///
/// assert!(matches!(
///     err.kind,
///     MaximiseError::DivisionByZero { iteration: 1, .. }
/// ));
/// assert!(err.steps.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NewtonError {
    /// The failure category.
    pub kind: MaximiseError,

    /// Steps completed before the failure, for partial trace reporting.
    pub steps: Vec<NewtonStep>,
}

impl NewtonError {
    /// Create a Newton error from a failure kind and the completed steps.
    pub fn new(kind: MaximiseError, steps: Vec<NewtonStep>) -> Self {
        Self { kind, steps }
    }

    /// Check if the failure was a vanished curvature.
    pub fn is_division_by_zero(&self) -> bool {
        matches!(self.kind, MaximiseError::DivisionByZero { .. })
    }

    /// Check if the failure was a rejected iteration count.
    pub fn is_invalid_iteration_count(&self) -> bool {
        matches!(self.kind, MaximiseError::InvalidIterationCount { .. })
    }

    /// Check if the failure was numerical instability.
    pub fn is_numerical_instability(&self) -> bool {
        matches!(self.kind, MaximiseError::NumericalInstability(_))
    }
}

impl fmt::Display for NewtonError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;
        if !self.steps.is_empty() {
            write!(f, " (after {} completed iterations)", self.steps.len())?;
        }
        Ok(())
    }
}

impl std::error::Error for NewtonError {}

impl From<MaximiseError> for NewtonError {
    fn from(kind: MaximiseError) -> Self {
        Self {
            kind,
            steps: Vec::new(),
        }
    }
}
