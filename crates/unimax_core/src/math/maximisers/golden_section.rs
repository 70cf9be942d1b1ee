//! Golden-section search maximiser.

use super::{record_value, RunConfig};
use crate::types::MaximiseError;
use num_traits::Float;

/// Reciprocal of the golden ratio, `(√5 - 1) / 2`.
///
/// Probe placement and the width/error-bound columns all use this constant.
/// At this precision the probe carried over between iterations coincides
/// exactly with the freshly placed one, so reuse is an identity rather than
/// an approximation.
pub const INV_PHI: f64 = 0.618_033_988_749_895;

/// Bracket state at the start of one golden-section iteration.
///
/// `width` and `error_bound` are decay-law values computed from the
/// *original* bounds (`(xu₀ - xl₀)·φⁱ` and `(xu₀ - xl₀)·φ^(i+2)` for the
/// row with 1-based `index = i + 1`), not remeasured from the current
/// bracket, so the columns are immune to accumulated round-off.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GoldenRow {
    /// 1-based iteration index
    pub index: usize,

    /// Lower bound at iteration entry
    pub xl: f64,

    /// Left interior probe
    pub x2: f64,

    /// Right interior probe
    pub x1: f64,

    /// Upper bound at iteration entry
    pub xu: f64,

    /// Objective value at the left probe
    pub fx2: f64,

    /// Objective value at the right probe
    pub fx1: f64,

    /// Bracket width by the decay law
    pub width: f64,

    /// Worst-case distance from the reported bracket to the maximum
    pub error_bound: f64,
}

/// Completed golden-section run.
///
/// The deliverable is the narrowed bracket plus the per-iteration rows;
/// there is deliberately no point estimate and no accept/reject verdict.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GoldenRun<T> {
    /// One record per iteration, in order.
    pub rows: Vec<GoldenRow>,

    /// Final lower bound, unrounded.
    pub lower: T,

    /// Final upper bound, unrounded.
    pub upper: T,

    /// Decimal places for rendering, carried from the run configuration.
    pub precision: usize,
}

/// Golden-section search maximiser.
///
/// Derivative-free bracketing method: two interior probes at golden-ratio
/// positions split the bracket, the sub-interval that cannot contain the
/// maximum of a unimodal objective is discarded, and the surviving probe is
/// reused so each iteration costs exactly one objective evaluation after
/// the initial two. Every iteration multiplies the bracket width by
/// [`INV_PHI`] regardless of the objective.
///
/// Unimodality on the bracket is the caller's precondition; the routine
/// narrows purely by comparing probe values and never checks it.
///
/// # Example
///
/// ```
/// use unimax_core::math::maximisers::{GoldenSectionMaximiser, RunConfig, INV_PHI};
///
/// // Narrow [0, 4] around the maximum of f(x) = 2 sin x - x²/10
/// let maximiser = GoldenSectionMaximiser::new(RunConfig::new(8, 4));
/// let f = |x: f64| 2.0 * x.sin() - x * x / 10.0;
///
/// let run = maximiser.maximise(f, 0.0, 4.0).unwrap();
/// let width = run.upper - run.lower;
/// assert!((width - 4.0 * INV_PHI.powi(8)).abs() < 1e-9);
/// ```
#[derive(Debug, Clone)]
pub struct GoldenSectionMaximiser {
    /// Run configuration
    config: RunConfig,
}

impl GoldenSectionMaximiser {
    /// Create a new golden-section maximiser with the given configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Run configuration with iteration budget and precision
    pub fn new(config: RunConfig) -> Self {
        Self { config }
    }

    /// Create a maximiser with default configuration.
    pub fn with_defaults() -> Self {
        Self {
            config: RunConfig::default(),
        }
    }

    /// Narrow the bracket `[lower, upper]` around the maximum of `f`.
    ///
    /// # Arguments
    ///
    /// * `f` - Objective function, assumed unimodal on the bracket
    /// * `lower` - Initial lower bound
    /// * `upper` - Initial upper bound, strictly above `lower`
    ///
    /// # Returns
    ///
    /// * `Ok(run)` - Completed run with rows and the final bracket
    /// * `Err(MaximiseError::InvalidIterationCount)` - Budget below 1
    /// * `Err(MaximiseError::InvalidBracket)` - `lower >= upper` or a NaN
    ///   bound; checked before the objective is first evaluated
    ///
    /// # Example
    ///
    /// ```
    /// use unimax_core::math::maximisers::{GoldenSectionMaximiser, RunConfig};
    ///
    /// let maximiser = GoldenSectionMaximiser::new(RunConfig::new(4, 3));
    /// let run = maximiser.maximise(|x: f64| -(x - 1.0) * (x - 1.0), 0.0, 2.0).unwrap();
    ///
    /// assert_eq!(run.rows.len(), 4);
    /// assert!(run.lower <= 1.0 && 1.0 <= run.upper);
    /// ```
    pub fn maximise<T, F>(&self, f: F, lower: T, upper: T) -> Result<GoldenRun<T>, MaximiseError>
    where
        T: Float,
        F: Fn(T) -> T,
    {
        if self.config.iterations < 1 {
            return Err(MaximiseError::InvalidIterationCount {
                requested: self.config.iterations,
            });
        }

        // Bounds must be strictly ordered; NaN bounds can never be ordered
        if lower.is_nan() || upper.is_nan() || lower >= upper {
            return Err(MaximiseError::InvalidBracket {
                lower: record_value(lower),
                upper: record_value(upper),
            });
        }

        let phi = T::from(INV_PHI).unwrap();
        let initial_width = upper - lower;

        let mut xl = lower;
        let mut xu = upper;
        let mut x2 = xu - phi * (xu - xl);
        let mut x1 = xl + phi * (xu - xl);
        let mut fx2 = f(x2);
        let mut fx1 = f(x1);

        let mut rows = Vec::with_capacity(self.config.iterations);

        for i in 0..self.config.iterations {
            rows.push(GoldenRow {
                index: i + 1,
                xl: record_value(xl),
                x2: record_value(x2),
                x1: record_value(x1),
                xu: record_value(xu),
                fx2: record_value(fx2),
                fx1: record_value(fx1),
                width: record_value(initial_width * phi.powi(i as i32)),
                error_bound: record_value(initial_width * phi.powi(i as i32 + 2)),
            });

            if fx1 > fx2 {
                // Maximum cannot lie in [xl, x2]: advance the lower bound
                // and reuse the old right probe as the new left probe
                xl = x2;
                x2 = x1;
                fx2 = fx1;
                x1 = xl + phi * (xu - xl);
                fx1 = f(x1);
            } else {
                // Maximum cannot lie in [x1, xu] (ties fall here too)
                xu = x1;
                x1 = x2;
                fx1 = fx2;
                x2 = xu - phi * (xu - xl);
                fx2 = f(x2);
            }
        }

        Ok(GoldenRun {
            rows,
            lower: xl,
            upper: xu,
            precision: self.config.precision,
        })
    }

    /// Returns a reference to the run configuration.
    pub fn config(&self) -> &RunConfig {
        &self.config
    }
}
