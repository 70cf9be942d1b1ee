//! Newton's method maximiser.

use super::{record_value, RunConfig};
use crate::types::{MaximiseError, NewtonError};
use num_traits::Float;

/// Absolute slope bound below which the final iterate is accepted.
///
/// A Newton run ends by evaluating the slope at its final iterate; the
/// stationary-point claim is accepted when `|f'(x)| <= 0.01` (inclusive).
/// The bound is fixed and scale-free by contract, independent of the run's
/// precision setting.
pub const ACCEPTANCE_THRESHOLD: f64 = 0.01;

/// One completed Newton iteration.
///
/// Values are stored as `f64` regardless of the run's working type, since
/// records exist to be reported, not computed with.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NewtonStep {
    /// 1-based iteration index
    pub index: usize,

    /// The refined approximation produced by this iteration
    pub x: f64,

    /// `|x_new - x_old| / |x_new|` for this iteration.
    ///
    /// Follows IEEE semantics: a zero iterate yields infinity (or NaN when
    /// the step was also zero). Recorded as-is; not a failure.
    pub relative_error: f64,
}

/// Outcome of a Newton run's final acceptance check.
///
/// Non-convergence is not an error: a run whose final slope exceeds
/// [`ACCEPTANCE_THRESHOLD`] completes normally with the `Rejected` variant.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NewtonVerdict<T> {
    /// The final slope was acceptably small; the stationary point stands.
    Accepted {
        /// Slope at the final iterate
        slope: T,
        /// Objective value at the final iterate
        maximum: T,
    },

    /// The final slope was too large; the iterate is not a usable maximum.
    Rejected {
        /// Slope at the final iterate
        slope: T,
    },
}

impl<T: Float> NewtonVerdict<T> {
    /// Check whether the run's final iterate was accepted.
    pub fn is_accepted(&self) -> bool {
        matches!(self, NewtonVerdict::Accepted { .. })
    }

    /// The maximum value, if the run was accepted.
    pub fn maximum(&self) -> Option<T> {
        match self {
            NewtonVerdict::Accepted { maximum, .. } => Some(*maximum),
            NewtonVerdict::Rejected { .. } => None,
        }
    }

    /// Slope at the final iterate, whatever the verdict.
    pub fn slope(&self) -> T {
        match self {
            NewtonVerdict::Accepted { slope, .. } => *slope,
            NewtonVerdict::Rejected { slope } => *slope,
        }
    }
}

/// Completed Newton maximisation run.
///
/// # Fields
/// - `steps`: One record per iteration, in order
/// - `x`: Final iterate at full working precision
/// - `verdict`: Acceptance outcome for the final iterate
/// - `precision`: Decimal places the trace should be rendered with
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NewtonRun<T> {
    /// One record per completed iteration, in order.
    pub steps: Vec<NewtonStep>,

    /// Final iterate, unrounded.
    pub x: T,

    /// Acceptance outcome for the final iterate.
    pub verdict: NewtonVerdict<T>,

    /// Decimal places for rendering, carried from the run configuration.
    pub precision: usize,
}

/// Newton's method maximiser with explicit or automatic derivatives.
///
/// Runs Newton's root-finding iteration on the slope, with the curvature as
/// the correction term: `x_{n+1} = x_n - f'(x_n) / f''(x_n)`. The iteration
/// budget is spent exactly; afterwards the final slope decides between an
/// accepted maximum and a rejected iterate.
///
/// The objective `f` itself is evaluated only when a run is accepted, to
/// report the maximum value. The iterations touch just `f'` and `f''`.
///
/// # Example
///
/// ```
/// use unimax_core::math::maximisers::{NewtonMaximiser, RunConfig};
///
/// // Maximise f(x) = 2 sin x - x²/10 from x0 = 2.5
/// let maximiser = NewtonMaximiser::new(RunConfig::new(3, 3));
///
/// let f = |x: f64| 2.0 * x.sin() - x * x / 10.0;
/// let df = |x: f64| 2.0 * x.cos() - x / 5.0;
/// let ddf = |x: f64| -2.0 * x.sin() - 0.2;
///
/// let run = maximiser.maximise(f, df, ddf, 2.5).unwrap();
/// assert!(run.verdict.is_accepted());
/// assert!((run.x - 1.4276).abs() < 1e-3);
/// ```
#[derive(Debug, Clone)]
pub struct NewtonMaximiser {
    /// Run configuration
    config: RunConfig,
}

impl NewtonMaximiser {
    /// Create a new Newton maximiser with the given configuration.
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

    /// Maximise `f` using explicit derivative closures.
    ///
    /// # Arguments
    ///
    /// * `f` - Objective function (evaluated only on acceptance)
    /// * `df` - First derivative of the objective
    /// * `ddf` - Second derivative of the objective
    /// * `x0` - Initial guess
    ///
    /// # Returns
    ///
    /// * `Ok(run)` - Completed run with records and verdict
    /// * `Err(e)` with `e.kind`:
    ///   - `InvalidIterationCount` - Budget below 1
    ///   - `DivisionByZero` - Curvature vanished at some iteration
    ///   - `NumericalInstability` - An iterate became non-finite
    ///
    /// Errors carry the steps completed before the failure.
    ///
    /// # Example
    ///
    /// ```
    /// use unimax_core::math::maximisers::{NewtonMaximiser, RunConfig};
    ///
    /// // One step lands a quadratic on its vertex
    /// let maximiser = NewtonMaximiser::new(RunConfig::new(1, 3));
    ///
    /// let f = |x: f64| 4.0 - (x - 2.0) * (x - 2.0);
    /// let df = |x: f64| -2.0 * (x - 2.0);
    /// let ddf = |_x: f64| -2.0;
    ///
    /// let run = maximiser.maximise(f, df, ddf, 0.0).unwrap();
    /// assert_eq!(run.verdict.maximum(), Some(4.0));
    /// ```
    pub fn maximise<T, F, G, H>(&self, f: F, df: G, ddf: H, x0: T) -> Result<NewtonRun<T>, NewtonError>
    where
        T: Float,
        F: Fn(T) -> T,
        G: Fn(T) -> T,
        H: Fn(T) -> T,
    {
        if self.config.iterations < 1 {
            return Err(NewtonError::from(MaximiseError::InvalidIterationCount {
                requested: self.config.iterations,
            }));
        }

        let mut steps = Vec::with_capacity(self.config.iterations);
        let mut x = x0;
        let epsilon = T::from(1e-30).unwrap();

        for iteration in 1..=self.config.iterations {
            let slope = df(x);
            let curvature = ddf(x);

            // Check for vanished curvature before forming the update
            if curvature.abs() < epsilon {
                return Err(NewtonError::new(
                    MaximiseError::DivisionByZero {
                        iteration,
                        x: record_value(x),
                    },
                    steps,
                ));
            }

            // Newton update on the slope
            let x_new = x - slope / curvature;

            // Check for non-finite values
            if !x_new.is_finite() {
                return Err(NewtonError::new(
                    MaximiseError::NumericalInstability(
                        "Newton iteration produced non-finite iterate".to_string(),
                    ),
                    steps,
                ));
            }

            let relative_error = ((x_new - x) / x_new).abs();
            steps.push(NewtonStep {
                index: iteration,
                x: record_value(x_new),
                relative_error: record_value(relative_error),
            });

            x = x_new;
        }

        let slope = df(x);
        let verdict = if slope.abs() <= T::from(ACCEPTANCE_THRESHOLD).unwrap() {
            NewtonVerdict::Accepted {
                slope,
                maximum: f(x),
            }
        } else {
            NewtonVerdict::Rejected { slope }
        };

        Ok(NewtonRun {
            steps,
            x,
            verdict,
            precision: self.config.precision,
        })
    }

    /// Returns a reference to the run configuration.
    pub fn config(&self) -> &RunConfig {
        &self.config
    }
}

/// AD-enabled Newton maximiser.
#[cfg(feature = "num-dual-mode")]
impl NewtonMaximiser {
    /// Maximise using automatic differentiation.
    ///
    /// Value, slope and curvature are all taken from a single closure over
    /// second-order dual numbers, eliminating the need to hand-code
    /// derivative functions. Iteration semantics and records are identical
    /// to [`maximise`](NewtonMaximiser::maximise).
    ///
    /// # Arguments
    ///
    /// * `f` - Objective function (must accept `Dual2_64`)
    /// * `x0` - Initial guess
    ///
    /// # Example
    ///
    /// ```
    /// use unimax_core::math::maximisers::{NewtonMaximiser, RunConfig};
    /// use num_dual::{Dual2_64, DualNum};
    ///
    /// let maximiser = NewtonMaximiser::new(RunConfig::new(3, 3));
    ///
    /// // f(x) = 2 sin x - x²/10, derivatives supplied by dual arithmetic
    /// let f = |x: Dual2_64| x.sin() * 2.0 - x * x / 10.0;
    ///
    /// let run = maximiser.maximise_ad(f, 2.5).unwrap();
    /// assert!(run.verdict.is_accepted());
    /// ```
    pub fn maximise_ad<F>(&self, f: F, x0: f64) -> Result<NewtonRun<f64>, NewtonError>
    where
        F: Fn(num_dual::Dual2_64) -> num_dual::Dual2_64,
    {
        use num_dual::Dual2_64;

        if self.config.iterations < 1 {
            return Err(NewtonError::from(MaximiseError::InvalidIterationCount {
                requested: self.config.iterations,
            }));
        }

        let mut steps = Vec::with_capacity(self.config.iterations);
        let mut x = x0;
        let epsilon = 1e-30;

        for iteration in 1..=self.config.iterations {
            // Seed the first-order component; one sweep yields value,
            // slope and curvature
            let x_dual = Dual2_64::new(x, 1.0, 0.0);
            let f_dual = f(x_dual);
            let slope = f_dual.v1;
            let curvature = f_dual.v2;

            if curvature.abs() < epsilon {
                return Err(NewtonError::new(
                    MaximiseError::DivisionByZero { iteration, x },
                    steps,
                ));
            }

            let x_new = x - slope / curvature;

            if !x_new.is_finite() {
                return Err(NewtonError::new(
                    MaximiseError::NumericalInstability(
                        "Newton iteration produced non-finite iterate".to_string(),
                    ),
                    steps,
                ));
            }

            let relative_error = ((x_new - x) / x_new).abs();
            steps.push(NewtonStep {
                index: iteration,
                x: x_new,
                relative_error,
            });

            x = x_new;
        }

        let f_dual = f(Dual2_64::new(x, 1.0, 0.0));
        let slope = f_dual.v1;
        let verdict = if slope.abs() <= ACCEPTANCE_THRESHOLD {
            NewtonVerdict::Accepted {
                slope,
                maximum: f_dual.re,
            }
        } else {
            NewtonVerdict::Rejected { slope }
        };

        Ok(NewtonRun {
            steps,
            x,
            verdict,
            precision: self.config.precision,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn humped_sine() -> (
        impl Fn(f64) -> f64,
        impl Fn(f64) -> f64,
        impl Fn(f64) -> f64,
    ) {
        (
            |x: f64| 2.0 * x.sin() - x * x / 10.0,
            |x: f64| 2.0 * x.cos() - x / 5.0,
            |x: f64| -2.0 * x.sin() - 0.2,
        )
    }

    // ========================================
    // Basic Functionality Tests
    // ========================================

    #[test]
    fn test_quadratic_vertex_in_one_step() {
        let maximiser = NewtonMaximiser::new(RunConfig::new(1, 3));

        // f(x) = 4 - (x - 2)² has its maximum at x = 2
        let f = |x: f64| 4.0 - (x - 2.0) * (x - 2.0);
        let df = |x: f64| -2.0 * (x - 2.0);
        let ddf = |_x: f64| -2.0;

        let run = maximiser.maximise(f, df, ddf, 0.0).unwrap();
        assert_eq!(run.steps.len(), 1);
        assert_relative_eq!(run.x, 2.0, epsilon = 1e-12);
        assert!(run.verdict.is_accepted());
        assert_relative_eq!(run.verdict.maximum().unwrap(), 4.0, epsilon = 1e-12);
    }

    #[test]
    fn test_humped_sine_three_steps() {
        let maximiser = NewtonMaximiser::new(RunConfig::coarse());
        let (f, df, ddf) = humped_sine();

        let run = maximiser.maximise(f, df, ddf, 2.5).unwrap();

        assert_eq!(run.steps.len(), 3);
        assert!(run.verdict.is_accepted());
        assert_relative_eq!(run.x, 1.4276, epsilon = 1e-3);
        assert_relative_eq!(run.verdict.maximum().unwrap(), 1.7757, epsilon = 1e-3);
    }

    #[test]
    fn test_step_records_are_ordered_and_indexed() {
        let maximiser = NewtonMaximiser::new(RunConfig::coarse());
        let (f, df, ddf) = humped_sine();

        let run = maximiser.maximise(f, df, ddf, 2.5).unwrap();

        for (position, step) in run.steps.iter().enumerate() {
            assert_eq!(step.index, position + 1, "Indices should be 1-based");
        }
        assert_relative_eq!(run.steps[0].x, 0.9951, epsilon = 1e-4);
        assert_relative_eq!(run.steps[0].relative_error, 1.5124, epsilon = 1e-4);
    }

    #[test]
    fn test_relative_errors_shrink_near_maximum() {
        let maximiser = NewtonMaximiser::new(RunConfig::coarse());
        let (f, df, ddf) = humped_sine();

        let run = maximiser.maximise(f, df, ddf, 2.5).unwrap();

        for pair in run.steps.windows(2) {
            assert!(
                pair[1].relative_error < pair[0].relative_error,
                "Relative error should shrink: {} then {}",
                pair[0].relative_error,
                pair[1].relative_error
            );
        }
    }

    #[test]
    fn test_objective_evaluated_only_on_acceptance() {
        use std::cell::Cell;

        let calls = Cell::new(0usize);
        let f = |x: f64| {
            calls.set(calls.get() + 1);
            4.0 - (x - 2.0) * (x - 2.0)
        };
        let df = |x: f64| -2.0 * (x - 2.0);
        let ddf = |_x: f64| -2.0;

        // Accepted: the objective is evaluated exactly once, for the verdict
        let maximiser = NewtonMaximiser::new(RunConfig::new(1, 3));
        let run = maximiser.maximise(&f, df, ddf, 0.0).unwrap();
        assert!(run.verdict.is_accepted());
        assert_eq!(calls.get(), 1);

        // Rejected: the objective is never evaluated
        calls.set(0);
        let (hump, dhump, ddhump) = humped_sine();
        let counting_hump = |x: f64| {
            calls.set(calls.get() + 1);
            hump(x)
        };
        let run = maximiser.maximise(counting_hump, dhump, ddhump, 2.5).unwrap();
        assert!(!run.verdict.is_accepted());
        assert_eq!(calls.get(), 0);
    }

    // ========================================
    // Verdict Tests
    // ========================================

    #[test]
    fn test_rejected_after_single_step() {
        // One step from 2.5 lands near x = 0.995, where the slope is still
        // around 0.89 — far outside the acceptance bound
        let maximiser = NewtonMaximiser::new(RunConfig::new(1, 3));
        let (f, df, ddf) = humped_sine();

        let run = maximiser.maximise(f, df, ddf, 2.5).unwrap();

        assert!(!run.verdict.is_accepted());
        assert_eq!(run.verdict.maximum(), None);
        assert!(run.verdict.slope().abs() > ACCEPTANCE_THRESHOLD);
    }

    #[test]
    fn test_acceptance_threshold_is_inclusive() {
        let maximiser = NewtonMaximiser::new(RunConfig::new(1, 3));

        // Slope sits exactly on the bound after the step
        let run = maximiser
            .maximise(|_x: f64| 42.0, |_x| 0.01, |_x| -1.0, 0.0)
            .unwrap();
        assert!(run.verdict.is_accepted(), "|f'| == 0.01 should be accepted");
        assert_eq!(run.verdict.maximum(), Some(42.0));

        // Just outside the bound
        let run = maximiser
            .maximise(|_x: f64| 42.0, |_x| 0.0100001, |_x| -1.0, 0.0)
            .unwrap();
        assert!(!run.verdict.is_accepted());
    }

    #[test]
    fn test_verdict_accessors() {
        let accepted: NewtonVerdict<f64> = NewtonVerdict::Accepted {
            slope: 0.001,
            maximum: 1.776,
        };
        assert!(accepted.is_accepted());
        assert_eq!(accepted.maximum(), Some(1.776));
        assert_eq!(accepted.slope(), 0.001);

        let rejected: NewtonVerdict<f64> = NewtonVerdict::Rejected { slope: 0.89 };
        assert!(!rejected.is_accepted());
        assert_eq!(rejected.maximum(), None);
        assert_eq!(rejected.slope(), 0.89);
    }

    // ========================================
    // Error Handling Tests
    // ========================================

    #[test]
    fn test_zero_curvature_at_first_iteration() {
        let maximiser = NewtonMaximiser::new(RunConfig::coarse());

        // Flat objective: curvature identically zero
        let err = maximiser
            .maximise(|_x: f64| 1.0, |_x| 0.0, |_x| 0.0, 0.5)
            .unwrap_err();

        assert_eq!(
            err.kind,
            MaximiseError::DivisionByZero {
                iteration: 1,
                x: 0.5
            }
        );
        assert!(err.steps.is_empty());
    }

    #[test]
    fn test_division_by_zero_mid_run_keeps_partial_trace() {
        let maximiser = NewtonMaximiser::new(RunConfig::coarse());

        // Curvature collapses once the iterate passes 2.5
        let df = |_x: f64| 1.0;
        let ddf = |x: f64| if x < 2.5 { -1.0 } else { 0.0 };

        let err = maximiser
            .maximise(|_x: f64| 0.0, df, ddf, 2.0)
            .unwrap_err();

        assert!(err.is_division_by_zero());
        match err.kind {
            MaximiseError::DivisionByZero { iteration, x } => {
                assert_eq!(iteration, 2);
                assert_relative_eq!(x, 3.0, epsilon = 1e-12);
            }
            other => panic!("Expected DivisionByZero, got {:?}", other),
        }
        assert_eq!(err.steps.len(), 1);
        assert_eq!(err.steps[0].index, 1);
        assert_relative_eq!(err.steps[0].x, 3.0, epsilon = 1e-12);
    }

    #[test]
    fn test_overflowing_step_is_numerical_instability() {
        let maximiser = NewtonMaximiser::new(RunConfig::new(1, 3));

        // Slope at f64::MAX against tiny (but not guarded) curvature
        // overflows the update to -infinity
        let err = maximiser
            .maximise(|_x: f64| 0.0, |_x| f64::MAX, |_x| 1e-10, 0.0)
            .unwrap_err();

        assert!(err.is_numerical_instability());
        assert!(err.steps.is_empty());
    }

    #[test]
    fn test_zero_iterations_rejected() {
        let maximiser = NewtonMaximiser::new(RunConfig::new(0, 3));

        let err = maximiser
            .maximise(|x: f64| -x * x, |x| -2.0 * x, |_x| -2.0, 1.0)
            .unwrap_err();

        assert_eq!(err.kind, MaximiseError::InvalidIterationCount { requested: 0 });
        assert!(err.steps.is_empty());
    }

    #[test]
    fn test_zero_iterate_records_infinite_relative_error() {
        let maximiser = NewtonMaximiser::new(RunConfig::new(1, 3));

        // f(x) = -x²/2 steps from 3 exactly onto its vertex at 0
        let run = maximiser
            .maximise(|x: f64| -x * x / 2.0, |x| -x, |_x| -1.0, 3.0)
            .unwrap();

        assert_eq!(run.x, 0.0);
        assert!(run.steps[0].relative_error.is_infinite());
        assert!(run.verdict.is_accepted());
    }

    // ========================================
    // Configuration Tests
    // ========================================

    #[test]
    fn test_with_defaults() {
        let maximiser = NewtonMaximiser::with_defaults();

        let run = maximiser
            .maximise(|x: f64| -x * x, |x| -2.0 * x, |_x| -2.0, 5.0)
            .unwrap();
        assert_eq!(run.steps.len(), 1);
        assert_eq!(run.precision, 3);
    }

    #[test]
    fn test_config_accessor() {
        let maximiser = NewtonMaximiser::new(RunConfig::new(8, 4));
        assert_eq!(maximiser.config().iterations, 8);
        assert_eq!(maximiser.config().precision, 4);
    }

    #[test]
    fn test_clone() {
        let maximiser = NewtonMaximiser::new(RunConfig::fine());
        let cloned = maximiser.clone();
        assert_eq!(maximiser.config(), cloned.config());
    }

    #[test]
    fn test_with_f32() {
        let maximiser = NewtonMaximiser::new(RunConfig::new(1, 3));

        let f = |x: f32| 4.0 - (x - 2.0) * (x - 2.0);
        let df = |x: f32| -2.0 * (x - 2.0);
        let ddf = |_x: f32| -2.0;

        let run = maximiser.maximise(f, df, ddf, 0.0_f32).unwrap();
        assert!((run.x - 2.0).abs() < 1e-5);
        assert!(run.verdict.is_accepted());
    }

    // ========================================
    // AD Mode Tests
    // ========================================

    #[cfg(feature = "num-dual-mode")]
    mod ad_tests {
        use super::*;
        use num_dual::{Dual2_64, DualNum};

        #[test]
        fn test_maximise_ad_humped_sine() {
            let maximiser = NewtonMaximiser::new(RunConfig::coarse());

            let f = |x: Dual2_64| x.sin() * 2.0 - x * x / 10.0;

            let run = maximiser.maximise_ad(f, 2.5).unwrap();
            assert_eq!(run.steps.len(), 3);
            assert!(run.verdict.is_accepted());
            assert_relative_eq!(run.x, 1.4276, epsilon = 1e-3);
        }

        #[test]
        fn test_ad_matches_explicit() {
            let maximiser = NewtonMaximiser::new(RunConfig::coarse());
            let (f, df, ddf) = humped_sine();

            let explicit = maximiser.maximise(f, df, ddf, 2.5).unwrap();
            let ad = maximiser
                .maximise_ad(|x: Dual2_64| x.sin() * 2.0 - x * x / 10.0, 2.5)
                .unwrap();

            assert_relative_eq!(explicit.x, ad.x, epsilon = 1e-12);
            assert_eq!(explicit.verdict.is_accepted(), ad.verdict.is_accepted());
            for (a, b) in explicit.steps.iter().zip(ad.steps.iter()) {
                assert_relative_eq!(a.x, b.x, epsilon = 1e-12);
                assert_relative_eq!(a.relative_error, b.relative_error, epsilon = 1e-9);
            }
        }

        #[test]
        fn test_ad_linear_objective_has_zero_curvature() {
            let maximiser = NewtonMaximiser::new(RunConfig::new(3, 3));

            // Linear objective: second dual component is identically zero
            let err = maximiser.maximise_ad(|x: Dual2_64| x, 1.0).unwrap_err();
            assert!(err.is_division_by_zero());
        }
    }

    // ========================================
    // Property-Based Tests
    // ========================================

    #[cfg(test)]
    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        // Vertex positions and scales for random concave quadratics
        fn vertex_strategy() -> impl Strategy<Value = f64> {
            -100.0..100.0
        }

        fn scale_strategy() -> impl Strategy<Value = f64> {
            0.1..50.0
        }

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(1000))]

            #[test]
            fn test_quadratic_lands_on_vertex(
                m in vertex_strategy(),
                a in scale_strategy(),
                x0 in vertex_strategy()
            ) {
                let maximiser = NewtonMaximiser::new(RunConfig::new(1, 3));
                let run = maximiser.maximise(
                    |x: f64| -a * (x - m) * (x - m),
                    |x: f64| -2.0 * a * (x - m),
                    |_x: f64| -2.0 * a,
                    x0,
                ).unwrap();

                assert!(
                    (run.x - m).abs() <= 1e-9 * (1.0 + m.abs()),
                    "One Newton step on a quadratic should land on the vertex: got {}, want {}",
                    run.x,
                    m
                );
                assert!(run.verdict.is_accepted());
            }

            #[test]
            fn test_runs_are_deterministic(x0 in vertex_strategy()) {
                let maximiser = NewtonMaximiser::new(RunConfig::coarse());
                let f = |x: f64| -(x - 2.0) * (x - 2.0);
                let df = |x: f64| -2.0 * (x - 2.0);
                let ddf = |_x: f64| -2.0;

                let first = maximiser.maximise(f, df, ddf, x0).unwrap();
                let second = maximiser.maximise(f, df, ddf, x0).unwrap();
                assert_eq!(first, second);
            }

            #[test]
            fn test_step_count_matches_budget(n in 1usize..32) {
                let maximiser = NewtonMaximiser::new(RunConfig::new(n, 3));
                let run = maximiser.maximise(
                    |x: f64| -x * x,
                    |x: f64| -2.0 * x,
                    |_x: f64| -2.0,
                    5.0,
                ).unwrap();

                assert_eq!(run.steps.len(), n);
                assert_eq!(run.steps.last().unwrap().index, n);
            }
        }
    }

    // Serde tests (feature-gated)
    #[cfg(feature = "serde")]
    mod serde_tests {
        use super::*;

        #[test]
        fn test_newton_run_serde_roundtrip() {
            let maximiser = NewtonMaximiser::new(RunConfig::coarse());
            let (f, df, ddf) = humped_sine();
            let run = maximiser.maximise(f, df, ddf, 2.5).unwrap();

            let json = serde_json::to_string(&run).unwrap();
            let deserialized: NewtonRun<f64> = serde_json::from_str(&json).unwrap();
            assert_eq!(run, deserialized);
        }
    }
}
