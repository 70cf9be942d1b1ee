//! Maximiser run configuration.

/// Configuration for a maximisation run.
///
/// Replaces ambient run state with an explicit per-run value: every run is
/// fully described by its inputs plus one `RunConfig`, so repeated runs with
/// equal inputs produce identical records.
///
/// The iteration budget is *exact*, not a ceiling — both maximisers perform
/// precisely `iterations` refinement iterations. `precision` does not affect
/// the numerics at all; it rides along into the run record so the rendering
/// layer knows how many decimal places the trace should show.
///
/// # Validation
///
/// `iterations` must be at least 1. The check happens at run entry, where a
/// bad count surfaces as
/// [`MaximiseError::InvalidIterationCount`](crate::types::MaximiseError::InvalidIterationCount)
/// rather than a panic, since a zero budget is caller input, not a
/// programming bug.
///
/// # Example
///
/// ```
/// use unimax_core::math::maximisers::RunConfig;
///
/// let config = RunConfig::default();
/// assert_eq!(config.iterations, 1);
/// assert_eq!(config.precision, 3);
///
/// let custom = RunConfig::new(8, 4);
/// assert_eq!(custom.iterations, 8);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunConfig {
    /// Number of refinement iterations to perform, exactly (minimum 1)
    pub iterations: usize,

    /// Decimal places used when the run's trace is rendered
    pub precision: usize,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            iterations: 1,
            precision: 3,
        }
    }
}

impl RunConfig {
    /// Create a new run configuration.
    ///
    /// # Arguments
    ///
    /// * `iterations` - Exact number of refinement iterations
    /// * `precision` - Decimal places for the rendered trace
    pub fn new(iterations: usize, precision: usize) -> Self {
        Self {
            iterations,
            precision,
        }
    }

    /// Coarse preset: 3 iterations, 3 decimal places.
    ///
    /// Suits quick Newton refinements from a good starting guess.
    pub fn coarse() -> Self {
        Self {
            iterations: 3,
            precision: 3,
        }
    }

    /// Fine preset: 8 iterations, 4 decimal places.
    ///
    /// Suits golden-section narrowing of a wide bracket.
    pub fn fine() -> Self {
        Self {
            iterations: 8,
            precision: 4,
        }
    }
}
