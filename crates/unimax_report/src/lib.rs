//! # unimax_report
//!
//! Trace and table rendering for unimax maximisation runs.
//!
//! The kernel deliberately reports runs as data; this crate turns those
//! records into the fixed-width text traces callers print. Rendering is
//! pure string construction — no I/O, no rounding of the underlying run,
//! and every function is total.
//!
//! ## Architecture Position
//!
//! Layer 2 of the 3-layer architecture. Depends on `unimax_core` (L1) and
//! is consumed by the command-line front end (L3).
//!
//! ## Layouts
//!
//! - Newton runs render one `x<i> = <value>, relative error = <value>` line
//!   per step, then a verdict: either the slope line marked
//!   `(acceptably small)` followed by the `fmax` line, or a rejection line.
//! - Golden-section runs render a `|`-separated table whose column width is
//!   twice the run's decimal precision.
//!
//! ## Example
//!
//! ```
//! use unimax_core::math::maximisers::{NewtonMaximiser, RunConfig};
//! use unimax_report::newton_trace;
//!
//! let maximiser = NewtonMaximiser::new(RunConfig::new(1, 3));
//! let run = maximiser
//!     .maximise(|x: f64| -x * x, |x| -2.0 * x, |_x| -2.0, 1.0)
//!     .unwrap();
//!
//! let trace = newton_trace(&run);
//! assert!(trace.starts_with("x1 = 0.000, relative error = inf"));
//! ```

use num_traits::Float;
use unimax_core::math::maximisers::{GoldenRun, NewtonRun, NewtonStep, NewtonVerdict};

/// Column labels of the golden-section table, in rendering order.
const GOLDEN_HEADER: [&str; 9] = [
    "i", "xl", "x2", "x1", "xu", "fx2", "fx1", "xu-xl", "errBound",
];

fn display_value<T: Float>(x: T) -> f64 {
    x.to_f64().unwrap_or(f64::NAN)
}

/// Render Newton iteration lines, one per step.
///
/// Both the iterate and its relative error are shown with `precision`
/// decimal places. Also suits the partial traces carried by
/// [`NewtonError`](unimax_core::types::NewtonError), where the run never
/// reached a verdict.
///
/// # Example
///
/// ```
/// use unimax_core::math::maximisers::NewtonStep;
/// use unimax_report::newton_steps;
///
/// let steps = [NewtonStep { index: 1, x: 0.995, relative_error: 1.512 }];
/// assert_eq!(newton_steps(&steps, 3), "x1 = 0.995, relative error = 1.512");
/// ```
pub fn newton_steps(steps: &[NewtonStep], precision: usize) -> String {
    steps
        .iter()
        .map(|step| {
            format!(
                "x{} = {:.prec$}, relative error = {:.prec$}",
                step.index,
                step.x,
                step.relative_error,
                prec = precision
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render a complete Newton run: step lines, a blank line, then the verdict.
///
/// An accepted run shows the slope at the final iterate with the
/// `(acceptably small)` note, a blank line, and the maximum; a rejected run
/// shows the rejection line. All values use the precision carried by the
/// run.
pub fn newton_trace<T: Float>(run: &NewtonRun<T>) -> String {
    let prec = run.precision;
    let x = display_value(run.x);

    let verdict = match &run.verdict {
        NewtonVerdict::Accepted { slope, maximum } => format!(
            "f'({x:.prec$}) = {slope:.prec$}  (acceptably small)\n\nfmax = f({x:.prec$}) = {maximum:.prec$}",
            x = x,
            slope = display_value(*slope),
            maximum = display_value(*maximum),
            prec = prec
        ),
        NewtonVerdict::Rejected { .. } => format!("{:.prec$} is rejected", x, prec = prec),
    };

    format!("{}\n\n{}", newton_steps(&run.steps, prec), verdict)
}

/// Render a golden-section run as a `|`-separated table.
///
/// The header row lists `i, xl, x2, x1, xu, fx2, fx1, xu-xl, errBound`;
/// one data row follows per iteration. Every cell is right-aligned in a
/// column `2 × precision` characters wide; numeric cells carry `precision`
/// decimal places while the index stays unformatted. Cells wider than the
/// column expand rather than truncate.
///
/// # Example
///
/// ```
/// use unimax_core::math::maximisers::{GoldenSectionMaximiser, RunConfig};
/// use unimax_report::golden_table;
///
/// let maximiser = GoldenSectionMaximiser::new(RunConfig::new(2, 4));
/// let run = maximiser.maximise(|x: f64| -(x - 1.0) * (x - 1.0), 0.0, 2.0).unwrap();
///
/// let table = golden_table(&run);
/// assert_eq!(table.lines().count(), 3);
/// assert!(table.lines().next().unwrap().contains("errBound"));
/// ```
pub fn golden_table<T>(run: &GoldenRun<T>) -> String {
    let prec = run.precision;
    let column = 2 * prec;
    let mut lines = Vec::with_capacity(run.rows.len() + 1);

    let header: Vec<String> = GOLDEN_HEADER
        .iter()
        .map(|label| format!("{:>column$}", label, column = column))
        .collect();
    lines.push(format!("|{}|", header.join("|")));

    for row in &run.rows {
        let mut cells = Vec::with_capacity(GOLDEN_HEADER.len());
        cells.push(format!("{:>column$}", row.index, column = column));
        for value in [
            row.xl,
            row.x2,
            row.x1,
            row.xu,
            row.fx2,
            row.fx1,
            row.width,
            row.error_bound,
        ] {
            cells.push(format!(
                "{:>column$.prec$}",
                value,
                column = column,
                prec = prec
            ));
        }
        lines.push(format!("|{}|", cells.join("|")));
    }

    lines.join("\n")
}
