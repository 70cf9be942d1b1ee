//! Golden-section search command implementation

use tracing::info;
use unimax_core::math::maximisers::{GoldenSectionMaximiser, RunConfig};
use unimax_report::golden_table;

use crate::objectives;
use crate::Result;

/// Runs golden-section search against a registered objective and prints the
/// iteration table.
pub fn run(
    objective: &str,
    lower: f64,
    upper: f64,
    iterations: usize,
    precision: usize,
) -> Result<()> {
    let target = objectives::lookup(objective)?;

    info!("Maximising '{}' with golden-section search", target.name);
    info!("  Objective: {}", target.summary);
    info!("  Bracket: [{}, {}]", lower, upper);
    info!("  Iterations: {}", iterations);
    info!("  Precision: {} decimal places", precision);

    let maximiser = GoldenSectionMaximiser::new(RunConfig::new(iterations, precision));
    let run = maximiser.maximise(target.f, lower, upper)?;

    info!(
        "Bracket narrowed to [{:.prec$}, {:.prec$}]",
        run.lower,
        run.upper,
        prec = precision
    );
    println!("{}", golden_table(&run));
    Ok(())
}
