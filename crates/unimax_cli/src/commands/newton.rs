//! Newton's method command implementation

use tracing::{info, warn};
use unimax_core::math::maximisers::{NewtonMaximiser, RunConfig};
use unimax_report::{newton_steps, newton_trace};

use crate::objectives;
use crate::Result;

/// Runs Newton's method against a registered objective and prints the trace.
pub fn run(objective: &str, guess: f64, iterations: usize, precision: usize) -> Result<()> {
    let target = objectives::lookup(objective)?;

    info!("Maximising '{}' with Newton's method", target.name);
    info!("  Objective: {}", target.summary);
    info!("  Initial guess: {}", guess);
    info!("  Iterations: {}", iterations);
    info!("  Precision: {} decimal places", precision);

    let maximiser = NewtonMaximiser::new(RunConfig::new(iterations, precision));
    match maximiser.maximise(target.f, target.df, target.ddf, guess) {
        Ok(run) => {
            if run.verdict.is_accepted() {
                info!("Slope cleared the acceptance threshold");
            } else {
                warn!("Final iterate rejected; consider more iterations or a closer guess");
            }
            println!("{}", newton_trace(&run));
            Ok(())
        }
        Err(err) => {
            if !err.steps.is_empty() {
                warn!(
                    "Run failed after {} completed iterations; partial trace follows",
                    err.steps.len()
                );
                println!("{}", newton_steps(&err.steps, precision));
            }
            Err(err.into())
        }
    }
}
