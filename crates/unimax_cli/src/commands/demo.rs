//! Demo command implementation
//!
//! Reproduces the canonical side-by-side session: three Newton iterations
//! from x0 = 2.5 at three decimal places, then eight golden-section
//! iterations over [0, 4] at four decimal places, both maximising the
//! sine-hump objective f(x) = 2 sin(x) - x^2/10.

use tracing::info;
use unimax_core::math::maximisers::{GoldenSectionMaximiser, NewtonMaximiser, RunConfig};
use unimax_report::{golden_table, newton_trace};

use crate::objectives;
use crate::Result;

/// Runs the canonical demo session and prints both traces.
pub fn run() -> Result<()> {
    info!("Running the canonical maximisation session");

    let target = objectives::lookup("sine-hump")?;

    let newton = NewtonMaximiser::new(RunConfig::new(3, 3));
    let newton_run = newton.maximise(target.f, target.df, target.ddf, 2.5)?;

    let golden = GoldenSectionMaximiser::new(RunConfig::new(8, 4));
    let golden_run = golden.maximise(target.f, 0.0, 4.0)?;

    println!();
    println!();
    println!("Newton's Method :");
    println!("_________________");
    println!("{}", newton_trace(&newton_run));
    println!("_________________");

    println!();
    println!();
    println!("Golden Section Method :");
    println!("_______________________");
    println!();
    println!("{}", golden_table(&golden_run));
    println!("_________________");

    Ok(())
}
