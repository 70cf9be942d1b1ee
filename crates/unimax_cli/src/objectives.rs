//! Built-in objectives for the command line
//!
//! Objectives are code, not parsed expressions: each registry entry carries
//! the objective together with hand-coded first and second derivatives as
//! plain function pointers, so every command works without a symbolic
//! differentiation layer.

use crate::{CliError, Result};

/// A named objective with its value, slope and curvature functions.
#[derive(Debug)]
pub struct Objective {
    /// Registry name used for `--objective` lookups
    pub name: &'static str,
    /// One-line description for logs and error messages
    pub summary: &'static str,
    /// Objective value f(x)
    pub f: fn(f64) -> f64,
    /// First derivative f'(x)
    pub df: fn(f64) -> f64,
    /// Second derivative f''(x)
    pub ddf: fn(f64) -> f64,
}

fn sine_hump(x: f64) -> f64 {
    2.0 * x.sin() - x * x / 10.0
}

fn sine_hump_slope(x: f64) -> f64 {
    2.0 * x.cos() - x / 5.0
}

fn sine_hump_curvature(x: f64) -> f64 {
    -2.0 * x.sin() - 0.2
}

fn parabola(x: f64) -> f64 {
    4.0 - (x - 2.0) * (x - 2.0)
}

fn parabola_slope(x: f64) -> f64 {
    -2.0 * (x - 2.0)
}

fn parabola_curvature(_x: f64) -> f64 {
    -2.0
}

/// Registry of built-in objectives.
pub const OBJECTIVES: &[Objective] = &[
    Objective {
        name: "sine-hump",
        summary: "f(x) = 2 sin(x) - x^2/10, single maximum near x = 1.4276",
        f: sine_hump,
        df: sine_hump_slope,
        ddf: sine_hump_curvature,
    },
    Objective {
        name: "parabola",
        summary: "f(x) = 4 - (x - 2)^2, maximum at x = 2",
        f: parabola,
        df: parabola_slope,
        ddf: parabola_curvature,
    },
];

/// Looks up an objective by registry name.
///
/// Unknown names report the full list of supported objectives so the user
/// can correct the spelling without consulting the docs.
pub fn lookup(name: &str) -> Result<&'static Objective> {
    OBJECTIVES
        .iter()
        .find(|objective| objective.name == name)
        .ok_or_else(|| {
            let known: Vec<&str> = OBJECTIVES.iter().map(|objective| objective.name).collect();
            CliError::InvalidArgument(format!(
                "Unknown objective: {}. Supported: {}",
                name,
                known.join(", ")
            ))
        })
}
