//! # unimax_core: Univariate Maximisation Kernel
//!
//! ## Layer 1 (Kernel) Role
//!
//! unimax_core is the bottom layer of the 3-layer architecture, providing:
//! - Newton's method maximiser with explicit or automatic derivatives
//!   (`math::maximisers::newton`)
//! - Golden-section bracket maximiser (`math::maximisers::golden_section`)
//! - Per-run configuration (`math::maximisers::config`)
//! - Structured error types (`types::error`)
//!
//! Each run produces a record of its iterations alongside the numerical
//! outcome. The kernel never prints and never rounds: rendering of those
//! records (fixed decimal places, table layout) belongs to the layer above.
//!
//! ## Minimal Dependency Principle
//!
//! Layer 1 has no dependencies on other unimax_* crates, with minimal
//! external dependencies:
//! - num-traits: Traits for generic numerical computation
//! - num-dual: Second-order dual numbers for automatic differentiation (optional)
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use unimax_core::math::maximisers::{NewtonMaximiser, RunConfig};
//!
//! // Maximise f(x) = 4 - (x - 2)² from x0 = 0
//! let maximiser = NewtonMaximiser::new(RunConfig::new(3, 3));
//!
//! let f = |x: f64| 4.0 - (x - 2.0) * (x - 2.0);
//! let df = |x: f64| -2.0 * (x - 2.0);
//! let ddf = |_x: f64| -2.0;
//!
//! let run = maximiser.maximise(f, df, ddf, 0.0).unwrap();
//! assert!(run.verdict.is_accepted());
//! assert!((run.x - 2.0).abs() < 1e-12);
//! ```
//!
//! ## Feature Flags
//!
//! - `num-dual-mode` (default): Derive slope and curvature from a single
//!   closure over second-order dual numbers
//! - `serde`: Enable serialisation for iteration records and errors

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod math;
pub mod types;
