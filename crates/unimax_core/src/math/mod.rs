//! Numerical algorithms for univariate maximisation.
//!
//! This module provides:
//! - `maximisers`: Newton's method and golden-section search over a single
//!   real variable

pub mod maximisers;
