//! Shared types for the maximisation kernel.
//!
//! This module provides:
//! - `error`: Structured error types for maximisation runs
//!
//! # Re-exports
//!
//! For convenience, commonly used types are re-exported at this module level:
//! - [`MaximiseError`], [`NewtonError`] from `error`

pub mod error;

// Re-export commonly used types at module level
pub use error::{MaximiseError, NewtonError};
