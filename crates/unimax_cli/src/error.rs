//! CLI error types

use thiserror::Error;
use unimax_core::types::{MaximiseError, NewtonError};

/// Errors surfaced by the `unimax` command line.
#[derive(Error, Debug)]
pub enum CliError {
    /// A command argument failed validation
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A golden-section run failed before any iterations completed
    #[error("Maximisation failed: {0}")]
    Maximise(#[from] MaximiseError),

    /// A Newton run failed, possibly mid-iteration
    #[error("Newton run failed: {0}")]
    Newton(#[from] NewtonError),
}

/// Convenience alias for CLI results.
pub type Result<T> = std::result::Result<T, CliError>;
