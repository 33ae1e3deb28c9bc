//! Routine error types.

use std::io;

use thiserror::Error;
use vecadd_arena::ArenaError;
use vecadd_core::{ConfigError, Mismatch};

/// Errors that end a run of the routine. None of them are recoverable.
#[derive(Debug, Error)]
pub enum RoutineError {
    /// The configuration was rejected before any memory was requested.
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    /// One of the three vectors could not be allocated.
    #[error("allocation failed: {0}")]
    Allocation(#[from] ArenaError),
    /// An output element did not equal the expected sum. Carries only the
    /// first offending element.
    #[error(transparent)]
    Mismatch(#[from] Mismatch),
    /// The console result could not be written.
    #[error("failed to write result: {0}")]
    Output(#[from] io::Error),
}

impl RoutineError {
    /// Process exit status for this error.
    pub fn exit_code(&self) -> u8 {
        1
    }

    /// `true` if this error already produced its console diagnostic.
    pub fn is_reported(&self) -> bool {
        matches!(self, Self::Mismatch(_))
    }
}
