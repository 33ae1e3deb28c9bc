//! Configuration error types.

use thiserror::Error;

/// Errors from [`RoutineConfig::validate`](crate::RoutineConfig::validate).
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The vectors would have no elements, so there is nothing to add
    /// and no last iteration at which to release the inputs.
    #[error("vector length must be at least 1")]
    EmptyVector,
    /// `len * size_of::<f64>()` does not fit in a single allocation.
    #[error("vector of {len} f64 elements exceeds the maximum allocation size")]
    SizeOverflow {
        /// The requested element count.
        len: usize,
    },
}
