//! Routine configuration.

use crate::error::ConfigError;
use crate::vector::vector_bytes;

/// Configuration for one run of the vector addition routine.
///
/// The process entry point always uses [`RoutineConfig::default`]; other
/// lengths exist so tests and benchmarks can run the same code on small
/// vectors.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoutineConfig {
    /// Number of `f64` elements in each of the three vectors.
    ///
    /// Default: 100_000_000 (800MB per vector).
    pub len: usize,
}

impl RoutineConfig {
    /// Fixed vector length used by the binary: `1e8` as an integer count.
    pub const VECTOR_LEN: usize = 100_000_000;

    /// Create a config for vectors of `len` elements.
    pub fn new(len: usize) -> Self {
        Self { len }
    }

    /// Check that the length is non-zero and its byte size is representable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.len == 0 {
            return Err(ConfigError::EmptyVector);
        }
        self.vector_bytes()?;
        Ok(())
    }

    /// Bytes occupied by a single vector.
    pub fn vector_bytes(&self) -> Result<usize, ConfigError> {
        vector_bytes(self.len).ok_or(ConfigError::SizeOverflow { len: self.len })
    }

    /// Bytes occupied by all three vectors at once, saturating at `u64::MAX`.
    pub fn total_bytes(&self) -> Result<u64, ConfigError> {
        let per_vector = self.vector_bytes()? as u64;
        Ok(per_vector.saturating_mul(3))
    }
}

impl Default for RoutineConfig {
    fn default() -> Self {
        Self::new(Self::VECTOR_LEN)
    }
}
