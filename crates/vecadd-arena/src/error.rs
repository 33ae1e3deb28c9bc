//! Arena-specific error types.

use thiserror::Error;
use vecadd_core::VectorRole;

/// Errors that can occur while obtaining vector storage.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ArenaError {
    /// The byte size of the vector does not fit in a single allocation.
    #[error("vector {role}: {len} f64 elements overflow the allocation size")]
    SizeOverflow {
        /// Which vector was being allocated.
        role: VectorRole,
        /// Requested element count.
        len: usize,
    },
    /// The allocator could not provide the requested memory.
    #[error("vector {role}: failed to allocate {requested_bytes} bytes")]
    AllocationFailed {
        /// Which vector was being allocated.
        role: VectorRole,
        /// Number of bytes requested.
        requested_bytes: usize,
    },
}

impl ArenaError {
    /// The vector whose allocation failed.
    pub fn role(&self) -> VectorRole {
        match self {
            Self::SizeOverflow { role, .. } | Self::AllocationFailed { role, .. } => *role,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_vector() {
        let err = ArenaError::AllocationFailed {
            role: VectorRole::InputB,
            requested_bytes: 800_000_000,
        };
        assert_eq!(err.to_string(), "vector B: failed to allocate 800000000 bytes");
        assert_eq!(err.role(), VectorRole::InputB);
    }
}
