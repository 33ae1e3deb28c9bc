//! Fallibly allocated `f64` vectors.
//!
//! A [`VectorBuffer`] owns exactly `len` elements for its whole life. The
//! storage is obtained with `try_reserve_exact`, so an out-of-memory
//! condition is an [`ArenaError`] rather than an abort, and it is released
//! exactly once: either through [`VectorBuffer::release`] or on drop.

use tracing::trace;
use vecadd_core::{vector_bytes, VectorRole};

use crate::error::ArenaError;
use crate::ledger::ArenaLedger;

/// A fixed-length heap vector of `f64` registered with an [`ArenaLedger`].
pub struct VectorBuffer {
    role: VectorRole,
    /// Backing storage. Length equals capacity and never changes.
    data: Vec<f64>,
    ledger: ArenaLedger,
}

impl VectorBuffer {
    /// Allocate `len` zero-initialised elements for `role`.
    ///
    /// The byte size is computed with checked arithmetic before anything is
    /// requested from the allocator.
    pub fn allocate(role: VectorRole, len: usize, ledger: &ArenaLedger) -> Result<Self, ArenaError> {
        let requested_bytes = vector_bytes(len).ok_or(ArenaError::SizeOverflow { role, len })?;

        let mut data: Vec<f64> = Vec::new();
        data.try_reserve_exact(len)
            .map_err(|_| ArenaError::AllocationFailed {
                role,
                requested_bytes,
            })?;
        data.resize(len, 0.0);

        ledger.record_alloc(requested_bytes);
        trace!(%role, len, bytes = requested_bytes, "vector allocated");
        Ok(Self {
            role,
            data,
            ledger: ledger.clone(),
        })
    }

    /// Which routine vector this buffer holds.
    pub fn role(&self) -> VectorRole {
        self.role
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// `true` if the buffer holds no elements.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Shared view of the elements.
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Mutable view of the elements.
    pub fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.data
    }

    /// Set every element to `value`.
    pub fn fill(&mut self, value: f64) {
        self.data.fill(value);
    }

    /// Bytes held by this buffer.
    pub fn memory_bytes(&self) -> usize {
        self.data.len() * std::mem::size_of::<f64>()
    }

    /// Return the storage to the allocator.
    ///
    /// Equivalent to dropping the buffer; spelled out so call sites read as
    /// a deliberate release point.
    pub fn release(self) {
        drop(self);
    }
}

impl Drop for VectorBuffer {
    fn drop(&mut self) {
        self.ledger.record_release(self.memory_bytes());
        trace!(role = %self.role, bytes = self.memory_bytes(), "vector released");
    }
}

impl std::fmt::Debug for VectorBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VectorBuffer")
            .field("role", &self.role)
            .field("len", &self.data.len())
            .finish()
    }
}
