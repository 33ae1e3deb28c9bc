//! Allocation accounting shared by the buffers of one run.
//!
//! The routine is single-threaded, so the ledger is an `Rc` over `Cell`
//! counters rather than atomics.

use std::cell::Cell;
use std::rc::Rc;

/// Point-in-time copy of the ledger counters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LedgerStats {
    /// Buffers currently alive.
    pub live_buffers: usize,
    /// Bytes held by live buffers.
    pub live_bytes: usize,
    /// Highest value `live_bytes` has reached.
    pub peak_bytes: usize,
    /// Buffers successfully allocated since the ledger was created.
    pub allocations: usize,
    /// Buffers released since the ledger was created.
    pub releases: usize,
}

impl LedgerStats {
    /// `true` when every allocated buffer has been released.
    pub fn is_balanced(&self) -> bool {
        self.live_buffers == 0 && self.allocations == self.releases
    }
}

#[derive(Default)]
struct LedgerState {
    live_buffers: Cell<usize>,
    live_bytes: Cell<usize>,
    peak_bytes: Cell<usize>,
    allocations: Cell<usize>,
    releases: Cell<usize>,
}

/// Shared counter of buffer allocations and releases.
///
/// Cloning is cheap and yields a handle to the same counters.
#[derive(Clone, Default)]
pub struct ArenaLedger {
    state: Rc<LedgerState>,
}

impl ArenaLedger {
    /// Create a ledger with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record_alloc(&self, bytes: usize) {
        let s = &self.state;
        s.live_buffers.set(s.live_buffers.get() + 1);
        s.allocations.set(s.allocations.get() + 1);
        let live = s.live_bytes.get() + bytes;
        s.live_bytes.set(live);
        if live > s.peak_bytes.get() {
            s.peak_bytes.set(live);
        }
    }

    pub(crate) fn record_release(&self, bytes: usize) {
        let s = &self.state;
        s.live_buffers.set(s.live_buffers.get() - 1);
        s.live_bytes.set(s.live_bytes.get() - bytes);
        s.releases.set(s.releases.get() + 1);
    }

    /// Copy out the current counters.
    pub fn stats(&self) -> LedgerStats {
        let s = &self.state;
        LedgerStats {
            live_buffers: s.live_buffers.get(),
            live_bytes: s.live_bytes.get(),
            peak_bytes: s.peak_bytes.get(),
            allocations: s.allocations.get(),
            releases: s.releases.get(),
        }
    }
}

impl std::fmt::Debug for ArenaLedger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("ArenaLedger").field(&self.stats()).finish()
    }
}
