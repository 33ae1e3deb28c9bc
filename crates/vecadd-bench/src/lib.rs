//! Benchmark profiles for the vecadd routine.
//!
//! The production length (1e8 doubles, 2.4GB live) is too large to iterate
//! on, so benchmarks run the same phases at reduced lengths:
//!
//! - [`SMALL_LEN`]: fits in L2 on most machines
//! - [`LARGE_LEN`]: spills to main memory, like the real run

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use vecadd_arena::ArenaLedger;
use vecadd_core::RoutineConfig;
use vecadd_engine::{Initialized, RoutineError, VectorAdditionRoutine};

/// 16K elements per vector (128KB).
pub const SMALL_LEN: usize = 16 * 1024;

/// 4M elements per vector (32MB).
pub const LARGE_LEN: usize = 4 * 1024 * 1024;

/// Allocate and initialise vectors of `len` elements, ready for compute.
pub fn initialized(len: usize, ledger: &ArenaLedger) -> Result<Initialized, RoutineError> {
    Ok(VectorAdditionRoutine::allocate(&RoutineConfig::new(len), ledger)?.initialize())
}
