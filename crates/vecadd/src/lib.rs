//! Vecadd: sequential element-wise addition of two `f64` vectors.
//!
//! The sequential baseline of the OpenMP basics series. Three vectors of
//! 100,000,000 doubles are allocated, A is filled with 1.0 and B with 2.0,
//! `C = A + B` is computed while A and B are released right after the last
//! element is produced, and C is checked element by element against 3.0.
//!
//! # Quick start
//!
//! ```rust
//! use vecadd::prelude::*;
//!
//! let mut out: Vec<u8> = Vec::new();
//! let metrics = run_routine(&RoutineConfig::new(5), &mut out).unwrap();
//! assert_eq!(out, b"__SUCCESS__\n");
//! assert_eq!(metrics.inputs_released_at, Some(4));
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `vecadd-core` | Constants, `RoutineConfig`, `Mismatch` |
//! | [`arena`] | `vecadd-arena` | `VectorBuffer`, `ArenaLedger`, `ArenaError` |
//! | [`engine`] | `vecadd-engine` | Phase states, `run_routine`, metrics |
//! | [`logging`] | | `tracing` subscriber for the binary |
//! | [`outcome`] | | Result to exit status mapping |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod logging;
pub mod outcome;

/// Fallible vector storage and release accounting (`vecadd-arena`).
pub use vecadd_arena as arena;

/// Constants, configuration and diagnostics (`vecadd-core`).
pub use vecadd_core as types;

/// The routine's phases and driver (`vecadd-engine`).
pub use vecadd_engine as engine;

/// Common imports for typical use.
pub mod prelude {
    pub use vecadd_arena::{ArenaError, ArenaLedger};
    pub use vecadd_core::{Mismatch, RoutineConfig, EXPECTED_SUM, SUCCESS_MARKER};
    pub use vecadd_engine::{run_routine, RoutineError, RoutineMetrics, VectorAdditionRoutine};
}
