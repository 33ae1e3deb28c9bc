//! Sequential element-wise addition of two `f64` vectors.
//!
//! The routine runs six phases, each exactly once and in order:
//!
//! ```text
//! allocate ─► initialize ─► compute (+ release A, B) ─► verify ─► report ─► release C
//! ```
//!
//! Each phase is a method consuming the previous phase's state
//! ([`Allocated`] → [`Initialized`] → [`Computed`] → [`Verified`]), so the
//! compiler rejects out-of-order calls and use of released inputs.
//! [`run_routine`] drives the whole sequence and writes the console result.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod metrics;
pub mod pair;
pub mod report;
pub mod routine;
pub mod run;

pub use error::RoutineError;
pub use metrics::RoutineMetrics;
pub use pair::InputPair;
pub use routine::{Allocated, Computed, Initialized, VectorAdditionRoutine, Verified};
pub use run::run_routine;
