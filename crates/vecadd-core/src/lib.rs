//! Core types for the sequential vector addition routine.
//!
//! Holds the values every other crate agrees on: the fixed vector length,
//! the constants the inputs are filled with, the expected sum, and the
//! diagnostic produced when a computed element does not match.
//!
//! # Crate layout
//!
//! ```text
//! vecadd-core   constants, RoutineConfig, Mismatch, VectorRole
//! vecadd-arena  fallible f64 buffers + allocation ledger
//! vecadd-engine VectorAdditionRoutine (allocate → ... → release)
//! vecadd        facade + `vecadd-seq` binary
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod mismatch;
pub mod vector;

pub use config::RoutineConfig;
pub use error::ConfigError;
pub use mismatch::{format_fixed, Mismatch};
pub use vector::{vector_bytes, VectorRole};

/// Value every element of input vector A is initialised to.
pub const INPUT_A_VALUE: f64 = 1.0;

/// Value every element of input vector B is initialised to.
pub const INPUT_B_VALUE: f64 = 2.0;

/// Value every element of the output vector must hold after the sum.
///
/// `1.0 + 2.0` is exact in binary64, so verification compares with `!=`
/// rather than a tolerance.
pub const EXPECTED_SUM: f64 = 3.0;

/// Line written to standard output when verification passes.
pub const SUCCESS_MARKER: &str = "__SUCCESS__";
