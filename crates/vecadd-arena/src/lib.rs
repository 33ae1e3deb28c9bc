//! Heap storage for the vector addition routine.
//!
//! Every vector is a [`VectorBuffer`]: a `Vec<f64>` obtained through
//! `try_reserve_exact`, so running out of memory surfaces as
//! [`ArenaError::AllocationFailed`] instead of aborting the process.
//!
//! Buffers report to an [`ArenaLedger`] when they are created and when
//! they are dropped. Release consumes the buffer, so a vector cannot be
//! released twice; the ledger lets callers check it was released once.
//!
//! ```text
//! ArenaLedger (Rc, shared by all buffers of one run)
//! ├── VectorBuffer A ─┐
//! ├── VectorBuffer B ─┴─ released together after the last sum
//! └── VectorBuffer C ─── released last
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod buffer;
pub mod error;
pub mod ledger;

pub use buffer::VectorBuffer;
pub use error::ArenaError;
pub use ledger::{ArenaLedger, LedgerStats};
