//! The vector addition routine as a sequence of owned phase states.
//!
//! # Release timing
//!
//! The inputs are read for the last time in the final iteration of the
//! compute loop. [`Initialized::compute`] releases them as the last step of
//! that iteration, right after `C[N-1]` is written, and records the index in
//! [`RoutineMetrics::inputs_released_at`]. Once compute returns only the
//! output vector is alive.

use std::time::Instant;

use tracing::debug;
use vecadd_arena::{ArenaLedger, VectorBuffer};
use vecadd_core::{Mismatch, RoutineConfig, VectorRole, EXPECTED_SUM};

use crate::error::RoutineError;
use crate::metrics::RoutineMetrics;
use crate::pair::InputPair;

/// Entry point of the routine.
pub struct VectorAdditionRoutine;

impl VectorAdditionRoutine {
    /// Validate `config` and allocate A, B and C, in that order.
    ///
    /// If a later vector cannot be obtained, the earlier ones are released
    /// before the error is returned.
    pub fn allocate(config: &RoutineConfig, ledger: &ArenaLedger) -> Result<Allocated, RoutineError> {
        config.validate()?;
        let start = Instant::now();

        let a = VectorBuffer::allocate(VectorRole::InputA, config.len, ledger)?;
        let b = VectorBuffer::allocate(VectorRole::InputB, config.len, ledger)?;
        let c = VectorBuffer::allocate(VectorRole::Output, config.len, ledger)?;

        let metrics = RoutineMetrics {
            len: config.len,
            vector_bytes: c.memory_bytes(),
            allocate_us: start.elapsed().as_micros() as u64,
            ..Default::default()
        };
        debug!(len = config.len, us = metrics.allocate_us, "allocated vectors");

        Ok(Allocated {
            inputs: InputPair::new(a, b),
            output: c,
            ledger: ledger.clone(),
            metrics,
        })
    }
}

// ── Allocated ──────────────────────────────────────────────────────

/// All three vectors exist; contents are unspecified.
#[derive(Debug)]
pub struct Allocated {
    inputs: InputPair,
    output: VectorBuffer,
    ledger: ArenaLedger,
    metrics: RoutineMetrics,
}

impl Allocated {
    /// Fill A with 1.0 and B with 2.0.
    pub fn initialize(self) -> Initialized {
        let Self {
            mut inputs,
            output,
            ledger,
            mut metrics,
        } = self;
        let start = Instant::now();
        inputs.initialize();
        metrics.initialize_us = start.elapsed().as_micros() as u64;
        debug!(us = metrics.initialize_us, "initialized inputs");

        Initialized {
            inputs,
            output,
            ledger,
            metrics,
        }
    }

    /// Metrics collected so far.
    pub fn metrics(&self) -> &RoutineMetrics {
        &self.metrics
    }
}

// ── Initialized ────────────────────────────────────────────────────

/// Inputs hold their constant values; the output is not yet written.
#[derive(Debug)]
pub struct Initialized {
    inputs: InputPair,
    output: VectorBuffer,
    ledger: ArenaLedger,
    metrics: RoutineMetrics,
}

impl Initialized {
    /// The populated inputs.
    pub fn inputs(&self) -> &InputPair {
        &self.inputs
    }

    /// Compute `C[i] = A[i] + B[i]`, releasing A and B in the last iteration.
    pub fn compute(self) -> Computed {
        let Self {
            inputs,
            mut output,
            ledger,
            mut metrics,
        } = self;
        let start = Instant::now();
        metrics.inputs_released_at = add_and_release(inputs, output.as_mut_slice());
        metrics.compute_us = start.elapsed().as_micros() as u64;
        debug!(
            us = metrics.compute_us,
            released_at = ?metrics.inputs_released_at,
            "computed sum"
        );

        Computed {
            output,
            ledger,
            metrics,
        }
    }

    /// Metrics collected so far.
    pub fn metrics(&self) -> &RoutineMetrics {
        &self.metrics
    }
}

/// Sum `inputs` into `output`, releasing the inputs right after the final
/// element is written. Returns the index of that iteration.
///
/// The last iteration is peeled off the loop so the release directly
/// follows the final read of A and B.
fn add_and_release(inputs: InputPair, output: &mut [f64]) -> Option<usize> {
    let last = output.len().checked_sub(1)?;
    let (head, tail) = output.split_at_mut(last);

    for (i, c) in head.iter_mut().enumerate() {
        *c = inputs.a()[i] + inputs.b()[i];
    }

    tail[0] = inputs.a()[last] + inputs.b()[last];
    inputs.release();
    Some(last)
}

// ── Computed ───────────────────────────────────────────────────────

/// Only the output vector is alive; it holds the computed sums.
#[derive(Debug)]
pub struct Computed {
    output: VectorBuffer,
    ledger: ArenaLedger,
    metrics: RoutineMetrics,
}

impl Computed {
    /// The computed output.
    pub fn output(&self) -> &[f64] {
        self.output.as_slice()
    }

    /// Mutable access to the output before verification.
    pub fn output_mut(&mut self) -> &mut [f64] {
        self.output.as_mut_slice()
    }

    /// Compare every element with 3.0 using exact equality.
    ///
    /// Stops at the first element that differs. On mismatch the output is
    /// released before the error is returned.
    pub fn verify(self) -> Result<Verified, Mismatch> {
        let Self {
            output,
            ledger,
            mut metrics,
        } = self;
        let start = Instant::now();
        let found = output
            .as_slice()
            .iter()
            .position(|&v| v != EXPECTED_SUM)
            .map(|index| Mismatch {
                index,
                value: output.as_slice()[index],
            });
        metrics.verify_us = start.elapsed().as_micros() as u64;

        if let Some(mismatch) = found {
            return Err(mismatch);
        }
        metrics.verified_elements = output.len();
        debug!(us = metrics.verify_us, "verified output");

        Ok(Verified {
            output,
            ledger,
            metrics,
        })
    }

    /// Metrics collected so far.
    pub fn metrics(&self) -> &RoutineMetrics {
        &self.metrics
    }
}

// ── Verified ───────────────────────────────────────────────────────

/// Every output element equals 3.0.
#[derive(Debug)]
pub struct Verified {
    output: VectorBuffer,
    ledger: ArenaLedger,
    metrics: RoutineMetrics,
}

impl Verified {
    /// The verified output.
    pub fn output(&self) -> &[f64] {
        self.output.as_slice()
    }

    /// Metrics collected so far.
    pub fn metrics(&self) -> &RoutineMetrics {
        &self.metrics
    }

    /// Release the output and return the final metrics.
    pub fn finish(self) -> RoutineMetrics {
        let Self {
            output,
            ledger,
            mut metrics,
        } = self;
        output.release();
        metrics.peak_bytes = ledger.stats().peak_bytes;
        metrics
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vecadd_core::ConfigError;

    fn computed(len: usize, ledger: &ArenaLedger) -> Computed {
        VectorAdditionRoutine::allocate(&RoutineConfig::new(len), ledger)
            .unwrap()
            .initialize()
            .compute()
    }

    #[test]
    fn allocate_creates_three_vectors() {
        let ledger = ArenaLedger::new();
        let allocated = VectorAdditionRoutine::allocate(&RoutineConfig::new(8), &ledger).unwrap();
        assert_eq!(ledger.stats().live_buffers, 3);
        assert_eq!(ledger.stats().live_bytes, 3 * 64);
        assert_eq!(allocated.metrics().len, 8);
        assert_eq!(allocated.metrics().vector_bytes, 64);
    }

    #[test]
    fn allocate_rejects_empty_config() {
        let ledger = ArenaLedger::new();
        let err = VectorAdditionRoutine::allocate(&RoutineConfig::new(0), &ledger).unwrap_err();
        assert!(matches!(err, RoutineError::Config(ConfigError::EmptyVector)));
        assert_eq!(ledger.stats().allocations, 0);
    }

    #[test]
    fn compute_leaves_only_output_alive() {
        let ledger = ArenaLedger::new();
        let c = computed(10, &ledger);
        let stats = ledger.stats();
        assert_eq!(stats.live_buffers, 1);
        assert_eq!(stats.releases, 2);
        assert_eq!(stats.live_bytes, 80);
        assert_eq!(c.metrics().inputs_released_at, Some(9));
        assert!(c.output().iter().all(|&v| v == 3.0));
    }

    #[test]
    fn inputs_alive_until_compute() {
        let ledger = ArenaLedger::new();
        let init = VectorAdditionRoutine::allocate(&RoutineConfig::new(4), &ledger)
            .unwrap()
            .initialize();
        assert_eq!(ledger.stats().releases, 0);
        assert_eq!(init.inputs().a(), &[1.0; 4]);
        assert_eq!(init.inputs().b(), &[2.0; 4]);
        let computed = init.compute();
        let stats = ledger.stats();
        assert_eq!(stats.releases, 2);
        assert_eq!(stats.live_buffers, 1);
        assert_eq!(computed.output(), &[3.0; 4]);
    }

    #[test]
    fn add_and_release_writes_every_element_before_release() {
        let ledger = ArenaLedger::new();
        let mut pair = InputPair::new(
            VectorBuffer::allocate(VectorRole::InputA, 7, &ledger).unwrap(),
            VectorBuffer::allocate(VectorRole::InputB, 7, &ledger).unwrap(),
        );
        pair.initialize();
        let mut output = [0.0; 7];
        assert_eq!(add_and_release(pair, &mut output), Some(6));
        assert_eq!(output, [3.0; 7]);
        assert!(ledger.stats().is_balanced());
        assert_eq!(ledger.stats().releases, 2);
    }

    #[test]
    fn add_and_release_on_empty_output_keeps_nothing() {
        let ledger = ArenaLedger::new();
        let pair = InputPair::new(
            VectorBuffer::allocate(VectorRole::InputA, 0, &ledger).unwrap(),
            VectorBuffer::allocate(VectorRole::InputB, 0, &ledger).unwrap(),
        );
        assert_eq!(add_and_release(pair, &mut []), None);
        assert!(ledger.stats().is_balanced());
    }

    #[test]
    fn verify_reports_first_mismatch_only() {
        let ledger = ArenaLedger::new();
        let mut c = computed(6, &ledger);
        c.output_mut()[4] = -1.0;
        c.output_mut()[1] = 0.5;
        let mismatch = c.verify().unwrap_err();
        assert_eq!(mismatch, Mismatch { index: 1, value: 0.5 });
        assert!(ledger.stats().is_balanced());
    }

    #[test]
    fn verify_is_exact_not_tolerant() {
        let ledger = ArenaLedger::new();
        let mut c = computed(3, &ledger);
        c.output_mut()[0] = 3.0 + f64::EPSILON * 2.0;
        let mismatch = c.verify().unwrap_err();
        assert_eq!(mismatch.index, 0);
    }

    #[test]
    fn verify_rejects_nan() {
        let ledger = ArenaLedger::new();
        let mut c = computed(3, &ledger);
        c.output_mut()[2] = f64::NAN;
        let mismatch = c.verify().unwrap_err();
        assert_eq!(mismatch.index, 2);
        assert!(mismatch.value.is_nan());
    }

    #[test]
    fn finish_releases_output_and_reports_peak() {
        let ledger = ArenaLedger::new();
        let verified = computed(5, &ledger).verify().unwrap();
        assert_eq!(verified.metrics().verified_elements, 5);
        assert_eq!(verified.output(), &[3.0; 5]);
        let metrics = verified.finish();
        assert!(ledger.stats().is_balanced());
        assert_eq!(ledger.stats().allocations, 3);
        assert_eq!(metrics.peak_bytes, 3 * 40);
    }
}
