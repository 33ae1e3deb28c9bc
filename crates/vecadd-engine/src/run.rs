//! Drive the routine from allocation to final release.

use std::io::Write;

use tracing::{debug, info, warn};
use vecadd_arena::ArenaLedger;
use vecadd_core::RoutineConfig;

use crate::error::RoutineError;
use crate::metrics::RoutineMetrics;
use crate::report::{write_mismatch, write_success};
use crate::routine::VectorAdditionRoutine;

/// Run all six phases once and write the result line to `out`.
///
/// On success writes `__SUCCESS__`, releases the output and returns the
/// run's metrics. On the first mismatch writes the diagnostic line and
/// returns [`RoutineError::Mismatch`]; nothing is checked past that element.
/// Allocation and configuration errors are returned without writing to
/// `out`.
pub fn run_routine<W: Write>(
    config: &RoutineConfig,
    out: &mut W,
) -> Result<RoutineMetrics, RoutineError> {
    let ledger = ArenaLedger::new();

    let computed = VectorAdditionRoutine::allocate(config, &ledger)
        .inspect_err(|err| debug!(%err, "routine aborted before compute"))?
        .initialize()
        .compute();

    let verified = match computed.verify() {
        Ok(verified) => verified,
        Err(mismatch) => {
            debug!(index = mismatch.index, value = mismatch.value, "verification mismatch");
            write_mismatch(out, &mismatch)?;
            return Err(mismatch.into());
        }
    };

    write_success(out)?;
    let metrics = verified.finish();

    let stats = ledger.stats();
    if !stats.is_balanced() {
        warn!(?stats, "vectors still live after release");
    }
    info!(
        len = metrics.len,
        total_us = metrics.total_us(),
        peak_bytes = metrics.peak_bytes,
        "vector addition verified"
    );
    Ok(metrics)
}
