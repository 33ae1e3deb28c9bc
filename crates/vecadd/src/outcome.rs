//! Map a run's result to the process exit status.

use std::io::Write;

use tracing::debug;
use vecadd_engine::{RoutineError, RoutineMetrics};

/// Exit status for a verified run.
pub const EXIT_SUCCESS: u8 = 0;

/// Turn `result` into an exit status, writing the diagnostic for failures
/// that have not already been printed to `err_out`.
pub fn exit_status<W: Write>(result: Result<RoutineMetrics, RoutineError>, err_out: &mut W) -> u8 {
    match result {
        Ok(metrics) => {
            debug!(?metrics, "run metrics");
            EXIT_SUCCESS
        }
        Err(err) => {
            if !err.is_reported() {
                let _ = writeln!(err_out, "Error: {err}");
            }
            err.exit_code()
        }
    }
}
