//! Per-run timing and memory metrics.

/// Timing and memory data collected during one run of the routine.
///
/// All durations are in microseconds. Phases that have not run yet read
/// as zero.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RoutineMetrics {
    /// Elements per vector.
    pub len: usize,
    /// Bytes per vector.
    pub vector_bytes: usize,
    /// Time spent obtaining the three vectors.
    pub allocate_us: u64,
    /// Time spent filling the inputs.
    pub initialize_us: u64,
    /// Time spent summing into the output, including input release.
    pub compute_us: u64,
    /// Time spent checking the output.
    pub verify_us: u64,
    /// Index of the iteration whose body released the inputs.
    pub inputs_released_at: Option<usize>,
    /// Output elements compared against the expected sum.
    pub verified_elements: usize,
    /// Highest number of bytes held by live vectors at once.
    pub peak_bytes: usize,
}

impl RoutineMetrics {
    /// Sum of all phase durations.
    pub fn total_us(&self) -> u64 {
        self.allocate_us + self.initialize_us + self.compute_us + self.verify_us
    }
}
