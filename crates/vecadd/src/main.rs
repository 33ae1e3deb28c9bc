//! `vecadd-seq`: run the sequential vector addition once.
//!
//! Takes no arguments. Prints `__SUCCESS__` and exits 0 when every element
//! of C equals 3.0; prints the first mismatching element and exits 1
//! otherwise. Allocation failures are reported on standard error and also
//! exit 1.

use std::io;
use std::process::ExitCode;

use vecadd::prelude::*;
use vecadd::{logging, outcome};

fn main() -> ExitCode {
    logging::init();

    let config = RoutineConfig::default();
    let result = run_routine(&config, &mut io::stdout().lock());

    ExitCode::from(outcome::exit_status(result, &mut io::stderr().lock()))
}
