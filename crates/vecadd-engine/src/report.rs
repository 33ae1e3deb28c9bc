//! Console result lines.

use std::io::{self, Write};

use vecadd_core::{Mismatch, SUCCESS_MARKER};

/// Write the success marker line and flush.
pub fn write_success<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{SUCCESS_MARKER}")?;
    out.flush()
}

/// Write the mismatch diagnostic line and flush.
pub fn write_mismatch<W: Write>(out: &mut W, mismatch: &Mismatch) -> io::Result<()> {
    writeln!(out, "{mismatch}")?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_line() {
        let mut out: Vec<u8> = Vec::new();
        write_success(&mut out).unwrap();
        assert_eq!(out, b"__SUCCESS__\n");
    }

    #[test]
    fn mismatch_line() {
        let mut out: Vec<u8> = Vec::new();
        let m = Mismatch {
            index: 99_999_999,
            value: 2.0,
        };
        write_mismatch(&mut out, &m).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Error: Element C[99999999] = 2.000000 instead of 3.0\n"
        );
    }
}
