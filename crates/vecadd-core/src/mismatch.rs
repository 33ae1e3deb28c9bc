//! Verification diagnostics.

use std::error::Error;
use std::fmt;

use crate::EXPECTED_SUM;

/// First output element found not equal to [`EXPECTED_SUM`].
///
/// Displays as the exact console diagnostic:
/// `Error: Element C[<index>] = <value> instead of 3.0`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Mismatch {
    /// Index of the offending element.
    pub index: usize,
    /// Value found at that index.
    pub value: f64,
}

impl Mismatch {
    /// The value the element should have held.
    pub fn expected(&self) -> f64 {
        EXPECTED_SUM
    }
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Error: Element C[{}] = {} instead of 3.0",
            self.index,
            format_fixed(self.value)
        )
    }
}

impl Error for Mismatch {}

/// Format `value` the way C's `printf("%f")` does.
///
/// Finite values get six fractional digits. Non-finite values are spelled
/// `inf`, `-inf`, `nan` and `-nan`.
pub fn format_fixed(value: f64) -> String {
    if value.is_nan() {
        if value.is_sign_negative() {
            "-nan".to_string()
        } else {
            "nan".to_string()
        }
    } else if value.is_infinite() {
        if value.is_sign_negative() {
            "-inf".to_string()
        } else {
            "inf".to_string()
        }
    } else {
        format!("{value:.6}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn display_matches_console_diagnostic() {
        let m = Mismatch {
            index: 2,
            value: 4.0,
        };
        assert_eq!(m.to_string(), "Error: Element C[2] = 4.000000 instead of 3.0");
        assert_eq!(m.expected(), 3.0);
    }

    #[test]
    fn fixed_format_six_decimals() {
        assert_eq!(format_fixed(0.0), "0.000000");
        assert_eq!(format_fixed(-0.0), "-0.000000");
        assert_eq!(format_fixed(2.5), "2.500000");
        assert_eq!(format_fixed(1.0e-7), "0.000000");
        assert_eq!(format_fixed(-12.3456789), "-12.345679");
    }

    #[test]
    fn fixed_format_non_finite() {
        assert_eq!(format_fixed(f64::INFINITY), "inf");
        assert_eq!(format_fixed(f64::NEG_INFINITY), "-inf");
        assert_eq!(format_fixed(f64::NAN), "nan");
        assert_eq!(format_fixed(-f64::NAN), "-nan");
    }

    proptest! {
        #[test]
        fn fixed_format_has_six_fraction_digits(value in -1.0e12f64..1.0e12) {
            let s = format_fixed(value);
            let (_, frac) = s.split_once('.').expect("finite values contain a point");
            prop_assert_eq!(frac.len(), 6);
        }
    }
}
