//! Vector roles and byte-size arithmetic.

use std::fmt;

/// Which of the three routine vectors a buffer holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum VectorRole {
    /// First input, filled with [`INPUT_A_VALUE`](crate::INPUT_A_VALUE).
    InputA,
    /// Second input, filled with [`INPUT_B_VALUE`](crate::INPUT_B_VALUE).
    InputB,
    /// Element-wise sum of the inputs.
    Output,
}

impl VectorRole {
    /// All roles, in allocation order.
    pub const ALL: [VectorRole; 3] = [Self::InputA, Self::InputB, Self::Output];

    /// Single-letter name used in diagnostics (`A`, `B`, `C`).
    pub fn letter(self) -> char {
        match self {
            Self::InputA => 'A',
            Self::InputB => 'B',
            Self::Output => 'C',
        }
    }
}

impl fmt::Display for VectorRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Size in bytes of a vector of `len` `f64` elements.
///
/// Returns `None` when the product overflows `usize` or exceeds
/// `isize::MAX`, the largest size a single Rust allocation may have.
pub fn vector_bytes(len: usize) -> Option<usize> {
    let bytes = len.checked_mul(std::mem::size_of::<f64>())?;
    if bytes > isize::MAX as usize {
        return None;
    }
    Some(bytes)
}
