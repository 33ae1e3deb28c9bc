//! The two input vectors, owned and released as a unit.

use vecadd_arena::VectorBuffer;
use vecadd_core::{INPUT_A_VALUE, INPUT_B_VALUE};

/// Input vectors A and B.
///
/// Both have the same length. They are only ever released together, via
/// [`InputPair::release`].
#[derive(Debug)]
pub struct InputPair {
    a: VectorBuffer,
    b: VectorBuffer,
}

impl InputPair {
    pub(crate) fn new(a: VectorBuffer, b: VectorBuffer) -> Self {
        debug_assert_eq!(a.len(), b.len());
        Self { a, b }
    }

    /// Number of elements in each input.
    pub fn len(&self) -> usize {
        self.a.len()
    }

    /// `true` if the inputs hold no elements.
    pub fn is_empty(&self) -> bool {
        self.a.is_empty()
    }

    /// Input vector A.
    pub fn a(&self) -> &[f64] {
        self.a.as_slice()
    }

    /// Input vector B.
    pub fn b(&self) -> &[f64] {
        self.b.as_slice()
    }

    /// Set every `A[i]` to 1.0 and `B[i]` to 2.0 in one combined pass.
    pub fn initialize(&mut self) {
        let a = self.a.as_mut_slice();
        let b = self.b.as_mut_slice();
        for (x, y) in a.iter_mut().zip(b.iter_mut()) {
            *x = INPUT_A_VALUE;
            *y = INPUT_B_VALUE;
        }
    }

    /// Bytes held by both inputs.
    pub fn memory_bytes(&self) -> usize {
        self.a.memory_bytes() + self.b.memory_bytes()
    }

    /// Release A, then B.
    pub fn release(self) {
        let Self { a, b } = self;
        a.release();
        b.release();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use vecadd_arena::ArenaLedger;
    use vecadd_core::VectorRole;

    fn pair(len: usize, ledger: &ArenaLedger) -> InputPair {
        InputPair::new(
            VectorBuffer::allocate(VectorRole::InputA, len, ledger).unwrap(),
            VectorBuffer::allocate(VectorRole::InputB, len, ledger).unwrap(),
        )
    }

    #[test]
    fn initialize_fills_constants() {
        let ledger = ArenaLedger::new();
        let mut p = pair(5, &ledger);
        p.initialize();
        assert_eq!(p.a(), &[1.0; 5]);
        assert_eq!(p.b(), &[2.0; 5]);
        assert_eq!(p.len(), 5);
        assert_eq!(p.memory_bytes(), 80);
    }

    proptest! {
        #[test]
        fn initialize_twice_is_bit_identical(len in 1usize..2048) {
            let ledger = ArenaLedger::new();
            let mut p = pair(len, &ledger);
            p.initialize();
            let first: Vec<u64> = p.a().iter().chain(p.b()).map(|v| v.to_bits()).collect();
            p.initialize();
            let second: Vec<u64> = p.a().iter().chain(p.b()).map(|v| v.to_bits()).collect();
            prop_assert_eq!(&first, &second);
            prop_assert!(p.a().iter().all(|v| v.to_bits() == INPUT_A_VALUE.to_bits()));
            prop_assert!(p.b().iter().all(|v| v.to_bits() == INPUT_B_VALUE.to_bits()));
        }
    }

    #[test]
    fn release_frees_both_inputs() {
        let ledger = ArenaLedger::new();
        let p = pair(3, &ledger);
        assert_eq!(ledger.stats().live_buffers, 2);
        p.release();
        let stats = ledger.stats();
        assert!(stats.is_balanced());
        assert_eq!(stats.releases, 2);
    }
}
