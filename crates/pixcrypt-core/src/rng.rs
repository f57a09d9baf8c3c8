use std::ops::Range;

use fastrand::Rng;

use crate::key::Key;
use crate::permutation::Permutation;

/// Explicit PRNG handle, reseeded from a [`Key`].
///
/// A transform creates one at the start of every call and drops it at the end,
/// so no random state survives between calls. Encoding and decoding with the
/// same key therefore see the very same sequence, as long as both sides make
/// the same draws in the same order.
#[derive(Debug)]
pub struct KeyedRng {
    rng: Rng,
}

impl KeyedRng {
    pub fn reseed(key: &Key) -> Self {
        Self {
            rng: Rng::with_seed(key.seed()),
        }
    }

    /// `len` bytes, each uniform in `[0, 256)`.
    pub fn byte_pattern(&mut self, len: usize) -> Vec<u8> {
        let mut pattern = vec![0u8; len];
        self.rng.fill(&mut pattern);
        pattern
    }

    /// A shuffled permutation of `0..len`.
    pub fn permutation(&mut self, len: usize) -> Permutation {
        Permutation::shuffled(&mut self.rng, len)
    }

    /// `len` integers, each uniform in `range`.
    pub fn noise(&mut self, len: usize, range: Range<i16>) -> Vec<i16> {
        (0..len).map(|_| self.rng.i16(range.clone())).collect()
    }
}
