use crate::key::Key;
use crate::pixel_buffer::PixelBuffer;
use crate::rng::KeyedRng;

use super::PixelTransform;

/// XORs every sample with a key-seeded random byte pattern.
///
/// XOR is its own inverse and the pattern is redrawn from the key on every
/// call, so encoding and decoding are the very same function.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct XorTransform;

impl XorTransform {
    pub fn apply(key: &Key, input: &PixelBuffer) -> PixelBuffer {
        let samples = input.as_bytes();
        let pattern = KeyedRng::reseed(key).byte_pattern(samples.len());

        let data = samples
            .iter()
            .zip(pattern)
            .map(|(sample, mask)| sample ^ mask)
            .collect();

        input.with_same_shape(data)
    }
}

impl PixelTransform for XorTransform {
    fn encode(&self, key: &Key, input: &PixelBuffer) -> PixelBuffer {
        Self::apply(key, input)
    }

    fn decode(&self, key: &Key, input: &PixelBuffer) -> PixelBuffer {
        Self::apply(key, input)
    }
}
