use crate::key::Key;
use crate::permutation::Permutation;
use crate::pixel_buffer::{PixelBuffer, CHANNELS};
use crate::rng::KeyedRng;

use super::PixelTransform;

/// Moves whole pixels to key-derived positions.
///
/// Encoding sets `output[i] = input[P[i]]` over the flattened pixel sequence,
/// decoding regenerates `P` from the key and applies its argsort.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct SwapTransform;

impl SwapTransform {
    /// Both directions derive `P` here, so they make the exact same PRNG draws.
    fn pixel_permutation(key: &Key, input: &PixelBuffer) -> Permutation {
        KeyedRng::reseed(key).permutation(input.pixel_count())
    }

    fn reorder<F>(input: &PixelBuffer, permute: F) -> PixelBuffer
    where
        F: FnOnce(&[[u8; CHANNELS]]) -> Vec<[u8; CHANNELS]>,
    {
        let pixels: Vec<[u8; CHANNELS]> = input.pixels().collect();
        let data = permute(&pixels).into_iter().flatten().collect();

        input.with_same_shape(data)
    }
}

impl PixelTransform for SwapTransform {
    fn encode(&self, key: &Key, input: &PixelBuffer) -> PixelBuffer {
        let permutation = Self::pixel_permutation(key, input);
        Self::reorder(input, |pixels| permutation.apply(pixels))
    }

    fn decode(&self, key: &Key, input: &PixelBuffer) -> PixelBuffer {
        let permutation = Self::pixel_permutation(key, input);
        Self::reorder(input, |pixels| permutation.apply_inverse(pixels))
    }
}
