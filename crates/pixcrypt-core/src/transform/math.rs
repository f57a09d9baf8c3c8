use crate::key::Key;
use crate::pixel_buffer::PixelBuffer;

use super::PixelTransform;

/// Adds the key to every sample and XORs the result with `key mod 256`.
///
/// No randomness is involved. Arithmetic is done on `i64` and wrapped with the
/// Euclidean residue, so negative keys and intermediates land in `[0, 255]`.
/// Adding `key` and adding `key mod 256` agree modulo 256, the latter cannot
/// overflow for keys near `i64::MAX`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct MathTransform;

impl MathTransform {
    fn encode_sample(key: &Key, sample: u8) -> u8 {
        let shifted = (i64::from(sample) + i64::from(key.residue())).rem_euclid(256) as u8;
        shifted ^ key.residue()
    }

    fn decode_sample(key: &Key, sample: u8) -> u8 {
        let unmasked = i64::from(sample ^ key.residue());
        (unmasked - i64::from(key.residue())).rem_euclid(256) as u8
    }
}

impl PixelTransform for MathTransform {
    fn encode(&self, key: &Key, input: &PixelBuffer) -> PixelBuffer {
        let data = input
            .as_bytes()
            .iter()
            .map(|&s| Self::encode_sample(key, s))
            .collect();
        input.with_same_shape(data)
    }

    fn decode(&self, key: &Key, input: &PixelBuffer) -> PixelBuffer {
        let data = input
            .as_bytes()
            .iter()
            .map(|&s| Self::decode_sample(key, s))
            .collect();
        input.with_same_shape(data)
    }
}
