use std::ops::{Range, RangeInclusive};

use crate::key::Key;
use crate::permutation::Permutation;
use crate::pixel_buffer::{PixelBuffer, CHANNELS};
use crate::rng::KeyedRng;

use super::PixelTransform;

/// Range of the additive noise, lower bound inclusive, upper bound exclusive.
pub const NOISE_RANGE: Range<i16> = -50..50;

/// Samples in this band never hit the clipping bounds and always round-trip exactly.
pub const LOSSLESS_BAND: RangeInclusive<u8> = 50..=205;

/// Permutes the color channels and adds key-seeded noise, clipped into `[0, 255]`.
///
/// Clipping is not invertible: a sample whose value before the noise lies outside
/// [`LOSSLESS_BAND`] can come back off by up to 50.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ShuffleTransform;

struct ShuffleSchedule {
    channels: Permutation,
    noise: Vec<i16>,
}

impl ShuffleSchedule {
    /// Channel permutation first, noise second, in both directions.
    fn draw(key: &Key, input: &PixelBuffer) -> Self {
        let mut rng = KeyedRng::reseed(key);
        let channels = rng.permutation(CHANNELS);
        let noise = rng.noise(input.as_bytes().len(), NOISE_RANGE);

        Self { channels, noise }
    }
}

fn clip(value: i16) -> u8 {
    value.clamp(0, 255) as u8
}

impl PixelTransform for ShuffleTransform {
    fn encode(&self, key: &Key, input: &PixelBuffer) -> PixelBuffer {
        let schedule = ShuffleSchedule::draw(key, input);
        let mut data = Vec::with_capacity(input.as_bytes().len());

        for (pixel, noise) in input
            .as_bytes()
            .chunks_exact(CHANNELS)
            .zip(schedule.noise.chunks_exact(CHANNELS))
        {
            for (c, n) in noise.iter().enumerate() {
                let sample = pixel[schedule.channels.source_of(c)];
                data.push(clip(i16::from(sample) + n));
            }
        }

        input.with_same_shape(data)
    }

    fn decode(&self, key: &Key, input: &PixelBuffer) -> PixelBuffer {
        let schedule = ShuffleSchedule::draw(key, input);
        let mut data = Vec::with_capacity(input.as_bytes().len());

        for (pixel, noise) in input
            .as_bytes()
            .chunks_exact(CHANNELS)
            .zip(schedule.noise.chunks_exact(CHANNELS))
        {
            let mut denoised = [0u8; CHANNELS];
            for (c, n) in noise.iter().enumerate() {
                denoised[c] = clip(i16::from(pixel[c]) - n);
            }
            for c in 0..CHANNELS {
                data.push(denoised[schedule.channels.target_of(c)]);
            }
        }

        input.with_same_shape(data)
    }
}
