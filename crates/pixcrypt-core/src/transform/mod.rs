//! The four reversible pixel transforms.
//!
//! Every transform borrows the input buffer and allocates a new output buffer of
//! identical shape. Transforms that need randomness reseed a fresh
//! [`KeyedRng`](crate::rng::KeyedRng) from the key on every call.

mod math;
mod shuffle;
mod swap;
mod xor;

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use enum_dispatch::enum_dispatch;

pub use math::MathTransform;
pub use shuffle::{ShuffleTransform, LOSSLESS_BAND, NOISE_RANGE};
pub use swap::SwapTransform;
pub use xor::XorTransform;

use crate::error::PixcryptError;
use crate::key::Key;
use crate::pixel_buffer::PixelBuffer;

#[enum_dispatch]
pub trait PixelTransform {
    fn encode(&self, key: &Key, input: &PixelBuffer) -> PixelBuffer;
    fn decode(&self, key: &Key, input: &PixelBuffer) -> PixelBuffer;
}

/// The closed set of scrambling methods.
#[enum_dispatch(PixelTransform)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Xor(XorTransform),
    Swap(SwapTransform),
    Math(MathTransform),
    Shuffle(ShuffleTransform),
}

impl Method {
    pub const XOR: Method = Method::Xor(XorTransform);
    pub const SWAP: Method = Method::Swap(SwapTransform);
    pub const MATH: Method = Method::Math(MathTransform);
    pub const SHUFFLE: Method = Method::Shuffle(ShuffleTransform);

    pub const ALL: [Method; 4] = [Self::XOR, Self::SWAP, Self::MATH, Self::SHUFFLE];

    pub fn name(&self) -> &'static str {
        match self {
            Method::Xor(_) => "xor",
            Method::Swap(_) => "swap",
            Method::Math(_) => "math",
            Method::Shuffle(_) => "shuffle",
        }
    }

    /// One-line description, as shown in menus.
    pub fn description(&self) -> &'static str {
        match self {
            Method::Xor(_) => "XOR operation with random key pattern",
            Method::Swap(_) => "Swap pixel positions",
            Method::Math(_) => "Mathematical operations on pixels",
            Method::Shuffle(_) => "Shuffle channels with noise",
        }
    }

    /// `false` for methods whose inverse can lose precision at the sample range boundaries.
    pub fn is_exact(&self) -> bool {
        !matches!(self, Method::Shuffle(_))
    }
}

impl Default for Method {
    fn default() -> Self {
        Self::XOR
    }
}

impl FromStr for Method {
    type Err = PixcryptError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|m| m.name() == name)
            .ok_or_else(|| PixcryptError::InvalidMethod(s.to_string()))
    }
}

impl Display for Method {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
