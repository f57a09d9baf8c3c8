use std::fmt::{self, Debug, Display, Formatter};
use std::num::ParseIntError;
use std::str::FromStr;

/// Key used when none is given, kept for compatibility with images
/// scrambled by earlier tools.
pub const DEFAULT_KEY: i64 = 123;

/// The secret numeric key of a [`TransformEngine`](crate::TransformEngine).
///
/// Together with the transform method it is the sole input to every random
/// sequence the engine draws.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Key(i64);

impl Key {
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    pub const fn value(&self) -> i64 {
        self.0
    }

    /// Seed for the keyed PRNG. Negative keys are reinterpreted bit for bit.
    pub const fn seed(&self) -> u64 {
        self.0 as u64
    }

    /// `key mod 256` as the non-negative residue, also for negative keys.
    pub const fn residue(&self) -> u8 {
        self.0.rem_euclid(256) as u8
    }
}

impl Default for Key {
    fn default() -> Self {
        Self(DEFAULT_KEY)
    }
}

impl From<i64> for Key {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<i32> for Key {
    fn from(value: i32) -> Self {
        Self(value.into())
    }
}

impl FromStr for Key {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<i64>().map(Self)
    }
}

impl Display for Key {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// keys end up in logs, only the fact that one is set is worth printing
impl Debug for Key {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Key(***)")
    }
}
