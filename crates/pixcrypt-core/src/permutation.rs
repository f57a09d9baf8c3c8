//! Key-derived permutations for pixel and channel reordering.

use fastrand::Rng;

/// Bijective reordering of the indices `0..len`.
///
/// Applying the permutation yields `output[i] = input[forward[i]]`, applying the
/// inverse undoes that, so `inverse[forward[i]] == i`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Permutation {
    forward: Vec<usize>,
    inverse: Vec<usize>,
}

impl Permutation {
    /// Shuffles the identity permutation of `length` with a Fisher-Yates pass
    /// driven by `rng`.
    ///
    /// Every step draws from a `u64` range, so the number of random draws and
    /// their width do not depend on the pointer width of the platform.
    pub fn shuffled(rng: &mut Rng, length: usize) -> Self {
        let mut forward: Vec<usize> = (0..length).collect();

        for i in (1..length).rev() {
            let j = rng.u64(0..=i as u64) as usize;
            forward.swap(i, j);
        }

        Self::from_forward(forward)
    }

    // the inverse is the argsort of `forward`
    fn from_forward(forward: Vec<usize>) -> Self {
        let mut inverse = vec![0usize; forward.len()];
        for (position, &source) in forward.iter().enumerate() {
            inverse[source] = position;
        }

        Self { forward, inverse }
    }

    /// Index of the input element that lands on `position`.
    #[inline]
    pub fn source_of(&self, position: usize) -> usize {
        self.forward[position]
    }

    /// Position an input element at `source` lands on.
    #[inline]
    pub fn target_of(&self, source: usize) -> usize {
        self.inverse[source]
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.forward.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.forward.is_empty()
    }

    /// Reorders `data` so that `output[i] = data[forward[i]]`.
    pub fn apply<T: Copy>(&self, data: &[T]) -> Vec<T> {
        assert_eq!(data.len(), self.len());
        self.forward.iter().map(|&i| data[i]).collect()
    }

    /// Undoes [`Permutation::apply`]: `output[i] = data[inverse[i]]`.
    pub fn apply_inverse<T: Copy>(&self, data: &[T]) -> Vec<T> {
        assert_eq!(data.len(), self.len());
        self.inverse.iter().map(|&i| data[i]).collect()
    }
}
