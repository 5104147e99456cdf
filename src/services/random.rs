//! Injectable randomness for palette generation.
//!
//! Generators never reach for a global RNG. They take a [`RandomSource`], so
//! the CLI can use thread-local entropy or a fixed seed and tests can replay
//! exact values.

use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};

use crate::models::RgbColor;

/// Number of distinct 24-bit colors.
const COLOR_SPACE: u32 = 0x0100_0000;

/// Source of uniformly distributed integers.
pub trait RandomSource {
    /// Returns a value in `[0, bound)`. Callers never pass a zero bound.
    fn next_below(&mut self, bound: u32) -> u32;

    /// Returns a hue in whole degrees, `[0, 360)`.
    fn hue(&mut self) -> u16 {
        // 360 fits in u16
        u16::try_from(self.next_below(360)).unwrap_or(0)
    }

    /// Returns a uniformly random opaque color.
    fn color(&mut self) -> RgbColor {
        RgbColor::from_u24(self.next_below(COLOR_SPACE))
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_below(&mut self, bound: u32) -> u32 {
        (**self).next_below(bound)
    }
}

impl<R: RandomSource + ?Sized> RandomSource for Box<R> {
    fn next_below(&mut self, bound: u32) -> u32 {
        (**self).next_below(bound)
    }
}

/// Unseeded randomness backed by the thread-local generator.
#[derive(Debug, Clone)]
pub struct ThreadRandom(ThreadRng);

impl ThreadRandom {
    /// Creates a source backed by [`rand::rng`].
    #[must_use]
    pub fn new() -> Self {
        Self(rand::rng())
    }
}

impl Default for ThreadRandom {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for ThreadRandom {
    fn next_below(&mut self, bound: u32) -> u32 {
        self.0.random_range(0..bound.max(1))
    }
}

/// Reproducible randomness from a 64-bit seed.
#[derive(Debug, Clone)]
pub struct SeededRandom(StdRng);

impl SeededRandom {
    /// Creates a source that yields the same sequence for the same seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

impl RandomSource for SeededRandom {
    fn next_below(&mut self, bound: u32) -> u32 {
        self.0.random_range(0..bound.max(1))
    }
}

/// Replays a fixed list of values, wrapping around at the end.
///
/// Each value is reduced modulo the requested bound.
#[derive(Debug, Clone, Default)]
pub struct SequenceRandom {
    values: Vec<u32>,
    position: usize,
}

impl SequenceRandom {
    /// Creates a source that yields `values` in order.
    #[must_use]
    pub fn new(values: impl Into<Vec<u32>>) -> Self {
        Self {
            values: values.into(),
            position: 0,
        }
    }

    /// Number of values consumed so far.
    #[must_use]
    pub const fn consumed(&self) -> usize {
        self.position
    }
}

impl RandomSource for SequenceRandom {
    fn next_below(&mut self, bound: u32) -> u32 {
        if self.values.is_empty() {
            return 0;
        }
        let value = self.values[self.position % self.values.len()];
        self.position += 1;
        value % bound.max(1)
    }
}

/// Either an unseeded or a seeded source, chosen at runtime.
#[derive(Debug, Clone)]
pub enum AnyRandom {
    /// Thread-local entropy.
    Thread(ThreadRandom),
    /// Fixed seed.
    Seeded(SeededRandom),
}

impl AnyRandom {
    /// Seeded when `seed` is given, unseeded otherwise.
    #[must_use]
    pub fn from_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::Seeded(SeededRandom::new(seed)),
            None => Self::Thread(ThreadRandom::new()),
        }
    }
}

impl RandomSource for AnyRandom {
    fn next_below(&mut self, bound: u32) -> u32 {
        match self {
            Self::Thread(rng) => rng.next_below(bound),
            Self::Seeded(rng) => rng.next_below(bound),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequence_replays_and_wraps() {
        let mut rng = SequenceRandom::new(vec![5, 370, 0x00FF_0000]);
        assert_eq!(rng.hue(), 5);
        assert_eq!(rng.hue(), 10);
        assert_eq!(rng.color(), RgbColor::new(255, 0, 0));
        assert_eq!(rng.hue(), 5);
        assert_eq!(rng.consumed(), 4);
    }

    #[test]
    fn test_empty_sequence_yields_zero() {
        let mut rng = SequenceRandom::default();
        assert_eq!(rng.next_below(10), 0);
        assert_eq!(rng.color(), RgbColor::BLACK);
    }

    #[test]
    fn test_seeded_is_reproducible() {
        let mut a = SeededRandom::new(42);
        let mut b = SeededRandom::new(42);
        let first: Vec<u16> = (0..16).map(|_| a.hue()).collect();
        let second: Vec<u16> = (0..16).map(|_| b.hue()).collect();
        assert_eq!(first, second);
        assert!(first.iter().all(|&h| h < 360));
    }

    #[test]
    fn test_thread_random_in_range() {
        let mut rng = ThreadRandom::new();
        for _ in 0..200 {
            assert!(rng.hue() < 360);
            assert!(rng.next_below(7) < 7);
        }
    }

    #[test]
    fn test_mut_ref_forwarding() {
        fn draw<R: RandomSource>(mut rng: R) -> u32 {
            rng.next_below(10)
        }

        let mut inner = SequenceRandom::new(vec![3]);
        assert_eq!(draw(&mut inner), 3);
        assert_eq!(inner.consumed(), 1);
    }
}
