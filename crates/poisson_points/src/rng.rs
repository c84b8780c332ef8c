//! Random sources consumed by the samplers.
//!
//! Samplers draw through [`PointRng`], which only asks for uniform floats in `[0, 1)` and
//! uniform integers in `[0, max]`. Every [`rand::RngCore`] implements it, so seeded `rand`
//! generators and hand-written test doubles are interchangeable with [`DefaultPrng`].
use std::time::{SystemTime, UNIX_EPOCH};

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

/// Uniform random source used by the point generators.
pub trait PointRng {
    /// Uniform float in `[0, 1)`.
    fn random_float(&mut self) -> f32;

    /// Uniform integer in `[0, max]`, both ends inclusive.
    fn random_int(&mut self, max: usize) -> usize;
}

impl<R: RngCore + ?Sized> PointRng for R {
    #[inline]
    fn random_float(&mut self) -> f32 {
        // 24 bits fill the f32 mantissa exactly, so the result never rounds up to 1.0.
        (self.next_u32() >> 8) as f32 * (1.0 / (1u32 << 24) as f32)
    }

    fn random_int(&mut self, max: usize) -> usize {
        let max = max as u64;
        if max == u64::MAX {
            return self.next_u64() as usize;
        }

        let range = max + 1;
        // Largest multiple of `range` representable in u64; draws above it are rejected.
        let zone = u64::MAX - (u64::MAX - range + 1) % range;
        loop {
            let v = self.next_u64();
            if v <= zone {
                return (v % range) as usize;
            }
        }
    }
}

/// Default generator: a [`StdRng`] seeded either from entropy or from an explicit seed.
#[derive(Debug, Clone)]
pub struct DefaultPrng {
    inner: StdRng,
}

impl DefaultPrng {
    /// Create a generator seeded from OS entropy mixed with the wall clock.
    ///
    /// Two processes started in the same instant still diverge through the entropy part.
    pub fn new() -> Self {
        let entropy = rand::rng().next_u64();
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or_default();
        Self::with_seed(entropy ^ nanos.rotate_left(32))
    }

    /// Create a fully deterministic generator.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for DefaultPrng {
    fn default() -> Self {
        Self::new()
    }
}

impl RngCore for DefaultPrng {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        self.inner.next_u32()
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        self.inner.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.inner.fill_bytes(dest)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Replays a fixed list of `u64` draws, cycling when exhausted.
    pub(crate) struct SequenceRng {
        values: Vec<u64>,
        pos: usize,
    }

    impl SequenceRng {
        pub(crate) fn new(values: Vec<u64>) -> Self {
            Self { values, pos: 0 }
        }
    }

    impl RngCore for SequenceRng {
        fn next_u32(&mut self) -> u32 {
            (self.next_u64() >> 32) as u32
        }

        fn next_u64(&mut self) -> u64 {
            let v = self.values[self.pos % self.values.len()];
            self.pos += 1;
            v
        }

        fn fill_bytes(&mut self, dest: &mut [u8]) {
            for chunk in dest.chunks_mut(8) {
                let bytes = self.next_u64().to_le_bytes();
                chunk.copy_from_slice(&bytes[..chunk.len()]);
            }
        }
    }

    #[test]
    fn random_float_is_zero_for_zero_input() {
        let mut rng = SequenceRng::new(vec![0]);
        assert_eq!(rng.random_float(), 0.0);
    }

    #[test]
    fn random_float_stays_below_one_for_max_input() {
        let mut rng = SequenceRng::new(vec![u64::MAX]);
        let v = rng.random_float();
        assert!(v < 1.0);
        assert!(v > 0.999_999);
    }

    #[test]
    fn random_float_midpoint() {
        let mut rng = SequenceRng::new(vec![1u64 << 63]);
        assert_eq!(rng.random_float(), 0.5);
    }

    #[test]
    fn random_int_zero_max_always_returns_zero() {
        let mut rng = DefaultPrng::with_seed(5);
        for _ in 0..100 {
            assert_eq!(rng.random_int(0), 0);
        }
    }

    #[test]
    fn random_int_is_inclusive_and_bounded() {
        let mut rng = DefaultPrng::with_seed(11);
        let mut seen = [false; 4];
        for _ in 0..1_000 {
            let v = rng.random_int(3);
            assert!(v <= 3);
            seen[v] = true;
        }
        assert!(seen.iter().all(|&s| s), "every value in [0, 3] should occur");
    }

    #[test]
    fn random_int_rejects_draws_above_zone() {
        // For max = 2 (range 3), u64::MAX lies above the last full multiple and is redrawn.
        let mut rng = SequenceRng::new(vec![u64::MAX, 4]);
        assert_eq!(rng.random_int(2), 1);
    }

    #[test]
    fn seeded_generators_are_reproducible() {
        let mut a = DefaultPrng::with_seed(1234);
        let mut b = DefaultPrng::with_seed(1234);
        for _ in 0..32 {
            assert_eq!(a.random_float(), b.random_float());
            assert_eq!(a.random_int(1000), b.random_int(1000));
        }
    }

    #[test]
    fn different_seeds_diverge() {
        let mut a = DefaultPrng::with_seed(1);
        let mut b = DefaultPrng::with_seed(2);
        let xs: Vec<u64> = (0..8).map(|_| a.next_u64()).collect();
        let ys: Vec<u64> = (0..8).map(|_| b.next_u64()).collect();
        assert_ne!(xs, ys);
    }

    #[test]
    fn entropy_seeded_generators_produce_values_in_range() {
        let mut rng = DefaultPrng::new();
        for _ in 0..100 {
            let v = rng.random_float();
            assert!((0.0..1.0).contains(&v));
        }
    }
}
