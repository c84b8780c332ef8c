//! Hammersley low-discrepancy point set.
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::point::Point;
use crate::rng::PointRng;
use crate::sampling::PointSampling;

/// Hammersley set over the unit square: `(i / count, radical_inverse_base2(i))`.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HammersleySampling {
    /// Number of points to generate.
    pub count: usize,
}

impl HammersleySampling {
    pub fn new(count: usize) -> Self {
        Self { count }
    }

    pub fn points(&self) -> Vec<Point> {
        let n = self.count as f64;
        (0..self.count)
            .map(|i| Point::new((i as f64 / n) as f32, radical_inverse_base2(i as u32)))
            .collect()
    }
}

impl PointSampling for HammersleySampling {
    fn generate(&self, _rng: &mut dyn PointRng) -> Result<Vec<Point>> {
        Ok(self.points())
    }
}

/// Generate `count` Hammersley points. Callers wanting a disk clip the result themselves.
pub fn generate_hammersley_points(count: usize) -> Vec<Point> {
    HammersleySampling::new(count).points()
}

/// Van der Corput radical inverse of `n` in base 2: mirror the bits around the binary point.
#[inline]
pub fn radical_inverse_base2(n: u32) -> f32 {
    // Computed in f64 so the 32-bit fraction is exact before the final rounding.
    let v = (n.reverse_bits() as f64 * (1.0 / 4_294_967_296.0)) as f32;
    // Rounding to f32 can reach 1.0 for indices with all low bits set.
    v.min(1.0 - f32::EPSILON / 2.0)
}
