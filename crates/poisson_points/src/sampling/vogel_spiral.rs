//! Vogel spiral (sunflower) sampling of the inscribed disk.
use std::f32::consts::PI;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::point::Point;
use crate::rng::PointRng;
use crate::sampling::PointSampling;

/// `sqrt(5)` rounded to f32; `f32::sqrt` is not usable in a const.
const SQRT_5: f32 = 2.236_068;

/// Golden angle `pi * (3 - sqrt(5))` in radians.
pub const GOLDEN_ANGLE: f32 = PI * (3.0 - SQRT_5);

/// Deterministic golden-angle spiral filling the disk centered at `(0.5, 0.5)`.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VogelSpiralSampling {
    /// Number of points to generate.
    pub count: usize,
}

impl VogelSpiralSampling {
    pub fn new(count: usize) -> Self {
        Self { count }
    }

    /// The spiral points. Identical for identical `count`.
    pub fn points(&self) -> Vec<Point> {
        let n = self.count as f32;
        (0..self.count)
            .map(|i| {
                let fi = i as f32;
                // Area-uniform radial spacing.
                let r = ((fi + 0.5) / n).sqrt();
                let theta = fi * GOLDEN_ANGLE;
                Point::new(0.5 + 0.5 * r * theta.cos(), 0.5 + 0.5 * r * theta.sin())
            })
            .collect()
    }
}

impl PointSampling for VogelSpiralSampling {
    fn generate(&self, _rng: &mut dyn PointRng) -> Result<Vec<Point>> {
        Ok(self.points())
    }
}

/// Generate `count` Vogel spiral points.
pub fn generate_vogel_points(count: usize) -> Vec<Point> {
    VogelSpiralSampling::new(count).points()
}
