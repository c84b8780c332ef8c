//! Point-set generators over the unit square.
//!
//! Each strategy is a small configuration struct implementing [`PointSampling`]. The
//! deterministic ones ([`VogelSpiralSampling`], [`HammersleySampling`]) never touch the
//! random source they are handed.
use crate::error::Result;
use crate::point::Point;
use crate::rng::PointRng;

pub mod hammersley;
pub mod jitter_grid;
pub mod poisson_disk;
pub mod vogel_spiral;

pub use hammersley::{generate_hammersley_points, radical_inverse_base2, HammersleySampling};
pub use jitter_grid::{generate_jittered_grid_points, JitterGridSampling};
pub use poisson_disk::{generate_poisson_points, PoissonDiskSampling};
pub use vogel_spiral::{generate_vogel_points, VogelSpiralSampling};

/// Trait for point-set generation.
pub trait PointSampling: Send + Sync {
    fn generate(&self, rng: &mut dyn PointRng) -> Result<Vec<Point>>;
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::rng::DefaultPrng;

    pub(crate) fn pairwise_min_distance(points: &[Point]) -> f32 {
        let mut min = f32::MAX;
        for i in 0..points.len() {
            for j in (i + 1)..points.len() {
                min = min.min(points[i].distance(points[j]));
            }
        }
        min
    }

    #[test]
    fn strategies_are_usable_as_trait_objects() {
        let strategies: Vec<Box<dyn PointSampling>> = vec![
            Box::new(PoissonDiskSampling::new(50)),
            Box::new(VogelSpiralSampling::new(50)),
            Box::new(JitterGridSampling::new(50)),
            Box::new(HammersleySampling::new(50)),
        ];

        let mut rng = DefaultPrng::with_seed(99);
        for strategy in &strategies {
            let points = strategy.generate(&mut rng).expect("valid configuration");
            assert!(!points.is_empty());
            assert!(points.iter().all(|p| p.is_in_square()));
        }
    }
}
