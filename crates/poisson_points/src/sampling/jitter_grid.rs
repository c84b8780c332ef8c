//! Jittered-grid position sampling strategy.
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};
use crate::point::{Point, Shape};
use crate::rng::PointRng;
use crate::sampling::PointSampling;

/// Jittered grid sampling over the unit square.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct JitterGridSampling {
    /// Requested number of points; the grid holds at least this many cells.
    pub count: usize,
    /// Points outside this shape are dropped after jittering.
    pub shape: Shape,
    /// Jitter amount in [0, 1], where 0 is cell centers and 1 reaches the cell edges.
    pub jitter: f32,
}

impl JitterGridSampling {
    /// Fully jittered grid of at least `count` cells filling the unit square.
    pub fn new(count: usize) -> Self {
        Self {
            count,
            shape: Shape::Square,
            jitter: 1.0,
        }
    }

    pub fn with_shape(mut self, shape: Shape) -> Self {
        self.shape = shape;
        self
    }

    /// Set the jitter amount, clamped to [0, 1].
    pub fn with_jitter(mut self, jitter: f32) -> Self {
        self.jitter = jitter.clamp(0.0, 1.0);
        self
    }

    /// Grid dimensions `(cols, rows)` used for `count` points.
    pub fn dimensions(&self) -> (usize, usize) {
        let cols = (self.count as f64).sqrt().ceil() as usize;
        let rows = self.count.div_ceil(cols.max(1));
        (cols, rows)
    }
}

impl PointSampling for JitterGridSampling {
    fn generate(&self, rng: &mut dyn PointRng) -> Result<Vec<Point>> {
        if self.count == 0 {
            return Err(Error::InvalidConfig(
                "jittered grid needs a positive point count".into(),
            ));
        }

        let (cols, rows) = self.dimensions();
        let cell_w = 1.0 / cols as f32;
        let cell_h = 1.0 / rows as f32;

        let jitter = if self.jitter.is_finite() {
            self.jitter.clamp(0.0, 1.0)
        } else {
            0.0
        };
        let jitter_x = jitter * cell_w * 0.5;
        let jitter_y = jitter * cell_h * 0.5;

        let mut points = Vec::with_capacity(cols * rows);

        for j in 0..rows {
            for i in 0..cols {
                let cx = (i as f32 + 0.5) * cell_w;
                let cy = (j as f32 + 0.5) * cell_h;
                let jx = (rng.random_float() * 2.0 - 1.0) * jitter_x;
                let jy = (rng.random_float() * 2.0 - 1.0) * jitter_y;
                let p = Point::new((cx + jx).clamp(0.0, 1.0), (cy + jy).clamp(0.0, 1.0));

                if self.shape.contains(p) {
                    points.push(p);
                }
            }
        }

        if points.len() < cols * rows {
            debug!(
                "Jittered grid clipped to {:?}: kept {} of {} cells.",
                self.shape,
                points.len(),
                cols * rows
            );
        }

        Ok(points)
    }
}

/// Generate a jittered grid of at least `count` cells, optionally clipped to the disk.
pub fn generate_jittered_grid_points(
    count: usize,
    rng: &mut dyn PointRng,
    fill_circle: bool,
) -> Result<Vec<Point>> {
    JitterGridSampling::new(count)
        .with_shape(Shape::from_fill_circle(fill_circle))
        .generate(rng)
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::rng::DefaultPrng;

    #[test]
    fn new_clamps_jitter_value() {
        let sampler = JitterGridSampling::new(4).with_jitter(2.0);
        assert_eq!(sampler.jitter, 1.0);
        let sampler = JitterGridSampling::new(4).with_jitter(-1.0);
        assert_eq!(sampler.jitter, 0.0);
    }

    #[test]
    fn dimensions_cover_requested_count() {
        for count in [1, 2, 3, 4, 5, 10, 17, 100, 101] {
            let (cols, rows) = JitterGridSampling::new(count).dimensions();
            assert!(cols * rows >= count, "count {count}");
            assert!(cols * rows < count + cols, "count {count}");
        }
        assert_eq!(JitterGridSampling::new(10).dimensions(), (4, 3));
        assert_eq!(JitterGridSampling::new(16).dimensions(), (4, 4));
    }

    #[test]
    fn generate_returns_cell_centers_without_jitter() {
        let strategy = JitterGridSampling::new(4).with_jitter(0.0);
        let mut rng = StdRng::seed_from_u64(1);
        let points = strategy.generate(&mut rng).unwrap();

        assert_eq!(
            points,
            vec![
                Point::new(0.25, 0.25),
                Point::new(0.75, 0.25),
                Point::new(0.25, 0.75),
                Point::new(0.75, 0.75),
            ]
        );
    }

    #[test]
    fn jittered_points_stay_in_their_cells() {
        let strategy = JitterGridSampling::new(25);
        let mut rng = DefaultPrng::with_seed(9);
        let points = strategy.generate(&mut rng).unwrap();
        assert_eq!(points.len(), 25);

        for (idx, p) in points.iter().enumerate() {
            let (i, j) = ((idx % 5) as f32, (idx / 5) as f32);
            assert!(p.x >= i * 0.2 - 1e-6 && p.x <= (i + 1.0) * 0.2 + 1e-6);
            assert!(p.y >= j * 0.2 - 1e-6 && p.y <= (j + 1.0) * 0.2 + 1e-6);
            assert!(p.is_in_square());
        }
    }

    #[test]
    fn circle_clip_drops_corner_cells() {
        let mut rng = DefaultPrng::with_seed(4);
        let points = generate_jittered_grid_points(400, &mut rng, true).unwrap();
        assert!(points.len() < 400);
        assert!(!points.is_empty());
        assert!(points.iter().all(|p| p.is_in_circle()));
    }

    #[test]
    fn zero_count_is_rejected() {
        let mut rng = DefaultPrng::with_seed(4);
        assert!(matches!(
            generate_jittered_grid_points(0, &mut rng, false),
            Err(Error::InvalidConfig(_))
        ));
    }

    #[test]
    fn same_seed_reproduces_grid() {
        let s = JitterGridSampling::new(64);
        let a = s.generate(&mut DefaultPrng::with_seed(10)).unwrap();
        let b = s.generate(&mut DefaultPrng::with_seed(10)).unwrap();
        assert_eq!(a, b);
    }
}
