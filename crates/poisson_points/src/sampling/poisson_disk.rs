//! Poisson disk sampling by dart throwing (Bridson).
//!
//! Accepted points are kept in an active list. Each round pops a uniformly random entry and
//! throws `new_points_per_sample` darts into the annulus `[min_dist, 2 * min_dist)` around it;
//! a dart survives if it lies inside the shape and no accepted point is closer than
//! `min_dist`. Neighbour tests go through a [`SpatialGrid`] with cells of
//! `min_dist / sqrt(2)`.
use std::f32::consts::{SQRT_2, TAU};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::grid::{cells_per_unit, SpatialGrid};
use crate::point::{Point, Shape};
use crate::rng::PointRng;
use crate::sampling::PointSampling;

/// Candidates thrown around each popped sample unless configured otherwise (Bridson's `k`).
pub const DEFAULT_NEW_POINTS_PER_SAMPLE: usize = 30;

/// Draws allowed for the first point before giving up.
pub const MAX_SEED_ATTEMPTS: usize = 10_000;

/// Upper bound on acceleration grid cells, i.e. on how small `min_dist` may get.
pub const MAX_GRID_CELLS: usize = 1 << 26;

/// Poisson disk sampling strategy.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct PoissonDiskSampling {
    /// Target number of points. Sampling may stop earlier when the domain is full, and the
    /// parent that reaches the target still keeps all of its accepted children.
    pub count: usize,
    /// Candidates generated around each popped sample.
    pub new_points_per_sample: usize,
    /// Region to fill.
    pub shape: Shape,
    /// Minimum distance between samples. `None` derives `sqrt(count) / count`.
    pub min_dist: Option<f32>,
}

impl PoissonDiskSampling {
    /// Create a sampler for `count` points filling the inscribed circle with the default
    /// minimum distance.
    pub fn new(count: usize) -> Self {
        Self {
            count,
            new_points_per_sample: DEFAULT_NEW_POINTS_PER_SAMPLE,
            shape: Shape::Circle,
            min_dist: None,
        }
    }

    pub fn with_new_points_per_sample(mut self, new_points_per_sample: usize) -> Self {
        self.new_points_per_sample = new_points_per_sample;
        self
    }

    pub fn with_shape(mut self, shape: Shape) -> Self {
        self.shape = shape;
        self
    }

    /// Set the minimum distance. A negative value selects the default estimate.
    pub fn with_min_dist(mut self, min_dist: f32) -> Self {
        self.min_dist = (min_dist >= 0.0 || min_dist.is_nan()).then_some(min_dist);
        self
    }

    /// Minimum distance actually used for sampling.
    pub fn resolved_min_dist(&self) -> f32 {
        match self.min_dist {
            Some(d) if d >= 0.0 || d.is_nan() => d,
            _ => default_min_dist(self.count),
        }
    }

    fn validate(&self) -> Result<f32> {
        if self.count == 0 {
            return Err(Error::InvalidConfig(
                "Poisson disk sampling needs a positive point count".into(),
            ));
        }

        let min_dist = self.resolved_min_dist();
        if !min_dist.is_finite() || min_dist <= 0.0 {
            return Err(Error::InvalidConfig(format!(
                "minimum distance must be positive and finite, got {min_dist}"
            )));
        }

        let side = cells_per_unit(min_dist / SQRT_2);
        if side.saturating_mul(side) > MAX_GRID_CELLS {
            return Err(Error::InvalidConfig(format!(
                "minimum distance {min_dist} needs a {side}x{side} grid, above the {MAX_GRID_CELLS} cell limit"
            )));
        }

        Ok(min_dist)
    }
}

impl Default for PoissonDiskSampling {
    fn default() -> Self {
        Self::new(1)
    }
}

impl PointSampling for PoissonDiskSampling {
    fn generate(&self, rng: &mut dyn PointRng) -> Result<Vec<Point>> {
        let min_dist = self.validate()?;
        let mut sampler = PoissonDiskSampler::new(min_dist, self.shape);
        sampler.generate(self.count, self.new_points_per_sample, rng)
    }
}

/// Generate Poisson disk points until `count` is reached or no active points remain.
///
/// `fill_circle` selects the inscribed disk instead of the unit square; a negative
/// `min_dist` selects the default estimate `sqrt(count) / count`.
pub fn generate_poisson_points(
    count: usize,
    rng: &mut dyn PointRng,
    new_points_per_sample: usize,
    fill_circle: bool,
    min_dist: f32,
) -> Result<Vec<Point>> {
    PoissonDiskSampling::new(count)
        .with_new_points_per_sample(new_points_per_sample)
        .with_shape(Shape::from_fill_circle(fill_circle))
        .with_min_dist(min_dist)
        .generate(rng)
}

/// Empirical spacing that roughly fills unit area with `count` points.
#[inline]
pub fn default_min_dist(count: usize) -> f32 {
    let n = count as f32;
    n.sqrt() / n
}

struct PoissonDiskSampler {
    min_dist: f32,
    cell_size: f32,
    shape: Shape,
    grid: SpatialGrid,
    active_list: Vec<Point>,
}

impl PoissonDiskSampler {
    fn new(min_dist: f32, shape: Shape) -> Self {
        let cell_size = min_dist / SQRT_2;
        Self {
            min_dist,
            cell_size,
            shape,
            grid: SpatialGrid::covering_unit_square(cell_size),
            active_list: Vec::new(),
        }
    }

    fn accepts(&self, candidate: Point) -> bool {
        self.shape.contains(candidate)
            && !self
                .grid
                .is_in_neighbourhood(candidate, self.min_dist, self.cell_size)
    }

    fn add_point(&mut self, point: Point, points: &mut Vec<Point>) {
        self.active_list.push(point);
        self.grid.insert(point);
        points.push(point);
    }

    fn pop_random(&mut self, rng: &mut dyn PointRng) -> Option<Point> {
        if self.active_list.is_empty() {
            return None;
        }
        let idx = rng.random_int(self.active_list.len() - 1);
        Some(self.active_list.swap_remove(idx))
    }

    fn random_point_around(&self, p: Point, rng: &mut dyn PointRng) -> Point {
        let radius = self.min_dist * (rng.random_float() + 1.0);
        let angle = TAU * rng.random_float();
        Point::new(p.x + radius * angle.cos(), p.y + radius * angle.sin())
    }

    fn seed_point(&self, rng: &mut dyn PointRng) -> Result<Point> {
        for _ in 0..MAX_SEED_ATTEMPTS {
            let candidate = Point::new(rng.random_float(), rng.random_float());
            if self.shape.contains(candidate) {
                return Ok(candidate);
            }
        }
        Err(Error::SeedRejected {
            attempts: MAX_SEED_ATTEMPTS,
        })
    }

    fn generate(
        &mut self,
        count: usize,
        new_points_per_sample: usize,
        rng: &mut dyn PointRng,
    ) -> Result<Vec<Point>> {
        debug!(
            "Poisson disk sampling: count={}, min_dist={}, cell_size={}, grid={}x{}, shape={:?}",
            count,
            self.min_dist,
            self.cell_size,
            self.grid.width(),
            self.grid.height(),
            self.shape
        );

        let mut points = Vec::with_capacity(count);
        let first = self.seed_point(rng)?;
        self.add_point(first, &mut points);

        // The target is only checked between parents, so the last parent may overshoot it.
        while points.len() < count {
            let Some(parent) = self.pop_random(rng) else {
                break;
            };

            for _ in 0..new_points_per_sample {
                let candidate = self.random_point_around(parent, rng);
                if self.accepts(candidate) {
                    self.add_point(candidate, &mut points);
                }
            }
        }

        if points.len() < count {
            warn!(
                "Poisson disk sampling ran out of active points after {} of {} requested points.",
                points.len(),
                count
            );
        }

        Ok(points)
    }
}
