#![forbid(unsafe_code)]
//! poisson_points: 2D sampling patterns in the unit square or its inscribed disk.
//!
//! Modules:
//! - rng: the [`PointRng`](rng::PointRng) source and the seeded/entropy [`DefaultPrng`](rng::DefaultPrng)
//! - point: point type and circle/square shape predicates
//! - grid: bucket grid for minimum-distance neighbour queries
//! - sampling: Poisson disk, Vogel spiral, jittered grid, Hammersley
//! - shuffle: Fisher-Yates over a point set
//!
//! Generation is pure: no I/O, no global state. Density maps and image output live in the
//! companion examples crate.
pub mod error;
pub mod grid;
pub mod point;
pub mod rng;
pub mod sampling;
pub mod shuffle;

/// Convenient re-exports for common types. Import with `use poisson_points::prelude::*;`.
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::grid::{GridCell, SpatialGrid};
    pub use crate::point::{Point, Shape};
    pub use crate::rng::{DefaultPrng, PointRng};
    pub use crate::sampling::{
        generate_hammersley_points, generate_jittered_grid_points, generate_poisson_points,
        generate_vogel_points, HammersleySampling, JitterGridSampling, PoissonDiskSampling,
        PointSampling, VogelSpiralSampling,
    };
    pub use crate::shuffle::shuffle_points;
}
