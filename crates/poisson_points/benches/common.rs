use std::time::Duration;

use criterion::{Criterion, Throughput};
use poisson_points::rng::DefaultPrng;

/// Point counts every generator is measured at.
pub const COUNTS: [usize; 4] = [1_000, 5_000, 20_000, 50_000];

pub fn default_criterion() -> Criterion {
    Criterion::default()
        .configure_from_args()
        .sample_size(20)
        .warm_up_time(Duration::from_secs(1))
        .measurement_time(Duration::from_secs(3))
}

/// Seeded generator for one benchmark input, so runs compare like with like.
pub fn bench_rng(salt: u64, count: usize) -> DefaultPrng {
    DefaultPrng::with_seed(salt ^ (count as u64).rotate_left(17))
}

/// Throughput in produced points; a run that yields nothing still reports one element.
pub fn points_throughput(points: usize) -> Throughput {
    Throughput::Elements(points.max(1) as u64)
}
