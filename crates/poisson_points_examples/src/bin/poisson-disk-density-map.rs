//! Usage: poisson-disk-density-map [density-map.png]
//!
//! Without an argument a left-to-right gradient is used as the density map.
use poisson_points::prelude::*;
use poisson_points_examples::{init_tracing, render_points_to_png, DensityMap, RenderConfig};
use tracing::info;

const NUM_POINTS: usize = 20_000;
const IMAGE_SIZE: u32 = 1024;

fn main() -> anyhow::Result<()> {
    init_tracing();

    let density = match std::env::args().nth(1) {
        Some(path) => DensityMap::load_png(path)?,
        None => DensityMap::linear_gradient(IMAGE_SIZE),
    };

    let mut rng = DefaultPrng::new();
    let sampling = PoissonDiskSampling::new(NUM_POINTS).with_shape(Shape::Square);
    let points = sampling.generate(&mut rng)?;
    info!(
        "Generated {} points at min distance {}",
        points.len(),
        sampling.resolved_min_dist()
    );

    let config = RenderConfig::new((IMAGE_SIZE, IMAGE_SIZE));
    render_points_to_png(
        &points,
        &config,
        Some(&density),
        &mut rng,
        "poisson-disk-density-map.png",
    )?;
    Ok(())
}
