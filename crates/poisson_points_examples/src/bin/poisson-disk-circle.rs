use poisson_points::prelude::*;
use poisson_points_examples::{init_tracing, render_points_to_png, write_points_txt, RenderConfig};
use tracing::info;

const NUM_POINTS: usize = 20_000;
const IMAGE_SIZE: u32 = 1024;

fn main() -> anyhow::Result<()> {
    init_tracing();
    let mut rng = DefaultPrng::new();

    let points = generate_poisson_points(NUM_POINTS, &mut rng, 30, true, -1.0)?;
    info!("Generated {} Poisson disk points", points.len());

    let config = RenderConfig::new((IMAGE_SIZE, IMAGE_SIZE));
    render_points_to_png(&points, &config, None, &mut rng, "poisson-disk-circle.png")?;
    write_points_txt(&points, "poisson-disk-circle.txt")?;
    Ok(())
}
