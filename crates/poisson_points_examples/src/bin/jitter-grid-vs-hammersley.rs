use poisson_points::prelude::*;
use poisson_points_examples::{init_tracing, render_points_to_png, write_points_txt, RenderConfig};
use tracing::info;

const NUM_POINTS: usize = 4_096;

fn main() -> anyhow::Result<()> {
    init_tracing();
    let mut rng = DefaultPrng::with_seed(42);
    let config = RenderConfig::new((512, 512));

    let jittered = generate_jittered_grid_points(NUM_POINTS, &mut rng, true)?;
    info!("Jittered grid kept {} points inside the disk", jittered.len());
    render_points_to_png(&jittered, &config, None, &mut rng, "jitter-grid.png")?;

    let mut hammersley = generate_hammersley_points(NUM_POINTS);
    render_points_to_png(&hammersley, &config, None, &mut rng, "hammersley.png")?;

    // Shuffled order lets consumers take any prefix as an unbiased subset.
    shuffle_points(&mut hammersley, &mut rng);
    write_points_txt(&hammersley, "hammersley-shuffled.txt")?;
    Ok(())
}
