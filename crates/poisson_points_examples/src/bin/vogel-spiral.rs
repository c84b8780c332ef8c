use poisson_points::prelude::*;
use poisson_points_examples::{init_tracing, render_points_to_png, RenderConfig};

fn main() -> anyhow::Result<()> {
    init_tracing();
    let points = generate_vogel_points(4_000);

    let config = RenderConfig::new((512, 512))
        .with_background([250, 245, 230])
        .with_foreground([200, 120, 20]);
    // Deterministic points, the RNG is only consulted for density maps.
    let mut rng = DefaultPrng::with_seed(0);
    render_points_to_png(&points, &config, None, &mut rng, "vogel-spiral.png")?;
    Ok(())
}
