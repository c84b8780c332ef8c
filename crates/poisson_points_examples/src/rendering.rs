//! Rasterization and text dumps of generated point sets.
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::Context;
use image::{Rgb, RgbImage};
use poisson_points::point::Point;
use poisson_points::rng::PointRng;
use tracing::info;

use crate::density::{pixel_index, DensityMap};

/// Install a logger for `tracing` events, honoring `RUST_LOG` and defaulting to `info`.
pub fn init_tracing() {
    let env = env_logger::Env::default().default_filter_or("info");
    // A second call (e.g. from tests) keeps the first logger.
    let _ = env_logger::Builder::from_env(env).try_init();
}

/// Image parameters for [`render_points_to_png`].
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Output resolution in pixels.
    pub image_size: (u32, u32),
    pub background: [u8; 3],
    pub foreground: [u8; 3],
}

impl RenderConfig {
    pub fn new(image_size: (u32, u32)) -> Self {
        Self {
            image_size,
            background: [0, 0, 0],
            foreground: [255, 255, 255],
        }
    }

    pub fn with_background(mut self, background: [u8; 3]) -> Self {
        self.background = background;
        self
    }

    pub fn with_foreground(mut self, foreground: [u8; 3]) -> Self {
        self.foreground = foreground;
        self
    }
}

/// Plot every point as one pixel.
///
/// With a density map, a point survives only if a uniform draw does not exceed the map value
/// under it. Returns the image and the number of points drawn.
pub fn rasterize_points(
    points: &[Point],
    config: &RenderConfig,
    density: Option<&DensityMap>,
    rng: &mut dyn PointRng,
) -> (RgbImage, usize) {
    let (w, h) = config.image_size;
    let mut img = RgbImage::from_pixel(w, h, Rgb(config.background));
    if w == 0 || h == 0 {
        return (img, 0);
    }

    let mut drawn = 0;
    for &p in points {
        if let Some(map) = density {
            if rng.random_float() > map.sample(p) {
                continue;
            }
        }
        img.put_pixel(pixel_index(p.x, w), pixel_index(p.y, h), Rgb(config.foreground));
        drawn += 1;
    }

    (img, drawn)
}

/// Rasterize `points` and save them as a PNG at `path`.
pub fn render_points_to_png(
    points: &[Point],
    config: &RenderConfig,
    density: Option<&DensityMap>,
    rng: &mut dyn PointRng,
    path: impl AsRef<Path>,
) -> anyhow::Result<usize> {
    let path = path.as_ref();
    let (img, drawn) = rasterize_points(points, config, density, rng);
    img.save(path)
        .with_context(|| format!("failed to write {}", path.display()))?;
    info!("Saved {} ({} of {} points)", path.display(), drawn, points.len());
    Ok(drawn)
}

/// Write `NumPoints = N` followed by one `X = x; Y = y` line per point.
pub fn write_points_txt(points: &[Point], path: impl AsRef<Path>) -> anyhow::Result<()> {
    let path = path.as_ref();
    let file =
        File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
    let mut out = BufWriter::new(file);

    writeln!(out, "NumPoints = {}", points.len())?;
    for p in points {
        writeln!(out, "X = {}; Y = {}", p.x, p.y)?;
    }
    out.flush()?;

    info!("Saved {}", path.display());
    Ok(())
}
