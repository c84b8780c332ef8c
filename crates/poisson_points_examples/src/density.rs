//! Grayscale density maps used to thin point sets at render time.
use std::path::Path;

use anyhow::{ensure, Context};
use poisson_points::point::Point;
use tracing::info;

/// Row-major scalar field with one value in [0, 1] per pixel.
#[derive(Debug, Clone, PartialEq)]
pub struct DensityMap {
    width: u32,
    height: u32,
    values: Vec<f32>,
}

impl DensityMap {
    /// Build a map by evaluating `f(x, y)` for every pixel; results are clamped to [0, 1].
    pub fn from_fn(width: u32, height: u32, mut f: impl FnMut(u32, u32) -> f32) -> Self {
        let mut values = Vec::with_capacity(width as usize * height as usize);
        for y in 0..height {
            for x in 0..width {
                values.push(f(x, y).clamp(0.0, 1.0));
            }
        }
        Self {
            width,
            height,
            values,
        }
    }

    /// Horizontal ramp from 0 on the left edge to 1 on the right edge.
    pub fn linear_gradient(size: u32) -> Self {
        let denom = size.saturating_sub(1).max(1) as f32;
        Self::from_fn(size, size, |x, _| x as f32 / denom)
    }

    /// Load the red channel of an image file, scaled to [0, 1].
    pub fn load_png(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        info!("Loading density map {}", path.display());

        let img = image::open(path)
            .with_context(|| format!("failed to open density map {}", path.display()))?
            .to_rgb8();
        let (width, height) = img.dimensions();
        ensure!(width > 0 && height > 0, "density map {} is empty", path.display());

        info!("Loaded density map ({} x {})", width, height);
        Ok(Self::from_fn(width, height, |x, y| {
            img.get_pixel(x, y)[0] as f32 / 255.0
        }))
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Value at the pixel covering the unit-square point `p`, clamped to the image.
    pub fn sample(&self, p: Point) -> f32 {
        if self.values.is_empty() {
            return 0.0;
        }
        let x = pixel_index(p.x, self.width);
        let y = pixel_index(p.y, self.height);
        self.values[y as usize * self.width as usize + x as usize]
    }
}

#[inline]
pub(crate) fn pixel_index(coord: f32, size: u32) -> u32 {
    let max = size.saturating_sub(1) as f32;
    (coord * size as f32).floor().clamp(0.0, max) as u32
}
