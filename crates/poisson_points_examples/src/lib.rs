#![forbid(unsafe_code)]

mod density;
mod rendering;

pub use density::DensityMap;
pub use rendering::{
    init_tracing, rasterize_points, render_points_to_png, write_points_txt, RenderConfig,
};
