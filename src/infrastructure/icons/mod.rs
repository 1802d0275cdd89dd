//! Icon rendering
//!
//! - `raster` - rounded square and alpha blending
//! - `font` - TrueType label drawing with a bitmap fallback face
//! - `encode` - PNG and ICO containers

pub mod bitmap;
mod encode;
mod font;
pub mod raster;

pub use encode::{encode_ico, encode_png};
pub use font::LabelFace;

use image::RgbaImage;

use crate::domain::entities::IconSpec;

/// Render the icon for one edge length
pub fn render_icon(spec: &IconSpec, face: &LabelFace, size: u32) -> RgbaImage {
    let mut img = raster::rounded_square(size, spec.corner_radius(size), spec.background.to_rgba());
    let centre = size as f32 / 2.0;
    face.draw_centered(
        &mut img,
        &spec.label,
        spec.font_px(size) as f32,
        centre,
        centre,
        spec.foreground.to_rgba(),
    );
    img
}
