//! Pixel-level drawing on RGBA canvases

use image::{Rgba, RgbaImage};

/// Subsamples per axis for edge anti-aliasing
const SUPERSAMPLE: u32 = 4;

/// Transparent canvas with a filled rounded square covering all of it
pub fn rounded_square(size: u32, radius: u32, fill: [u8; 4]) -> RgbaImage {
    let mut img = RgbaImage::new(size, size);
    let edge = size as f32;
    let r = (radius as f32).min(edge / 2.0);

    for y in 0..size {
        for x in 0..size {
            let coverage = pixel_coverage(x, y, |px, py| inside_rounded(px, py, edge, r));
            if coverage > 0.0 {
                blend(&mut img, x, y, fill, coverage);
            }
        }
    }
    img
}

/// Fraction of the pixel at (x, y) whose subsamples satisfy `inside`
pub fn pixel_coverage(x: u32, y: u32, inside: impl Fn(f32, f32) -> bool) -> f32 {
    let step = 1.0 / SUPERSAMPLE as f32;
    let mut hits = 0u32;
    for sy in 0..SUPERSAMPLE {
        for sx in 0..SUPERSAMPLE {
            let px = x as f32 + (sx as f32 + 0.5) * step;
            let py = y as f32 + (sy as f32 + 0.5) * step;
            if inside(px, py) {
                hits += 1;
            }
        }
    }
    hits as f32 / (SUPERSAMPLE * SUPERSAMPLE) as f32
}

fn inside_rounded(px: f32, py: f32, edge: f32, r: f32) -> bool {
    if px < 0.0 || py < 0.0 || px > edge || py > edge {
        return false;
    }
    if r <= 0.0 {
        return true;
    }
    // nearest point of the inner rectangle the corners are centred on
    let cx = px.clamp(r, edge - r);
    let cy = py.clamp(r, edge - r);
    let dx = px - cx;
    let dy = py - cy;
    dx * dx + dy * dy <= r * r
}

/// Source-over composite of `color` at `coverage` onto one pixel
pub fn blend(img: &mut RgbaImage, x: u32, y: u32, color: [u8; 4], coverage: f32) {
    if x >= img.width() || y >= img.height() {
        return;
    }
    let src_a = (color[3] as f32 / 255.0) * coverage.clamp(0.0, 1.0);
    if src_a <= 0.0 {
        return;
    }

    let Rgba(dst) = *img.get_pixel(x, y);
    let dst_a = dst[3] as f32 / 255.0;
    let out_a = src_a + dst_a * (1.0 - src_a);

    let mut out = [0u8; 4];
    for i in 0..3 {
        let s = color[i] as f32 / 255.0;
        let d = dst[i] as f32 / 255.0;
        let c = (s * src_a + d * dst_a * (1.0 - src_a)) / out_a;
        out[i] = (c * 255.0).round() as u8;
    }
    out[3] = (out_a * 255.0).round() as u8;
    img.put_pixel(x, y, Rgba(out));
}

#[cfg(test)]
mod tests {
    use super::*;

    const BG: [u8; 4] = [0x14, 0x14, 0x14, 0xFF];

    #[test]
    fn centre_is_filled_and_corners_are_transparent() {
        let img = rounded_square(64, 11, BG);

        assert_eq!(img.get_pixel(32, 32).0, BG);
        assert_eq!(img.get_pixel(0, 0).0[3], 0);
        assert_eq!(img.get_pixel(63, 63).0[3], 0);
        // edges away from the corners are fully covered
        assert_eq!(img.get_pixel(32, 0).0, BG);
        assert_eq!(img.get_pixel(0, 32).0, BG);
    }

    #[test]
    fn zero_radius_fills_everything() {
        let img = rounded_square(8, 0, BG);
        assert!(img.pixels().all(|p| p.0 == BG));
    }

    #[test]
    fn blend_full_coverage_replaces_pixel() {
        let mut img = rounded_square(4, 0, BG);
        blend(&mut img, 1, 1, [255, 255, 255, 255], 1.0);
        assert_eq!(img.get_pixel(1, 1).0, [255, 255, 255, 255]);
    }

    #[test]
    fn blend_half_coverage_mixes_colours() {
        let mut img = rounded_square(4, 0, [0, 0, 0, 255]);
        blend(&mut img, 0, 0, [255, 255, 255, 255], 0.5);
        let p = img.get_pixel(0, 0).0;
        assert!((126..=129).contains(&p[0]), "{:?}", p);
        assert_eq!(p[3], 255);
    }

    #[test]
    fn blend_outside_canvas_is_ignored() {
        let mut img = RgbaImage::new(2, 2);
        blend(&mut img, 5, 5, [255, 0, 0, 255], 1.0);
        assert!(img.pixels().all(|p| p.0[3] == 0));
    }
}
