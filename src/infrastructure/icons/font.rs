//! Label faces: a TrueType font from the candidate list, or the bitmap face

use std::fmt;
use std::path::{Path, PathBuf};

use ab_glyph::{point, Font, FontVec, GlyphId, PxScale, ScaleFont};
use image::RgbaImage;

use super::bitmap;
use super::raster::{blend, pixel_coverage};
use crate::error::{AssetError, AssetResult};

/// Face used to draw the icon label
pub enum LabelFace {
    TrueType { path: PathBuf, font: FontVec },
    Bitmap,
}

impl fmt::Debug for LabelFace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LabelFace::TrueType { path, .. } => f.debug_tuple("TrueType").field(path).finish(),
            LabelFace::Bitmap => f.write_str("Bitmap"),
        }
    }
}

impl LabelFace {
    /// Load a TrueType/OpenType font file
    pub fn load(path: &Path) -> AssetResult<Self> {
        let data = std::fs::read(path).map_err(|e| AssetError::io("read font", path, e))?;
        let font = FontVec::try_from_vec(data).map_err(|e| AssetError::Font {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Ok(LabelFace::TrueType {
            path: path.to_path_buf(),
            font,
        })
    }

    /// First candidate that loads, else the bitmap face
    pub fn load_first(candidates: &[PathBuf]) -> Self {
        candidates
            .iter()
            .find_map(|path| Self::load(path).ok())
            .unwrap_or(LabelFace::Bitmap)
    }

    /// Human-readable face description for reports
    pub fn describe(&self) -> String {
        match self {
            LabelFace::TrueType { path, .. } => path.display().to_string(),
            LabelFace::Bitmap => "builtin bitmap".to_string(),
        }
    }

    /// Draw `label` at `px` pixels centred on (`cx`, `cy`)
    pub fn draw_centered(
        &self,
        img: &mut RgbaImage,
        label: &str,
        px: f32,
        cx: f32,
        cy: f32,
        color: [u8; 4],
    ) {
        if px <= 0.0 || label.is_empty() {
            return;
        }
        match self {
            LabelFace::TrueType { font, .. } => draw_outline(font, img, label, px, cx, cy, color),
            LabelFace::Bitmap => draw_bitmap(img, label, px, cx, cy, color),
        }
    }
}

/// Horizontal centre is the middle of the advance width, vertical centre
/// the middle between ascender and descender.
fn draw_outline(
    font: &FontVec,
    img: &mut RgbaImage,
    label: &str,
    px: f32,
    cx: f32,
    cy: f32,
    color: [u8; 4],
) {
    let scale = PxScale::from(px);
    let scaled = font.as_scaled(scale);

    let mut layout: Vec<(GlyphId, f32)> = Vec::with_capacity(label.len());
    let mut caret = 0.0f32;
    let mut previous: Option<GlyphId> = None;
    for c in label.chars() {
        let id = scaled.glyph_id(c);
        if let Some(prev) = previous {
            caret += scaled.kern(prev, id);
        }
        layout.push((id, caret));
        caret += scaled.h_advance(id);
        previous = Some(id);
    }

    let origin_x = cx - caret / 2.0;
    // descent is negative
    let baseline = cy + (scaled.ascent() + scaled.descent()) / 2.0;

    for (id, offset) in layout {
        let glyph = id.with_scale_and_position(scale, point(origin_x + offset, baseline));
        let Some(outlined) = font.outline_glyph(glyph) else {
            continue;
        };
        let bounds = outlined.px_bounds();
        outlined.draw(|gx, gy, coverage| {
            let x = bounds.min.x as i64 + gx as i64;
            let y = bounds.min.y as i64 + gy as i64;
            if x >= 0 && y >= 0 {
                blend(img, x as u32, y as u32, color, coverage);
            }
        });
    }
}

/// Glyph cap height relative to the pixel size
const BITMAP_CAP_RATIO: f32 = 0.7;

fn draw_bitmap(img: &mut RgbaImage, label: &str, px: f32, cx: f32, cy: f32, color: [u8; 4]) {
    let cell = px * BITMAP_CAP_RATIO / bitmap::GLYPH_HEIGHT as f32;
    let width = bitmap::label_cells(label) as f32 * cell;
    let height = bitmap::GLYPH_HEIGHT as f32 * cell;
    let left = cx - width / 2.0;
    let top = cy - height / 2.0;

    let glyphs: Vec<bitmap::GlyphRows> = label.chars().map(bitmap::glyph).collect();
    let inked = |x: f32, y: f32| -> bool {
        let gx = (x - left) / cell;
        let gy = (y - top) / cell;
        if gx < 0.0 || gy < 0.0 {
            return false;
        }
        let col = gx as u32;
        let index = (col / bitmap::GLYPH_ADVANCE) as usize;
        match glyphs.get(index) {
            Some(rows) => bitmap::is_set(rows, col % bitmap::GLYPH_ADVANCE, gy as u32),
            None => false,
        }
    };

    let x0 = left.floor().max(0.0) as u32;
    let y0 = top.floor().max(0.0) as u32;
    let x1 = ((left + width).ceil() as u32).min(img.width());
    let y1 = ((top + height).ceil() as u32).min(img.height());
    for y in y0..y1 {
        for x in x0..x1 {
            let coverage = pixel_coverage(x, y, &inked);
            if coverage > 0.0 {
                blend(img, x, y, color, coverage);
            }
        }
    }
}
